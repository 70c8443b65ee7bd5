//! hamming-sim: drives the Hamming(7,4) byte codec over a simulated noisy
//! channel.
//!
//! Each trial runs the full pipeline: sample nibble -> encode -> channel
//! (which may flip one bit) -> verify -> grade the reported location against
//! the channel's ground truth. A summary of outcomes is printed at the end.
//!
//! Exit status: 0 when every verdict matched the codec's guarantees (flips
//! outside the unused bit located exactly, no false alarms), 1 otherwise,
//! 2 for configuration errors.

mod config;
mod input_gen;

use config::Config;
use hamming_sim_core::channel::{ChannelConfig, NoisyChannel};
use hamming_sim_core::codec;
use hamming_sim_core::metrics::Metrics;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("hamming-sim: {}", err);
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    let nibbles = input_gen::generate_nibbles(config.seed, config.trials);

    let mut channel = NoisyChannel::new(ChannelConfig {
        flip_rate: config.flip_rate,
        seed: config.seed,
    });
    let mut metrics = Metrics::new();

    for &nibble in &nibbles {
        let codeword = match codec::encode(nibble) {
            Ok(codeword) => codeword,
            Err(err) => {
                // The generator only produces nibbles, so this path means a
                // bug upstream; count it and keep the run alive.
                eprintln!("hamming-sim: skipping sample: {}", err);
                metrics.encode_failures += 1;
                continue;
            }
        };

        let tx = channel.transmit(codeword);
        let reported = codec::verify(tx.received);

        metrics.record_trial(tx.flipped_bit, reported);
    }

    metrics.complete();

    if config.print_metrics {
        metrics.print_summary();
    }
    metrics.print_result();

    if !metrics.is_success() {
        std::process::exit(1);
    }
}
