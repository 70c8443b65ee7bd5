//! Integration tests for the full hamming-sim pipeline.
//!
//! These tests verify end-to-end behavior: nibble -> encode -> noisy channel
//! -> verify, with every verdict graded against the channel's ground truth.

use hamming_sim_core::{
    channel::{ChannelConfig, NoisyChannel},
    codec::{encode, verify, NO_ERROR},
    metrics::Metrics,
};

/// Run `trials` graded pipeline trials, cycling through all nibbles.
fn run_trials(config: ChannelConfig, trials: u64) -> Metrics {
    let mut channel = NoisyChannel::new(config);
    let mut metrics = Metrics::new();

    for i in 0..trials {
        let nibble = (i % 16) as u8;
        let codeword = encode(nibble).expect("encoding failed");

        let tx = channel.transmit(codeword);
        let reported = verify(tx.received);

        metrics.record_trial(tx.flipped_bit, reported);
    }

    metrics.complete();
    metrics
}

/// A clean channel must leave every codeword verifying as error-free.
#[test]
fn test_full_pipeline_clean() {
    let metrics = run_trials(ChannelConfig::clean(42), 160);

    assert_eq!(metrics.trials, 160);
    assert_eq!(metrics.clean_transmissions, 160);
    assert_eq!(metrics.corrupted_transmissions, 0);
    assert_eq!(metrics.false_alarms, 0);
    assert!(metrics.is_success());
}

/// With corruption on every byte, each flip must either be located exactly
/// or be a bit-7 blind-spot miss; nothing else is acceptable.
#[test]
fn test_full_pipeline_all_corrupted() {
    let config = ChannelConfig {
        flip_rate: 1.0,
        seed: 7,
    };
    let metrics = run_trials(config, 2000);

    assert_eq!(metrics.corrupted_transmissions, 2000);
    assert_eq!(
        metrics.located_exactly + metrics.blind_spot_misses,
        metrics.corrupted_transmissions
    );
    assert_eq!(metrics.mislocated, 0);
    assert!(metrics.is_success());

    // 2000 uniform position draws make both outcomes certain to appear
    assert!(metrics.located_exactly > 0);
    assert!(metrics.blind_spot_misses > 0);

    // Uniform over 8 positions: roughly 1/8 of flips hit the unused bit
    let blind_rate = metrics.blind_spot_rate();
    assert!(blind_rate > 0.08 && blind_rate < 0.18, "blind rate {}", blind_rate);
}

/// Moderate noise: clean bytes are never accused, corrupted bytes are never
/// mislocated, and the trial accounting adds up.
#[test]
fn test_full_pipeline_moderate_noise() {
    let config = ChannelConfig {
        flip_rate: 0.3,
        seed: 12345,
    };
    let metrics = run_trials(config, 5000);

    assert_eq!(metrics.trials, 5000);
    assert_eq!(
        metrics.clean_transmissions + metrics.corrupted_transmissions,
        metrics.trials
    );
    assert!(metrics.corrupted_transmissions > 0);
    assert!(metrics.clean_transmissions > 0);
    assert!(metrics.is_success());
}

/// The same seed must reproduce the same outcome counts exactly.
#[test]
fn test_pipeline_determinism() {
    let config = ChannelConfig {
        flip_rate: 0.5,
        seed: 99,
    };

    let m1 = run_trials(config, 1000);
    let m2 = run_trials(config, 1000);

    assert_eq!(m1.clean_transmissions, m2.clean_transmissions);
    assert_eq!(m1.corrupted_transmissions, m2.corrupted_transmissions);
    assert_eq!(m1.located_exactly, m2.located_exactly);
    assert_eq!(m1.blind_spot_misses, m2.blind_spot_misses);
}

/// The fixed demonstration sequence: encode a known nibble, corrupt a known
/// bit, and watch the exact position come back out.
#[test]
fn test_known_corruption_round() {
    let codeword = encode(0b1010).expect("encoding failed");
    assert_eq!(verify(codeword), NO_ERROR);

    for position in 0..7u8 {
        let corrupted = codeword ^ (1 << position);
        assert_eq!(verify(corrupted), position);
    }
}
