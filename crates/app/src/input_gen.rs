//! Sample nibble generation for trial runs.
//!
//! When the driver runs, it needs a stream of 4-bit values to protect.
//! Generated samples mix uniform draws, runs of a repeated value and ordered
//! sweeps, so a run exercises the whole input space rather than one lucky
//! value, and repeated values make channel effects easy to spot in output.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate sample nibbles with mixed structure.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `count`: exact number of nibbles to generate
///
/// # Returns
/// Vector of `count` values, each in 0..=15.
pub fn generate_nibbles(seed: u64, count: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(count);

    while data.len() < count {
        let kind: u8 = rng.gen_range(0..10);

        match kind {
            // 40% uniform random nibbles
            0..=3 => {
                let n: usize = rng.gen_range(8..=64);
                for _ in 0..n {
                    data.push(rng.gen_range(0..16u8));
                }
            }

            // 30% runs of one repeated value
            4..=6 => {
                let value: u8 = rng.gen_range(0..16);
                let n: usize = rng.gen_range(8..=64);
                data.extend(std::iter::repeat(value).take(n));
            }

            // 20% ordered sweeps over every value
            7..=8 => {
                data.extend(0..16u8);
            }

            // 10% extremes only (all-zero and all-one nibbles)
            _ => {
                let n: usize = rng.gen_range(8..=32);
                for _ in 0..n {
                    data.push(if rng.gen() { 0b1111 } else { 0b0000 });
                }
            }
        }
    }

    // Truncate to exact size
    data.truncate(count);
    data
}
