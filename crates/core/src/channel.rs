//! Noisy channel simulator flipping at most one bit per transmitted byte.
//!
//! This module simulates the transmission noise the codec is built to
//! detect, in a deterministic way using seeded randomness. All corruption is
//! reproducible given the same seed.
//!
//! # Simulated Effect
//!
//! Each transmitted byte is corrupted with probability `flip_rate`
//! (Bernoulli). A corrupted byte has exactly one bit flipped, at a uniformly
//! chosen position 0..=7. Bit 7 is included on purpose: the codec cannot see
//! a flip there, and the simulator is how that limit stays observable.
//!
//! # Ground Truth
//!
//! Every transmission reports which bit (if any) was flipped, so callers can
//! compare the codec's verdict against what actually happened instead of
//! trusting the codec to grade itself.
//!
//! # Determinism
//!
//! All randomness comes from a seeded ChaCha8 RNG. Given the same seed and
//! inputs, outputs are bit-identical.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration for channel simulation.
#[derive(Debug, Clone, Copy)]
pub struct ChannelConfig {
    /// Probability [0.0, 1.0] that a transmitted byte gets one flipped bit
    pub flip_rate: f64,

    /// Random seed for determinism
    pub seed: u64,
}

impl ChannelConfig {
    /// Create a configuration with no corruption (perfect channel).
    pub fn clean(seed: u64) -> Self {
        Self {
            flip_rate: 0.0,
            seed,
        }
    }

    /// Create a default configuration with moderate corruption.
    pub fn default_with_seed(seed: u64) -> Self {
        Self {
            flip_rate: 0.25,
            seed,
        }
    }
}

/// Outcome of sending one byte through the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transmission {
    /// The byte as it arrived (possibly corrupted)
    pub received: u8,

    /// Which bit position was flipped, or `None` for a clean transmission
    pub flipped_bit: Option<u8>,
}

/// Channel simulator implementing single-bit corruption.
///
/// # Thread Safety
/// Not thread-safe; use one instance per thread or synchronize externally.
pub struct NoisyChannel {
    config: ChannelConfig,
    rng: ChaCha8Rng,

    // Statistics
    bytes_sent: u64,
    bytes_corrupted: u64,
}

impl NoisyChannel {
    /// Create a new channel with the given configuration.
    pub fn new(config: ChannelConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Self {
            config,
            rng,
            bytes_sent: 0,
            bytes_corrupted: 0,
        }
    }

    /// Send a byte through the simulated channel.
    ///
    /// # Returns
    /// The received byte together with the ground-truth flip position.
    /// The received byte differs from the input in at most one bit.
    pub fn transmit(&mut self, codeword: u8) -> Transmission {
        self.bytes_sent += 1;

        if self.config.flip_rate > 0.0 {
            let roll: f64 = self.rng.gen();
            if roll < self.config.flip_rate {
                let position: u8 = self.rng.gen_range(0..8);
                self.bytes_corrupted += 1;

                return Transmission {
                    received: codeword ^ (1 << position),
                    flipped_bit: Some(position),
                };
            }
        }

        Transmission {
            received: codeword,
            flipped_bit: None,
        }
    }

    /// Get statistics about channel behavior.
    pub fn stats(&self) -> ChannelStats {
        ChannelStats {
            bytes_sent: self.bytes_sent,
            bytes_corrupted: self.bytes_corrupted,
        }
    }
}

/// Statistics about channel simulator behavior.
#[derive(Debug, Clone, Copy)]
pub struct ChannelStats {
    /// Total bytes sent through the channel
    pub bytes_sent: u64,

    /// Bytes that had a bit flipped
    pub bytes_corrupted: u64,
}

impl ChannelStats {
    /// Compute the observed corruption rate.
    pub fn corruption_rate(&self) -> f64 {
        if self.bytes_sent == 0 {
            0.0
        } else {
            self.bytes_corrupted as f64 / self.bytes_sent as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_channel() {
        let mut channel = NoisyChannel::new(ChannelConfig::clean(42));

        for byte in 0..=255u8 {
            let tx = channel.transmit(byte);
            assert_eq!(tx.received, byte);
            assert_eq!(tx.flipped_bit, None);
        }

        let stats = channel.stats();
        assert_eq!(stats.bytes_sent, 256);
        assert_eq!(stats.bytes_corrupted, 0);
    }

    #[test]
    fn test_always_flips_exactly_one_bit() {
        let config = ChannelConfig {
            flip_rate: 1.0,
            seed: 7,
        };
        let mut channel = NoisyChannel::new(config);

        for byte in 0..=255u8 {
            let tx = channel.transmit(byte);
            let diff = tx.received ^ byte;
            assert_eq!(diff.count_ones(), 1);
            assert_eq!(diff, 1 << tx.flipped_bit.unwrap());
        }

        assert_eq!(channel.stats().bytes_corrupted, 256);
    }

    #[test]
    fn test_flip_positions_cover_all_bits() {
        let config = ChannelConfig {
            flip_rate: 1.0,
            seed: 3,
        };
        let mut channel = NoisyChannel::new(config);

        let mut seen = [false; 8];
        for _ in 0..200 {
            let tx = channel.transmit(0);
            seen[tx.flipped_bit.unwrap() as usize] = true;
        }

        // 200 uniform draws make every position overwhelmingly likely
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_corruption_rate() {
        let config = ChannelConfig {
            flip_rate: 0.25,
            seed: 42,
        };
        let mut channel = NoisyChannel::new(config);

        for _ in 0..1000 {
            channel.transmit(0x55);
        }

        let rate = channel.stats().corruption_rate();
        // Should be approximately 0.25
        assert!(rate > 0.15 && rate < 0.35);
    }

    #[test]
    fn test_determinism() {
        let config = ChannelConfig::default_with_seed(12345);

        let mut channel1 = NoisyChannel::new(config);
        let mut channel2 = NoisyChannel::new(config);

        for byte in 0..100u8 {
            assert_eq!(channel1.transmit(byte), channel2.transmit(byte));
        }

        assert_eq!(
            channel1.stats().bytes_corrupted,
            channel2.stats().bytes_corrupted
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut channel1 = NoisyChannel::new(ChannelConfig::default_with_seed(1));
        let mut channel2 = NoisyChannel::new(ChannelConfig::default_with_seed(2));

        let outcomes1: Vec<Transmission> = (0..100).map(|_| channel1.transmit(0xAA)).collect();
        let outcomes2: Vec<Transmission> = (0..100).map(|_| channel2.transmit(0xAA)).collect();

        assert_ne!(outcomes1, outcomes2);
    }
}
