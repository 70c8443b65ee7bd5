//! Configuration for the hamming-sim application.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including randomized defaults that are reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! All defaults are printed so runs are reproducible.

use hamming_sim_core::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Complete configuration for a trial run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed for all randomness (channel noise, sample generation, defaults)
    pub seed: u64,

    /// Number of trials to run
    pub trials: usize,

    /// Probability that the channel flips one bit of a transmitted byte
    pub flip_rate: f64,

    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print detailed metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no arguments provided, generates randomized defaults using a
    /// time-based seed. If --seed is provided, uses that seed for all
    /// randomness (fully deterministic).
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut seed: Option<u64> = None;
        let mut trials: Option<usize> = None;
        let mut flip_rate: Option<f64> = None;
        let mut print_config = false;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err(Error::Config("--seed requires a number".to_string()));
                    }
                    seed = Some(
                        args[i]
                            .parse()
                            .map_err(|_| Error::Config("invalid seed".to_string()))?,
                    );
                }
                "--trials" => {
                    i += 1;
                    if i >= args.len() {
                        return Err(Error::Config("--trials requires a number".to_string()));
                    }
                    trials = Some(
                        args[i]
                            .parse()
                            .map_err(|_| Error::Config("invalid trials".to_string()))?,
                    );
                }
                "--flip-rate" => {
                    i += 1;
                    if i >= args.len() {
                        return Err(Error::Config("--flip-rate requires a number".to_string()));
                    }
                    flip_rate = Some(
                        args[i]
                            .parse()
                            .map_err(|_| Error::Config("invalid flip-rate".to_string()))?,
                    );
                }
                "--no-flips" => {
                    flip_rate = Some(0.0);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(Error::Config(format!("unknown argument: {}", args[i])));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        // Generate defaults using seed
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let flip_rate = flip_rate.unwrap_or_else(|| {
            // Moderate corruption so both clean and corrupted outcomes show up
            0.1 + rng.gen::<f64>() * 0.4
        });

        if !(0.0..=1.0).contains(&flip_rate) {
            return Err(Error::Config(format!(
                "flip rate {} outside 0.0..=1.0",
                flip_rate
            )));
        }

        Ok(Config {
            seed,
            trials: trials.unwrap_or(8192),
            flip_rate,
            print_config,
            print_metrics,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Seed: {}", self.seed);
        println!("Trials: {}", self.trials);
        println!("Flip rate: {:.2}%", self.flip_rate * 100.0);
        println!();
    }
}

fn print_help() {
    println!("hamming-sim: Single-byte error detection over a noisy channel");
    println!();
    println!("USAGE:");
    println!("    hamming-sim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --seed <N>         Random seed for determinism");
    println!("    --trials <N>       Number of trials (default: 8192)");
    println!("    --flip-rate <R>    Bit-flip probability 0.0-1.0 (default: random 0.1-0.5)");
    println!("    --no-flips         Disable corruption (same as --flip-rate 0)");
    println!();
    println!("    --print-config     Print resolved configuration");
    println!("    --no-metrics       Don't print metrics summary");
    println!("    --help, -h         Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    hamming-sim                          # Run with random defaults");
    println!("    hamming-sim --seed 42                # Deterministic run");
    println!("    hamming-sim --flip-rate 1.0          # Corrupt every byte");
    println!("    hamming-sim --no-flips --trials 100  # Clean channel, 100 trials");
    println!();
}
