//! Metrics collection and reporting for codec trials.
//!
//! This module provides observable insights into system behavior:
//! - How many trials ran and how many bytes the channel corrupted
//! - How often the codec located the flipped bit exactly
//! - How often a flip escaped through the unused-bit blind spot
//! - Timing information
//!
//! # Design
//!
//! Metrics are collected in a simple struct with explicit updates from the
//! driver loop. Every trial is graded against the channel's ground truth, so
//! the "located exactly" count is a real measurement, not the codec grading
//! itself.
//!
//! # Thread Safety
//!
//! The `Metrics` struct is NOT thread-safe. For multi-threaded use, wrap in
//! `Arc<Mutex<Metrics>>` or use per-thread metrics that are merged at the end.

use crate::codec::NO_ERROR;
use crate::layout::UNUSED_POSITION;
use std::time::{Duration, Instant};

/// Comprehensive metrics for a run of codec trials.
#[derive(Debug, Clone)]
pub struct Metrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Trials ===
    /// Total trials graded
    pub trials: u64,

    /// Inputs the encoder rejected as not representable
    pub encode_failures: u64,

    // === Channel outcomes ===
    /// Bytes that crossed the channel untouched
    pub clean_transmissions: u64,

    /// Bytes the channel corrupted with a single flip
    pub corrupted_transmissions: u64,

    // === Verdicts ===
    /// Corrupted bytes whose flipped bit was located exactly
    pub located_exactly: u64,

    /// Corrupted bytes reported clean because the flip hit the unused bit
    pub blind_spot_misses: u64,

    /// Clean bytes wrongly reported as corrupted
    pub false_alarms: u64,

    /// Corrupted bytes whose reported location was wrong (or missed outside
    /// the blind spot)
    pub mislocated: u64,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            trials: 0,
            encode_failures: 0,
            clean_transmissions: 0,
            corrupted_transmissions: 0,
            located_exactly: 0,
            blind_spot_misses: 0,
            false_alarms: 0,
            mislocated: 0,
        }
    }

    /// Grade one trial: the channel's ground truth against the codec verdict.
    ///
    /// # Arguments
    /// - `flipped_bit`: which bit the channel actually flipped, if any
    /// - `reported`: the location the codec reported (or `NO_ERROR`)
    pub fn record_trial(&mut self, flipped_bit: Option<u8>, reported: u8) {
        self.trials += 1;

        match flipped_bit {
            None => {
                self.clean_transmissions += 1;
                if reported != NO_ERROR {
                    self.false_alarms += 1;
                }
            }
            Some(bit) => {
                self.corrupted_transmissions += 1;
                if reported == bit {
                    self.located_exactly += 1;
                } else if bit == UNUSED_POSITION && reported == NO_ERROR {
                    self.blind_spot_misses += 1;
                } else {
                    self.mislocated += 1;
                }
            }
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Fraction of corrupted bytes whose flip was located exactly.
    ///
    /// Returns 0.0 if nothing was corrupted.
    pub fn detection_rate(&self) -> f64 {
        if self.corrupted_transmissions == 0 {
            0.0
        } else {
            self.located_exactly as f64 / self.corrupted_transmissions as f64
        }
    }

    /// Fraction of corrupted bytes that escaped through the blind spot.
    pub fn blind_spot_rate(&self) -> f64 {
        if self.corrupted_transmissions == 0 {
            0.0
        } else {
            self.blind_spot_misses as f64 / self.corrupted_transmissions as f64
        }
    }

    /// Whether the run matched the codec's guarantees: every non-blind-spot
    /// flip located, no clean byte accused, nothing rejected by encode.
    pub fn is_success(&self) -> bool {
        self.false_alarms == 0 && self.mislocated == 0 && self.encode_failures == 0
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        let duration_ms = self.duration().as_millis();

        println!("\n=== Trial Summary ===");
        println!("Duration: {} ms", duration_ms);
        println!("Trials: {}", self.trials);
        println!("Encode failures: {}", self.encode_failures);
        println!();

        println!("=== Channel ===");
        println!("Clean transmissions: {}", self.clean_transmissions);
        println!("Corrupted transmissions: {}", self.corrupted_transmissions);
        println!();

        println!("=== Verdicts ===");
        println!(
            "Located exactly: {} ({:.2}%)",
            self.located_exactly,
            self.detection_rate() * 100.0
        );
        println!(
            "Blind-spot misses (bit {}): {} ({:.2}%)",
            UNUSED_POSITION,
            self.blind_spot_misses,
            self.blind_spot_rate() * 100.0
        );
        println!("False alarms: {}", self.false_alarms);
        println!("Mislocated: {}", self.mislocated);
        println!();
    }

    /// Print just the final result (pass/fail).
    pub fn print_result(&self) {
        if self.is_success() {
            println!(
                "✓ {} trials completed, {} flips located, {} blind-spot misses",
                self.trials, self.located_exactly, self.blind_spot_misses
            );
        } else if self.false_alarms > 0 {
            println!("✗ Run failed: {} clean bytes reported corrupted", self.false_alarms);
        } else if self.mislocated > 0 {
            println!("✗ Run failed: {} flips mislocated", self.mislocated);
        } else {
            println!("✗ Run failed: {} inputs rejected by encode", self.encode_failures);
        }
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             trials={}\n\
             encode_failures={}\n\
             clean_transmissions={}\n\
             corrupted_transmissions={}\n\
             located_exactly={}\n\
             detection_rate={:.4}\n\
             blind_spot_misses={}\n\
             false_alarms={}\n\
             mislocated={}\n",
            self.duration().as_millis(),
            self.trials,
            self.encode_failures,
            self.clean_transmissions,
            self.corrupted_transmissions,
            self.located_exactly,
            self.detection_rate(),
            self.blind_spot_misses,
            self.false_alarms,
            self.mislocated,
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert!(metrics.end_time.is_none());
        assert_eq!(metrics.trials, 0);
        assert!(metrics.is_success());
    }

    #[test]
    fn test_record_clean_trial() {
        let mut metrics = Metrics::new();
        metrics.record_trial(None, NO_ERROR);

        assert_eq!(metrics.trials, 1);
        assert_eq!(metrics.clean_transmissions, 1);
        assert_eq!(metrics.false_alarms, 0);
    }

    #[test]
    fn test_record_false_alarm() {
        let mut metrics = Metrics::new();
        metrics.record_trial(None, 3);

        assert_eq!(metrics.false_alarms, 1);
        assert!(!metrics.is_success());
    }

    #[test]
    fn test_record_located_flip() {
        let mut metrics = Metrics::new();
        metrics.record_trial(Some(5), 5);

        assert_eq!(metrics.corrupted_transmissions, 1);
        assert_eq!(metrics.located_exactly, 1);
        assert_eq!(metrics.detection_rate(), 1.0);
    }

    #[test]
    fn test_record_blind_spot_miss() {
        let mut metrics = Metrics::new();
        metrics.record_trial(Some(UNUSED_POSITION), NO_ERROR);

        assert_eq!(metrics.blind_spot_misses, 1);
        assert_eq!(metrics.mislocated, 0);
        // Blind-spot misses are expected behavior, not failures
        assert!(metrics.is_success());
    }

    #[test]
    fn test_record_mislocated_flip() {
        let mut metrics = Metrics::new();
        metrics.record_trial(Some(2), 4);
        metrics.record_trial(Some(2), NO_ERROR);

        assert_eq!(metrics.mislocated, 2);
        assert!(!metrics.is_success());
    }

    #[test]
    fn test_detection_rate() {
        let mut metrics = Metrics::new();
        assert_eq!(metrics.detection_rate(), 0.0);

        metrics.record_trial(Some(0), 0);
        metrics.record_trial(Some(1), 1);
        metrics.record_trial(Some(UNUSED_POSITION), NO_ERROR);
        metrics.record_trial(Some(3), 3);

        assert_eq!(metrics.detection_rate(), 0.75);
        assert_eq!(metrics.blind_spot_rate(), 0.25);
    }

    #[test]
    fn test_export_text() {
        let mut metrics = Metrics::new();
        metrics.record_trial(Some(6), 6);
        metrics.record_trial(None, NO_ERROR);

        let text = metrics.export_text();
        assert!(text.contains("trials=2"));
        assert!(text.contains("located_exactly=1"));
        assert!(text.contains("clean_transmissions=1"));
        assert!(text.contains("false_alarms=0"));
    }
}
