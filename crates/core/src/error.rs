//! Error types for the hamming-sim system.
//!
//! All operations return structured errors rather than panicking.
//! The codec itself has exactly one failure mode: `encode` rejects inputs
//! that do not fit in four bits. `verify` is total and never fails.

use thiserror::Error;

/// Top-level error type for all operations in the system.
#[derive(Debug, Error)]
pub enum Error {
    /// Input to `encode` has bits set outside the low nibble.
    ///
    /// Recoverable: the caller supplies a corrected value and retries.
    #[error("value {value:#04x} is not representable in 4 bits")]
    NotRepresentable { value: u8 },

    /// Configuration error (bad command-line flag or value)
    #[error("configuration error: {0}")]
    Config(String),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
