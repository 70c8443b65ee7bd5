//! hamming-sim-core: Educational single-byte error detection with Hamming(7,4) parity
//!
//! This library provides the core components for a learning-focused system that:
//! - Encodes a 4-bit value into an 8-bit codeword carrying three parity bits
//! - Locates which single bit (if any) of a received codeword was flipped
//! - Simulates a noisy channel that flips at most one bit per transmitted byte
//! - Tracks observable outcomes across many trials
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `layout`: Codeword bit layout and the typed field record
//! - `codec`: Encode and verify operations
//! - `channel`: Noisy channel simulator with seeded randomness
//! - `metrics`: Observable system behavior
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Pure operations**: Encode and verify are stateless functions on scalar
//!   values, safe to call from any number of threads
//! - **Deterministic**: Seeded randomness makes runs reproducible
//! - **Observable**: Ground-truth channel reporting lets every verdict be
//!   checked against what actually happened on the wire

pub mod channel;
pub mod codec;
pub mod error;
pub mod layout;
pub mod metrics;

// Re-export commonly used items
pub use codec::{encode, verify, NO_ERROR};
pub use error::{Error, Result};
