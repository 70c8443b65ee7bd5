//! Encode and verify operations for the Hamming(7,4) byte codec.
//!
//! `encode` protects a 4-bit value by packing it into an 8-bit codeword with
//! three parity bits; `verify` recomputes the parities of a received byte and
//! names the single bit position that appears to have been flipped, or
//! reports that every check passed.
//!
//! # Decision Table
//!
//! Each parity group answers one yes/no question about a flipped position
//! (see [`crate::layout`]), so the three even/odd answers form a 3-bit index
//! into a fixed table:
//!
//! ```text
//! +---------+-----------+-----------+----------+
//! | R0 even | C0C1 even | C0C2 even | Location |
//! +---------+-----------+-----------+----------+
//! |    0    |     0     |     0     |    0     |
//! |    0    |     0     |     1     |    2     |
//! |    0    |     1     |     0     |    4     |
//! |    0    |     1     |     1     |    6     |
//! |    1    |     0     |     0     |    1     |
//! |    1    |     0     |     1     |    3     |
//! |    1    |     1     |     0     |    5     |
//! |    1    |     1     |     1     | NO_ERROR |
//! +---------+-----------+-----------+----------+
//! ```
//!
//! Keeping the policy as data makes it auditable: the table must agree with
//! the group memberships in `layout`, and a test checks exactly that.
//!
//! # Guarantees and Limits
//!
//! - An unmodified codeword always verifies as `NO_ERROR`.
//! - Any single flip of bits 0..=6 is located exactly.
//! - A flip of bit 7 is invisible (the bit belongs to no group) and reports
//!   `NO_ERROR`. Two or more simultaneous flips can land on any answer;
//!   the scheme only ever names one bit.
//!
//! `verify` locates the suspect bit but never repairs it; what to do with
//! the answer is the caller's decision.

use crate::error::{Error, Result};
use crate::layout::{self, CodewordFields, ParityGroup, DATA_MASK};

/// Sentinel location meaning "all parity checks passed".
pub const NO_ERROR: u8 = u8::MAX;

/// Error locations indexed by (R0 even, C0C1 even, C0C2 even).
const LOCATIONS: [u8; 8] = [0, 2, 4, 6, 1, 3, 5, NO_ERROR];

/// Encode a 4-bit value into a protected codeword byte.
///
/// The data bits are spread to positions {0, 1, 3, 5}; the two column
/// parities are computed over the spread data and placed at bits 2 and 4,
/// then the R0 parity is computed over the partially packed byte and placed
/// at bit 6. R0 goes last because bits 2 and 4 are members of its group;
/// taking them into account is what makes every group balance in the
/// finished codeword.
///
/// Pure function: no side effects, no shared state.
///
/// # Errors
/// Returns `Error::NotRepresentable` if any of bits 4..=7 of the input are
/// set. This is the operation's only failure mode.
pub fn encode(nibble: u8) -> Result<u8> {
    if nibble & !DATA_MASK != 0 {
        return Err(Error::NotRepresentable { value: nibble });
    }

    let spread = layout::spread_data(nibble);

    let c0c1 = ParityGroup::C0C1.parity_of(spread);
    let c0c2 = ParityGroup::C0C2.parity_of(spread);

    let with_columns = spread
        | (c0c1 << ParityGroup::C0C1.parity_position())
        | (c0c2 << ParityGroup::C0C2.parity_position());
    let r0 = ParityGroup::R0.parity_of(with_columns);

    let fields = CodewordFields {
        data: nibble,
        r0: r0 == 1,
        c0c1: c0c1 == 1,
        c0c2: c0c2 == 1,
        unused: false,
    };

    Ok(fields.pack())
}

/// Locate the single flipped bit of a received codeword, if any.
///
/// Recomputes each group's parity over the received byte with the same masks
/// `encode` used, converts them to even/consistent flags, and resolves the
/// location through the decision table above.
///
/// Total function: every input byte, including ones `encode` never produces,
/// yields a location in 0..=7 or [`NO_ERROR`]. The input is not modified or
/// repaired. A flip confined to bit 7 reports `NO_ERROR`; see the module
/// documentation.
pub fn verify(codeword: u8) -> u8 {
    let r0_even = (ParityGroup::R0.parity_of(codeword) == 0) as usize;
    let c0c1_even = (ParityGroup::C0C1.parity_of(codeword) == 0) as usize;
    let c0c2_even = (ParityGroup::C0C2.parity_of(codeword) == 0) as usize;

    LOCATIONS[(r0_even << 2) | (c0c1_even << 1) | c0c2_even]
}
