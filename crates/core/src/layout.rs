//! Codeword bit layout and the typed field record.
//!
//! A codeword is a single byte carrying four data bits, three parity bits and
//! one permanently unused bit, at fixed positions (bit 0 = least significant):
//!
//! ```text
//! +-----+---------------------------+
//! | Bit | Role                      |
//! +-----+---------------------------+
//! |  0  | data bit d0               |
//! |  1  | data bit d1               |
//! |  2  | parity bit (group C0C1)   |
//! |  3  | data bit d2               |
//! |  4  | parity bit (group C0C2)   |
//! |  5  | data bit d3               |
//! |  6  | parity bit (group R0)     |
//! |  7  | unused, always 0          |
//! +-----+---------------------------+
//! ```
//!
//! # Parity Groups
//!
//! The layout comes from arranging the eight bit positions in a 4x2 grid and
//! asking three yes/no questions about a flipped cell (is it in the left
//! column? in the top half? in an outer row pair?). Each question corresponds
//! to a fixed group of positions, and each group gets one parity bit:
//!
//! - R0   = {0, 2, 4, 6}, parity bit at 6
//! - C0C1 = {0, 1, 2, 3}, parity bit at 2
//! - C0C2 = {0, 1, 4, 5}, parity bit at 4
//!
//! A group is consistent when its member bits XOR to zero. The three group
//! answers combined identify one of the seven positions 0..=6, or "no error".
//! Position 7 belongs to no group, so a flip confined to it is invisible to
//! every check. This is an accepted limitation of the 7-bit scheme, not a
//! defect: the eighth bit is simply never used.
//!
//! # Slot Sharing
//!
//! Unlike the textbook power-of-two arrangement, the parity slots 2 and 4 are
//! themselves members of group R0. Packing therefore places the two column
//! parities first and derives R0's parity from the partially packed byte, so
//! that all three groups XOR to zero in the finished codeword. `ParityGroup`
//! exposes the masks; the ordering rule lives in the codec.

/// Mask selecting the four data bits of an input value.
pub const DATA_MASK: u8 = 0x0F;

/// Codeword positions holding data bits d0..d3, in order.
pub const DATA_POSITIONS: [u8; 4] = [0, 1, 3, 5];

/// The permanently unused codeword position.
pub const UNUSED_POSITION: u8 = 7;

/// One of the three fixed parity groups of the codeword layout.
///
/// Groups are constants of the scheme, not per-instance data: each is a
/// subset of the eight bit positions together with the position of the
/// parity bit that balances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParityGroup {
    /// Even grid cells: positions {0, 2, 4, 6}
    R0,
    /// Top half of the grid: positions {0, 1, 2, 3}
    C0C1,
    /// Outer row pair: positions {0, 1, 4, 5}
    C0C2,
}

impl ParityGroup {
    /// All groups, in the order their answers are combined during verify.
    pub const ALL: [ParityGroup; 3] = [ParityGroup::R0, ParityGroup::C0C1, ParityGroup::C0C2];

    /// Bit mask selecting this group's member positions.
    pub fn mask(self) -> u8 {
        match self {
            ParityGroup::R0 => 0b0101_0101,
            ParityGroup::C0C1 => 0b0000_1111,
            ParityGroup::C0C2 => 0b0011_0011,
        }
    }

    /// Position of the parity bit that balances this group.
    ///
    /// Each parity position is a member of its own group, so a correctly
    /// packed codeword has even parity in every group.
    pub fn parity_position(self) -> u8 {
        match self {
            ParityGroup::R0 => 6,
            ParityGroup::C0C1 => 2,
            ParityGroup::C0C2 => 4,
        }
    }

    /// Compute this group's parity over a byte: 1 if an odd number of the
    /// group's member bits are set, else 0.
    pub fn parity_of(self, byte: u8) -> u8 {
        ((byte & self.mask()).count_ones() & 1) as u8
    }

    /// Human-readable group name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ParityGroup::R0 => "r0",
            ParityGroup::C0C1 => "c0c1",
            ParityGroup::C0C2 => "c0c2",
        }
    }
}

/// Move the four data bits of a nibble to their codeword positions.
///
/// Bits 0 and 1 stay in place; input bit 2 moves to position 3 and input
/// bit 3 moves to position 5, leaving the parity slots cleared.
pub fn spread_data(nibble: u8) -> u8 {
    (nibble & 0b0011) | ((nibble & 0b0100) << 1) | ((nibble & 0b1000) << 2)
}

/// Collect the four data bits of a codeword back into a nibble.
///
/// Inverse of [`spread_data`]; parity and unused bits are ignored.
pub fn extract_data(byte: u8) -> u8 {
    (byte & 0b0011) | ((byte >> 1) & 0b0100) | ((byte >> 2) & 0b1000)
}

/// The codeword as an explicit typed record.
///
/// Packing four independent data bits, three parity flags and one spare flag
/// into a scalar is a boundary concern; everything between the boundaries
/// works with this record instead. `pack`/`unpack` are exact inverses for
/// any field combination, including ones `encode` would never produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodewordFields {
    /// The protected 4-bit value (high bits ignored by `pack`)
    pub data: u8,

    /// Parity flag for group R0 (codeword bit 6)
    pub r0: bool,

    /// Parity flag for group C0C1 (codeword bit 2)
    pub c0c1: bool,

    /// Parity flag for group C0C2 (codeword bit 4)
    pub c0c2: bool,

    /// The unused bit 7; zero in every codeword `encode` produces
    pub unused: bool,
}

impl CodewordFields {
    /// Pack the fields into a codeword byte at their fixed positions.
    pub fn pack(&self) -> u8 {
        let mut byte = spread_data(self.data & DATA_MASK);
        if self.c0c1 {
            byte |= 1 << ParityGroup::C0C1.parity_position();
        }
        if self.c0c2 {
            byte |= 1 << ParityGroup::C0C2.parity_position();
        }
        if self.r0 {
            byte |= 1 << ParityGroup::R0.parity_position();
        }
        if self.unused {
            byte |= 1 << UNUSED_POSITION;
        }
        byte
    }

    /// Split a codeword byte into its fields.
    pub fn unpack(byte: u8) -> Self {
        Self {
            data: extract_data(byte),
            r0: byte & (1 << ParityGroup::R0.parity_position()) != 0,
            c0c1: byte & (1 << ParityGroup::C0C1.parity_position()) != 0,
            c0c2: byte & (1 << ParityGroup::C0C2.parity_position()) != 0,
            unused: byte & (1 << UNUSED_POSITION) != 0,
        }
    }
}
