//! Bitboard implementation for the 64-cell board

use super::{Position, TOTAL_CELLS};

/// Bitboard representation of one stone color.
/// One bit per cell, indexed by [`Position::to_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Position) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Position) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Position) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Cells set in either bitboard
    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard { bits: self.bits | other.bits }
    }

    /// Cells not set in this bitboard
    #[inline]
    pub fn complement(self) -> Bitboard {
        Bitboard { bits: !self.bits }
    }

    /// Iterate over set bit positions, in index order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { current: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    current: u64,
}

impl Iterator for BitboardIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == 0 {
            return None;
        }

        // Get position of lowest set bit, then clear it
        let idx = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;

        debug_assert!(idx < TOTAL_CELLS);
        Some(Position::from_index(idx))
    }
}
