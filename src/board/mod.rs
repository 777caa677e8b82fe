//! Board representation for Reversi

pub mod bitboard;
pub mod board;
pub mod position;
pub mod text;


use serde::{Deserialize, Serialize};

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use position::{Direction, Position, COL_LABELS, ROW_LABELS};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Cell {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::White => Cell::Black,
            Cell::Black => Cell::White,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Digit used by the text grid format (0 = empty, 1 = white, 2 = black)
    #[inline]
    pub fn to_digit(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::White => '1',
            Cell::Black => '2',
        }
    }

    /// Inverse of [`Cell::to_digit`]
    #[inline]
    pub fn from_digit(ch: char) -> Option<Cell> {
        match ch {
            '0' => Some(Cell::Empty),
            '1' => Some(Cell::White),
            '2' => Some(Cell::Black),
            _ => None,
        }
    }

    /// Glyph used when rendering the board
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::White => '○',
            Cell::Black => '●',
        }
    }
}
