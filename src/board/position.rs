//! Cell coordinates, chess-style labels and the eight directions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::BOARD_SIZE;
use crate::error::PlaceError;

/// Label letters, indexed by row
pub const ROW_LABELS: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Label digits, indexed by col. The digit 8 is col 0.
pub const COL_LABELS: [char; BOARD_SIZE] = ['8', '7', '6', '5', '4', '3', '2', '1'];

/// Compass directions around a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    /// All eight directions, in scan order
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Left,
        Direction::Right,
        Direction::BottomLeft,
        Direction::Bottom,
        Direction::BottomRight,
    ];

    /// Unit offset as (delta row, delta col).
    /// Rows run along the letters, cols along the digits, so "top" is col - 1.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::TopLeft => (-1, -1),
            Direction::Top => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::BottomLeft => (-1, 1),
            Direction::Bottom => (0, 1),
            Direction::BottomRight => (1, 1),
        }
    }
}

/// Coordinate on (or next to) the board.
///
/// Values produced by [`Position::step`] are not clamped and may lie off
/// the board; check [`Position::is_on_board`] before reading a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Resolve a two-character label such as `"e3"`.
    ///
    /// Returns `None` unless both characters are found in their alphabet
    /// and nothing follows them. Longer input such as `"a11"` is rejected
    /// rather than truncated to its first two characters.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let row_ch = chars.next()?;
        let col_ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let row = ROW_LABELS.iter().position(|&c| c == row_ch)?;
        let col = COL_LABELS.iter().position(|&c| c == col_ch)?;
        Some(Self::new(row as i8, col as i8))
    }

    /// Label for an on-board position
    pub fn to_label(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let mut label = String::with_capacity(2);
        label.push(ROW_LABELS[self.row as usize]);
        label.push(COL_LABELS[self.col as usize]);
        Some(label)
    }

    /// Neighbouring coordinate in `direction`.
    /// Saturates at the `i8` limits, which are off the board either way.
    #[inline]
    pub fn step(self, direction: Direction) -> Position {
        let (dr, dc) = direction.delta();
        Position::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    #[inline]
    pub fn is_valid(row: i8, col: i8) -> bool {
        let size = BOARD_SIZE as i8;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        Self::is_valid(self.row, self.col)
    }

    /// Bit index, one text-grid line (col) after another
    #[inline]
    pub fn to_index(self) -> usize {
        debug_assert!(self.is_on_board());
        self.col as usize * BOARD_SIZE + self.row as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx % BOARD_SIZE) as i8,
            col: (idx / BOARD_SIZE) as i8,
        }
    }
}

impl FromStr for Position {
    type Err = PlaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_label(s).ok_or_else(|| PlaceError::InvalidPosition(s.to_owned()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_label() {
            Some(label) => f.write_str(&label),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
