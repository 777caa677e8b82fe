//! Board structure backed by one bitboard per color

use serde::{Deserialize, Serialize};

use super::bitboard::{Bitboard, BitboardIter};
use super::{Cell, Position, TOTAL_CELLS};

/// Game board.
///
/// A cell is set in at most one of the two bitboards; a cell set in
/// neither is empty. Serialized as the digit grid, so deserializing goes
/// through the same checks as `str::parse`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// White stones bitboard
    white: Bitboard,
    /// Black stones bitboard
    black: Bitboard,
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            white: Bitboard::new(),
            black: Bitboard::new(),
        }
    }

    /// Standard starting layout: d5 and e4 White, e5 and d4 Black
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.set(Position::new(3, 3), Cell::White);
        board.set(Position::new(4, 3), Cell::Black);
        board.set(Position::new(3, 4), Cell::Black);
        board.set(Position::new(4, 4), Cell::White);
        board
    }

    /// Get cell at position, `None` when the position is off the board
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !pos.is_on_board() {
            return None;
        }
        Some(if self.white.get(pos) {
            Cell::White
        } else if self.black.get(pos) {
            Cell::Black
        } else {
            Cell::Empty
        })
    }

    /// Get cell by raw coordinates, `None` when off the board
    #[inline]
    pub fn color_at(&self, row: i8, col: i8) -> Option<Cell> {
        self.get(Position::new(row, col))
    }

    /// Check if an on-board position is empty
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Overwrite a cell without applying any rule.
    /// Off-board positions are ignored.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if !pos.is_on_board() {
            return;
        }
        self.white.clear(pos);
        self.black.clear(pos);
        match cell {
            Cell::White => self.white.set(pos),
            Cell::Black => self.black.set(pos),
            Cell::Empty => {}
        }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, cell: Cell) -> Option<&Bitboard> {
        match cell {
            Cell::White => Some(&self.white),
            Cell::Black => Some(&self.black),
            Cell::Empty => None,
        }
    }

    /// Number of cells holding `cell`
    #[inline]
    pub fn count(&self, cell: Cell) -> usize {
        match self.stones(cell) {
            Some(bb) => bb.count() as usize,
            None => TOTAL_CELLS - self.stone_count(),
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        (self.white.count() + self.black.count()) as usize
    }

    /// Check if every cell holds a stone
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == TOTAL_CELLS
    }

    /// Empty cells, one text-grid line after another
    pub fn empty_positions(&self) -> BitboardIter {
        self.white.union(self.black).complement().iter_ones()
    }

    /// Every cell with its content, one text-grid line after another
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        (0..TOTAL_CELLS).map(move |idx| {
            let pos = Position::from_index(idx);
            (pos, self.get(pos).unwrap_or(Cell::Empty))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
