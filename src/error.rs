//! Error types for placement and board loading

use thiserror::Error;

use crate::board::Position;

/// Errors raised by a placement before the board is touched
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceError {
    /// The label does not name a cell on the board
    #[error("Invalid position: {0:?}")]
    InvalidPosition(String),

    /// The target cell already holds a stone
    #[error("Cell {0} is already occupied")]
    CellOccupied(Position),
}

/// Errors raised while reading a digit grid
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("Expected 8 lines, found {0}")]
    LineCount(usize),

    #[error("Line {line} has {width} cells, expected 8")]
    LineWidth { line: usize, width: usize },

    #[error("Invalid cell {found:?} at line {line}, column {column}")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },
}
