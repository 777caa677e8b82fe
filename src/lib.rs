//! Reversi (Othello) rules engine
//!
//! Rules implemented on a standard 8x8 board:
//! - A stone must be placed on an empty cell
//! - A placement is legal only if it brackets at least one run of
//!   opponent stones between the new stone and another stone of the
//!   same color, in any of the eight directions
//! - Every bracketed run is flipped to the placing color
//! - The game ends when the board is full or neither color can move
//!
//! # Architecture
//!
//! - [`board`]: Board representation, cell labels and directions
//! - [`rules`]: Placement, capture resolution and end-of-game checks
//! - [`error`]: Error types returned by the engine
//!
//! # Quick Start
//!
//! ```
//! use reversi::{place, count_stones, finished, Board, Cell};
//!
//! let mut board = Board::standard();
//!
//! // Black opens at e3, flipping the white stone at e4
//! assert_eq!(place(&mut board, "e3", Cell::Black, true), Ok(true));
//! assert_eq!(count_stones(&board, Cell::Black), 4);
//! assert_eq!(count_stones(&board, Cell::White), 1);
//! assert!(!finished(&board));
//! ```
//!
//! # Cell labels
//!
//! Cells are addressed chess-style with a letter and a digit, e.g. `"d5"`.
//! The letter (`a`..`h`) selects the row index 0..7 and the digit selects
//! the column index with `8` mapping to 0 and `1` mapping to 7, so the
//! digit `8` is the top line of the printed board.

pub mod board;
pub mod error;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Direction, Position, BOARD_SIZE};
pub use error::{BoardParseError, PlaceError};
pub use rules::{count_stones, finished, has_empty, placeable, place, place_at, winner};
