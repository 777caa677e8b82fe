//! End of game detection and stone counting
//!
//! The game is over when the board is full, or when neither color has a
//! legal placement left. A color without moves does not end the game on
//! its own; the other color keeps playing.

use std::cmp::Ordering;

use tracing::debug;

use crate::board::{Board, Cell, Position};

use super::placement::captures;

/// Check if at least one empty cell remains
#[inline]
pub fn has_empty(board: &Board) -> bool {
    !board.is_full()
}

/// Empty cells where `color` has a legal placement, one text-grid line
/// after another. Lazy: stops probing as soon as the caller stops asking.
pub fn legal_positions(board: &Board, color: Cell) -> impl Iterator<Item = Position> + '_ {
    board
        .empty_positions()
        .filter(move |&pos| !captures(board, pos, color).is_empty())
}

/// Check if `color` has at least one legal placement.
///
/// Probing never modifies the board.
pub fn placeable(board: &Board, color: Cell) -> bool {
    legal_positions(board, color).next().is_some()
}

/// Check if the game is over.
///
/// True when no empty cell is left, or when neither White nor Black can
/// place a stone anywhere.
pub fn finished(board: &Board) -> bool {
    if !has_empty(board) {
        debug!("game finished: board is full");
        return true;
    }
    if placeable(board, Cell::White) || placeable(board, Cell::Black) {
        return false;
    }
    debug!("game finished: no legal placement for either color");
    true
}

/// Number of cells holding `color`
#[inline]
pub fn count_stones(board: &Board, color: Cell) -> usize {
    board.count(color)
}

/// Color with more stones on a finished board.
///
/// Returns `None` while the game is still running or on a draw.
pub fn winner(board: &Board) -> Option<Cell> {
    if !finished(board) {
        return None;
    }
    match count_stones(board, Cell::White).cmp(&count_stones(board, Cell::Black)) {
        Ordering::Greater => Some(Cell::White),
        Ordering::Less => Some(Cell::Black),
        Ordering::Equal => None,
    }
}
