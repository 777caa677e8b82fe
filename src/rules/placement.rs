//! Placement and capture resolution
//!
//! A placement is legal when, in at least one of the eight directions, the
//! new stone is followed by an unbroken run of opponent stones that ends
//! at a stone of the placing color. Every such run is flipped.
//!
//! The scan never writes to the board. Each direction records the cells
//! it would flip, and the caller's board is only updated once the move is
//! known to be legal and the caller asked for a commit.

use tracing::{debug, trace};

use crate::board::{Board, Cell, Direction, Position};
use crate::error::PlaceError;

/// Place `color` at `label`.
///
/// Returns `Ok(true)` when at least one stone was captured. With
/// `commit = false` the board is never modified, which is how legality
/// is probed. An illegal but well-formed move returns `Ok(false)` and
/// leaves the board untouched.
///
/// # Errors
/// * `PlaceError::InvalidPosition` - the label does not name a cell
/// * `PlaceError::CellOccupied` - the cell already holds a stone
pub fn place(board: &mut Board, label: &str, color: Cell, commit: bool) -> Result<bool, PlaceError> {
    let pos = label.parse::<Position>().inspect_err(|_| {
        debug!(label = %label, "rejected placement: invalid position");
    })?;
    place_at(board, pos, color, commit)
}

/// Same as [`place`] for an already resolved position.
///
/// # Errors
/// * `PlaceError::InvalidPosition` - the position is off the board
/// * `PlaceError::CellOccupied` - the cell already holds a stone
pub fn place_at(board: &mut Board, pos: Position, color: Cell, commit: bool) -> Result<bool, PlaceError> {
    match board.get(pos) {
        None => {
            debug!(%pos, "rejected placement: invalid position");
            return Err(PlaceError::InvalidPosition(pos.to_string()));
        }
        Some(Cell::Empty) => {}
        Some(_) => {
            debug!(%pos, "rejected placement: cell occupied");
            return Err(PlaceError::CellOccupied(pos));
        }
    }

    let flips = captures(board, pos, color);
    let succeeded = !flips.is_empty();

    if succeeded && commit {
        board.set(pos, color);
        for &flip in &flips {
            board.set(flip, color);
        }
    }

    debug!(
        %pos,
        ?color,
        captured = flips.len(),
        committed = succeeded && commit,
        "placement resolved"
    );
    Ok(succeeded)
}

/// Cells that placing `color` at `pos` would flip.
///
/// Empty when the placement is illegal. The board is not modified and the
/// target cell is assumed to be empty.
pub fn captures(board: &Board, pos: Position, color: Cell) -> Vec<Position> {
    let mut flips = Vec::new();
    if color == Cell::Empty {
        return flips;
    }

    for direction in Direction::ALL {
        let next = pos.step(direction);

        // A capture run must start with an opponent stone
        match board.get(next) {
            None | Some(Cell::Empty) => continue,
            Some(cell) if cell == color => continue,
            Some(_) => {}
        }

        let before = flips.len();
        if resolve(board, next, color, direction, &mut flips) {
            trace!(%pos, ?direction, run = flips.len() - before, "capture run");
        }
    }

    flips
}

/// Walk from `at` along `direction` and decide whether the run starting
/// there ends at a stone of `attacker`.
///
/// On success every cell of the run is pushed to `flips`, starting with
/// the cell next to the terminating stone and ending with `at`. On
/// failure `flips` is left as it was.
pub fn resolve(
    board: &Board,
    at: Position,
    attacker: Cell,
    direction: Direction,
    flips: &mut Vec<Position>,
) -> bool {
    match board.get(at) {
        None | Some(Cell::Empty) => return false,
        Some(_) => {}
    }

    let next = at.step(direction);
    if board.get(next) == Some(attacker) || resolve(board, next, attacker, direction, flips) {
        flips.push(at);
        true
    } else {
        false
    }
}
