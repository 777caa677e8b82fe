//! Placement and end-of-game tests driven by digit-grid fixtures.
//!
//! Each fixture is an 8x8 grid of `0` (empty), `1` (white) and `2`
//! (black); the first line is the digit-8 line of the board.

use reversi::{count_stones, finished, place, placeable, Board, Cell, PlaceError, Position};

fn build_board(text: &str) -> Board {
    text.parse().expect("fixture must be a valid digit grid")
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_invalid_position() {
    let mut board = build_board(include_str!("fixtures/pattern00.txt"));
    let result = place(&mut board, "x0", Cell::Black, true);
    assert_eq!(result, Err(PlaceError::InvalidPosition("x0".to_owned())));
    assert_eq!(board, build_board(include_str!("fixtures/pattern00.txt")));
}

#[test]
fn test_already_have_a_stone() {
    let mut board = build_board(include_str!("fixtures/pattern00.txt"));
    let result = place(&mut board, "d5", Cell::Black, true);
    assert_eq!(
        result,
        Err(PlaceError::CellOccupied(Position::from_label("d5").unwrap()))
    );
    assert_eq!(board, build_board(include_str!("fixtures/pattern00.txt")));
}

#[test]
fn test_error_messages() {
    let mut board = Board::standard();
    let invalid = place(&mut board, "x0", Cell::Black, true).unwrap_err();
    assert_eq!(invalid.to_string(), "Invalid position: \"x0\"");
    let occupied = place(&mut board, "d5", Cell::Black, true).unwrap_err();
    assert_eq!(occupied.to_string(), "Cell d5 is already occupied");
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_put_stone() {
    let mut board = build_board(include_str!("fixtures/pattern00.txt"));

    assert_eq!(place(&mut board, "e3", Cell::Black, true), Ok(true));
    assert_eq!(board, build_board(include_str!("fixtures/pattern00_step1.txt")));

    assert_eq!(place(&mut board, "f5", Cell::White, true), Ok(true));
    assert_eq!(board, build_board(include_str!("fixtures/pattern00_step2.txt")));
}

#[test]
fn test_cannot_put_stone() {
    let mut board = build_board(include_str!("fixtures/pattern01.txt"));
    assert_eq!(place(&mut board, "b8", Cell::Black, true), Ok(false));
    assert_eq!(board, build_board(include_str!("fixtures/pattern01.txt")));
}

#[test]
fn test_put_stone_several_directions() {
    // b5 captures to the right (c5, d5) and up-right (c6); the run down
    // the b file reaches the edge and the diagonal down-right hits a gap
    let mut board = build_board(include_str!("fixtures/pattern02.txt"));
    assert_eq!(count_stones(&board, Cell::Black), 2);
    assert_eq!(count_stones(&board, Cell::White), 9);

    assert_eq!(place(&mut board, "b5", Cell::Black, true), Ok(true));
    assert_eq!(board, build_board(include_str!("fixtures/pattern02_after.txt")));
    assert_eq!(count_stones(&board, Cell::Black), 6);
    assert_eq!(count_stones(&board, Cell::White), 6);
}

#[test]
fn test_probe_leaves_fixture_untouched() {
    let original = build_board(include_str!("fixtures/pattern02.txt"));
    let mut board = original.clone();
    assert_eq!(place(&mut board, "b5", Cell::Black, false), Ok(true));
    assert_eq!(board, original);
}

// =============================================================================
// End of game
// =============================================================================

#[test]
fn test_finished() {
    assert!(finished(&build_board(include_str!("fixtures/pattern03a.txt"))));
    assert!(!finished(&build_board(include_str!("fixtures/pattern03b.txt"))));
    assert!(finished(&build_board(include_str!("fixtures/pattern03c.txt"))));
}

#[test]
fn test_placeable_on_fixtures() {
    let running = build_board(include_str!("fixtures/pattern03b.txt"));
    assert!(placeable(&running, Cell::White));
    assert!(placeable(&running, Cell::Black));

    let stuck = build_board(include_str!("fixtures/pattern03c.txt"));
    assert!(!placeable(&stuck, Cell::White));
    assert!(!placeable(&stuck, Cell::Black));
}

#[test]
fn test_fixture_text_roundtrip() {
    let text = include_str!("fixtures/pattern02_after.txt");
    assert_eq!(build_board(text).to_string(), text);
}
