//! Digit-grid text format and board rendering
//!
//! The grid has one line per col (top line is digit 8) and one digit per
//! row within the line (first character is letter a):
//!
//! ```text
//! 00000000
//! 00000000
//! 00000000
//! 00012000
//! 00021000
//! 00000000
//! 00000000
//! 00000000
//! ```

use std::fmt;
use std::str::FromStr;

use super::{Board, Cell, Position, BOARD_SIZE, COL_LABELS, ROW_LABELS};
use crate::error::BoardParseError;

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        if lines.len() != BOARD_SIZE {
            return Err(BoardParseError::LineCount(lines.len()));
        }

        let mut board = Board::new();
        for (col, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != BOARD_SIZE {
                return Err(BoardParseError::LineWidth { line: col + 1, width });
            }
            for (row, ch) in line.chars().enumerate() {
                let cell = Cell::from_digit(ch).ok_or(BoardParseError::InvalidCell {
                    line: col + 1,
                    column: row + 1,
                    found: ch,
                })?;
                board.set(Position::new(row as i8, col as i8), cell);
            }
        }

        Ok(board)
    }
}

impl TryFrom<String> for Board {
    type Error = BoardParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> String {
        board.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in 0..BOARD_SIZE as i8 {
            for row in 0..BOARD_SIZE as i8 {
                let cell = self.color_at(row, col).unwrap_or(Cell::Empty);
                write!(f, "{}", cell.to_digit())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    /// Human-readable picture of the board with label headers
    pub fn render(&self) -> String {
        let mut out = String::from(" ");
        for &letter in ROW_LABELS.iter() {
            out.push(' ');
            out.push(letter);
        }
        out.push('\n');

        for (col, &digit) in COL_LABELS.iter().enumerate() {
            out.push(digit);
            for row in 0..BOARD_SIZE {
                let cell = self.color_at(row as i8, col as i8).unwrap_or(Cell::Empty);
                out.push(' ');
                out.push(cell.glyph());
            }
            out.push('\n');
        }
        out
    }
}
