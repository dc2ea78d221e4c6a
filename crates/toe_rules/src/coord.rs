//! Board coordinates and their two-character text notation.
//!
//! A square is written as a column letter followed by a row number:
//! `A1` is the top-left corner, `C3` the bottom-right. Parsing is
//! case-insensitive.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

const COLUMNS: [char; 3] = ['A', 'B', 'C'];
const ROWS: [char; 3] = ['1', '2', '3'];

/// A cell address on the 3x3 board. Always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Creates a coordinate, or `None` if either index is not in `0..3`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Row index, 0 is the top row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index, 0 is column `A`.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Parses move notation such as `b2`.
    ///
    /// One trailing line terminator is ignored so raw console lines can be
    /// passed straight in. Anything else that is not exactly a letter and a
    /// digit is [`MoveError::Malformed`]; a letter or digit outside `A-C` /
    /// `1-3` is [`MoveError::OutOfRange`].
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, MoveError> {
        let line = text
            .strip_suffix("\r\n")
            .or_else(|| text.strip_suffix('\n'))
            .unwrap_or(text);
        let chars: Vec<char> = line.to_uppercase().chars().collect();

        let &[letter, digit] = chars.as_slice() else {
            return Err(MoveError::Malformed(line.to_string()));
        };
        if !letter.is_ascii_alphabetic() || !digit.is_ascii_digit() {
            return Err(MoveError::Malformed(line.to_string()));
        }

        let col = COLUMNS.iter().position(|c| *c == letter);
        let row = ROWS.iter().position(|r| *r == digit);
        match (row, col) {
            (Some(row), Some(col)) => Ok(Self { row, col }),
            _ => Err(MoveError::OutOfRange(line.to_string())),
        }
    }
}

impl FromStr for Coord {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", COLUMNS[self.col], ROWS[self.row])
    }
}
