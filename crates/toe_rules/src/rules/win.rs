//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Coord, Marker};
use tracing::instrument;

/// One of the eight three-cell lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Column by index, 0 is `A`.
    Column(usize),
    /// Row by index, 0 is the top row.
    Row(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Every line, in the order they are scanned for a winner.
    pub const ALL: [Line; 8] = [
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three coordinates on this line.
    pub fn coords(self) -> [Coord; 3] {
        let at = |row: usize, col: usize| Coord::ALL[row * 3 + col];
        match self {
            Line::Column(c) => [at(0, c), at(1, c), at(2, c)],
            Line::Row(r) => [at(r, 0), at(r, 1), at(r, 2)],
            Line::MainDiagonal => [at(0, 0), at(1, 1), at(2, 2)],
            Line::AntiDiagonal => [at(0, 2), at(1, 1), at(2, 0)],
        }
    }

    /// The marker filling this line, if one does.
    pub fn owner(self, board: &Board) -> Option<Marker> {
        let [a, b, c] = self.coords().map(|coord| board.cell(coord));
        match a {
            Cell::Occupied(marker) if a == b && b == c => Some(marker),
            _ => None,
        }
    }
}

/// First completed line in scan order: columns, rows, then diagonals.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    Line::ALL.into_iter().find(|line| line.owner(board).is_some())
}

/// Marker that owns the first completed line.
///
/// Returns `None` if no line is complete, which on a full board is a tie.
#[instrument(skip(board))]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    Line::ALL.into_iter().find_map(|line| line.owner(board))
}
