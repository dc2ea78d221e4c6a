//! Full-board and terminal-state detection.

use super::win::winning_marker;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// True once some line is complete or the board is full.
#[instrument(skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winning_marker(board).is_some() || is_full(board)
}
