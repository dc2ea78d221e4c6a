//! Move validation and application.
//!
//! [`apply`] is the only path that writes markers into a [`Board`].

use super::{Board, Coord, Move, MoveError};
use tracing::{debug, instrument};

/// Parses move text and checks the target cell is free.
///
/// Total over all input: every string yields `Ok` or a [`MoveError`].
#[instrument(skip(board))]
pub fn validate(board: &Board, text: &str) -> Result<Coord, MoveError> {
    let coord = Coord::parse(text)?;
    validate_coord(board, coord)?;
    Ok(coord)
}

/// Precondition for a move: the cell must be empty.
#[instrument(skip(board))]
pub fn validate_coord(board: &Board, coord: Coord) -> Result<(), MoveError> {
    if board.is_empty(coord) {
        Ok(())
    } else {
        Err(MoveError::Occupied(coord))
    }
}

/// Places a validated move and returns the updated board.
#[instrument(skip(board))]
pub fn apply(mut board: Board, action: Move) -> Board {
    debug_assert!(board.is_empty(action.coord), "apply called on occupied cell");
    board.set(action.coord, action.marker);
    debug!(%action, "Move applied");
    board
}
