//! Move types and the errors raised while validating them.

use super::{Coord, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a marker placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker being placed.
    pub marker: Marker,
    /// Where it is placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(marker: Marker, coord: Coord) -> Self {
        Self { marker, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.coord)
    }
}

/// Reason a proposed move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Input is not a letter followed by a digit.
    #[display("Malformed move {:?}", _0)]
    Malformed(String),

    /// Letter or digit is outside the board.
    #[display("Move {:?} is off the board", _0)]
    OutOfRange(String),

    /// The target cell already holds a marker.
    #[display("Square {} is already occupied", _0)]
    Occupied(Coord),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
