//! Structured game outcome.

use super::draw::is_terminal;
use super::win::winning_marker;
use crate::{Board, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A marker completed a line.
    Win(Marker),
    /// Board is full with no completed line.
    Tie,
}

impl Outcome {
    /// True for `Win` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Win(marker) => Some(*marker),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(marker) => write!(f, "{} wins", marker),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Evaluates the board.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if !is_terminal(board) {
        return Outcome::InProgress;
    }
    match winning_marker(board) {
        Some(marker) => Outcome::Win(marker),
        None => Outcome::Tie,
    }
}
