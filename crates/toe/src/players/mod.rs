//! Player trait and implementations.

mod human;
mod random;

pub use human::{HumanPlayer, MOVE_PROMPT};
pub use random::RandomPlayer;

use anyhow::Result;
use std::io::Write;
use toe_rules::{Board, Coord, PlayerKind};

/// Source of moves for one side of the game.
pub trait Player {
    /// Which kind of player this is.
    fn kind(&self) -> PlayerKind;

    /// Gets a move on an empty cell of `board`.
    ///
    /// `name` is the display name of the marker being played; any
    /// narration goes to `out`.
    fn get_move(&mut self, board: &Board, name: &str, out: &mut dyn Write) -> Result<Coord>;
}
