//! Computer player choosing uniformly random legal moves.

use super::Player;
use anyhow::Result;
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::Write;
use toe_rules::{Board, Coord, PlayerKind};
use tracing::{debug, instrument};

/// Picks a random empty square.
///
/// Samples all nine squares and rejects occupied ones, giving up after
/// `max_attempts` samples and choosing directly among the empty squares.
/// Both paths are uniform over the empty squares.
pub struct RandomPlayer<G> {
    rng: G,
    max_attempts: usize,
}

impl<G: Rng> RandomPlayer<G> {
    /// Default number of rejection samples before falling back.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 9;

    /// Creates a random player with the default sampling bound.
    pub fn new(rng: G) -> Self {
        Self::with_max_attempts(rng, Self::DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a random player with a custom sampling bound.
    pub fn with_max_attempts(rng: G, max_attempts: usize) -> Self {
        Self { rng, max_attempts }
    }

    /// Chooses an empty square without any narration.
    #[instrument(skip(self, board))]
    pub fn choose(&mut self, board: &Board) -> Result<Coord> {
        for attempt in 1..=self.max_attempts {
            let coord = Coord::ALL[self.rng.gen_range(0..Coord::ALL.len())];
            if board.is_empty(coord) {
                debug!(attempt, %coord, "Sampled empty square");
                return Ok(coord);
            }
        }

        let empty = board.empty_coords();
        let coord = empty
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("No empty squares left"))?;
        debug!(%coord, "Sampling bound reached, chose from empty squares");
        Ok(coord)
    }
}

impl<G: Rng> Player for RandomPlayer<G> {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Automated
    }

    fn get_move(&mut self, board: &Board, name: &str, out: &mut dyn Write) -> Result<Coord> {
        let coord = self.choose(board)?;
        writeln!(out, "{name} (Computer) played {coord}!")?;
        Ok(coord)
    }
}
