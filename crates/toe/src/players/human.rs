//! Human player reading moves from a line-oriented reader.

use super::Player;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use toe_rules::{Board, Coord, PlayerKind, validate};
use tracing::{debug, instrument};

/// Prompt shown before every move a human makes.
pub const MOVE_PROMPT: &str = "Enter your move by selecting a square (e.g. B2): ";

/// Human player typing moves such as `B2`.
///
/// Keeps prompting until a legal move is entered.
pub struct HumanPlayer<R> {
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a human player reading from `input`.
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Reads one raw line. Bytes that are not UTF-8 are replaced so the
    /// line is rejected by validation rather than ending the game.
    fn read_line(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut bytes)
            .context("Failed to read move")?;
        if read == 0 {
            anyhow::bail!("Input closed before a move was entered");
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    #[instrument(skip(self, board, out))]
    fn get_move(&mut self, board: &Board, name: &str, out: &mut dyn Write) -> Result<Coord> {
        writeln!(out, "Your turn, {name}.")?;
        loop {
            write!(out, "{MOVE_PROMPT}")?;
            out.flush()?;

            let line = self.read_line()?;
            match validate(board, &line) {
                Ok(coord) => return Ok(coord),
                Err(e) => {
                    debug!(error = %e, "Rejected move");
                    writeln!(out, "Invalid move :(\n")?;
                    writeln!(out, "Still your turn, {name}.")?;
                }
            }
        }
    }
}
