//! Turn loop for one game.

use super::players::Player;
use super::render::{Roster, render_board, result_message};
use anyhow::Result;
use std::io::Write;
use toe_rules::{GameState, Marker, Outcome, PlayerKind};
use tracing::{info, instrument};

/// One interactive game between a human and the computer.
///
/// Alternates between the two players according to the game's turn
/// controller, writing all narration and board renders to `out`.
pub struct Session<W> {
    state: GameState,
    roster: Roster,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    out: W,
}

impl<W: Write> Session<W> {
    /// Creates a session over an existing game state.
    ///
    /// `human` and `computer` must report the matching [`PlayerKind`].
    pub fn new(
        state: GameState,
        roster: Roster,
        human: impl Player + 'static,
        computer: impl Player + 'static,
        out: W,
    ) -> Self {
        debug_assert_eq!(human.kind(), PlayerKind::Human, "human seat needs a human player");
        debug_assert_eq!(
            computer.kind(),
            PlayerKind::Automated,
            "computer seat needs an automated player"
        );
        Self {
            state,
            roster,
            human: Box::new(human),
            computer: Box::new(computer),
            out,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Plays until the game ends and prints the result.
    ///
    /// # Errors
    ///
    /// Fails only if a player cannot produce a move (for example the human's
    /// input closed) or output cannot be written.
    #[instrument(skip(self), fields(first = %self.state.turn().kind()))]
    pub fn run(&mut self) -> Result<Outcome> {
        if self.state.turn().kind() == PlayerKind::Automated {
            writeln!(
                self.out,
                "Computer plays first as {}",
                self.roster.name(Marker::X)
            )?;
        }

        while !self.state.outcome().is_terminal() {
            let name = self.roster.name(self.state.turn().marker());
            let player = match self.state.turn().kind() {
                PlayerKind::Human => &mut self.human,
                PlayerKind::Automated => &mut self.computer,
            };

            let coord = player.get_move(self.state.board(), name, &mut self.out)?;
            self.state.play(coord)?;

            write!(self.out, "{}", render_board(self.state.board()))?;
            writeln!(self.out, "\n")?;
        }

        let outcome = self.state.outcome();
        info!(%outcome, turns = self.state.turn().turns_taken(), "Session complete");

        writeln!(self.out, "Game over!")?;
        writeln!(self.out, "{}", result_message(outcome, &self.roster))?;
        write!(self.out, "{}", render_board(self.state.board()))?;
        self.out.flush()?;
        Ok(outcome)
    }
}
