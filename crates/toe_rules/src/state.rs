//! Game state for one game: board, turn controller and move history.

use super::{
    Board, Coord, Move, MoveError, Outcome, PlayerKind, TurnController, apply, rules,
    validate, validate_coord,
};
use rand::Rng;
use tracing::{info, instrument};

/// Complete state of one game.
///
/// The outcome is never stored; [`GameState::outcome`] recomputes it from
/// the board each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: TurnController,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a game whose first move (as X) is made by `first_kind`.
    #[instrument]
    pub fn new(first_kind: PlayerKind) -> Self {
        Self::with_turn(TurnController::new(first_kind))
    }

    /// Creates a game with a randomly drawn first player kind.
    #[instrument(skip(rng))]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::with_turn(TurnController::random(rng))
    }

    fn with_turn(turn: TurnController) -> Self {
        Self {
            board: Board::new(),
            turn,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn controller.
    pub fn turn(&self) -> &TurnController {
        &self.turn
    }

    /// Moves accepted so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Current outcome, derived from the board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Validates move text against the current board.
    pub fn validate(&self, text: &str) -> Result<Coord, MoveError> {
        validate(&self.board, text)
    }

    /// Places the current marker at `coord` and passes the turn.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has ended,
    /// [`MoveError::Occupied`] if the cell is taken. State is unchanged on
    /// error.
    #[instrument(skip(self), fields(marker = %self.turn.marker(), kind = %self.turn.kind()))]
    pub fn play(&mut self, coord: Coord) -> Result<Outcome, MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        validate_coord(&self.board, coord)?;

        let action = Move::new(self.turn.marker(), coord);
        self.board = apply(std::mem::take(&mut self.board), action);
        self.history.push(action);
        self.turn.advance();

        let outcome = self.outcome();
        if outcome.is_terminal() {
            let line = rules::winning_line(&self.board);
            info!(%outcome, ?line, moves = self.history.len(), "Game finished");
        }
        Ok(outcome)
    }
}
