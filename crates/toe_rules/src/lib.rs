//! Tic-tac-toe rules engine.
//!
//! Pure game logic with no I/O:
//!
//! - **Board**: 3x3 grid of [`Cell`]s addressed by [`Coord`]
//! - **Rules**: terminal-state detection and winner attribution
//! - **Applicator**: parses and validates moves, applies accepted ones
//! - **Turn controller**: alternates markers and player kinds
//! - **GameState**: owns the above for one game
//!
//! # Example
//!
//! ```
//! use toe_rules::{GameState, Marker, Outcome, PlayerKind};
//!
//! let mut game = GameState::new(PlayerKind::Human);
//! for text in ["A1", "A2", "B1", "B2", "C1"] {
//!     let coord = game.validate(text).expect("legal move");
//!     game.play(coord).expect("game in progress");
//! }
//! assert_eq!(game.outcome(), Outcome::Win(Marker::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod applicator;
mod coord;
mod rules;
mod state;
mod turn;
mod types;

pub use action::{Move, MoveError};
pub use applicator::{apply, validate, validate_coord};
pub use coord::Coord;
pub use rules::{Line, Outcome, is_full, is_terminal, outcome, winning_line, winning_marker};
pub use state::GameState;
pub use turn::{PlayerKind, TurnController};
pub use types::{Board, BoardError, Cell, Marker};
