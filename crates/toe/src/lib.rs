//! Console tic-tac-toe.
//!
//! A human plays a computer that picks uniformly random legal moves. Which
//! of the two opens as X is drawn once at the start of the game.
//!
//! # Architecture
//!
//! - **Players**: [`HumanPlayer`] reads moves from a line reader,
//!   [`RandomPlayer`] samples empty squares
//! - **Render**: board grid and outcome text
//! - **Session**: the turn loop driving [`toe_rules::GameState`]
//! - **Config**: TOML settings (player names, RNG seed)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod players;
mod render;
mod session;

pub use config::{ConfigError, GameConfig};
pub use players::{HumanPlayer, MOVE_PROMPT, Player, RandomPlayer};
pub use render::{Roster, render_board, result_message};
pub use session::Session;
