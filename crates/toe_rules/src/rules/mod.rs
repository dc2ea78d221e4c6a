//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot. Nothing here
//! mutates state; the outcome is always derived from the board on demand.

mod draw;
mod evaluate;
mod win;

pub use draw::{is_full, is_terminal};
pub use evaluate::{Outcome, outcome};
pub use win::{Line, winning_line, winning_marker};
