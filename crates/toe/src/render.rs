//! Text rendering for the board and the final result.

use toe_rules::{Board, Cell, Marker, Outcome};

/// Display names bound to each marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    /// Name of the player holding X.
    x: String,
    /// Name of the player holding O.
    o: String,
}

impl Roster {
    /// Creates a roster from the two display names.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Display name for a marker.
    pub fn name(&self, marker: Marker) -> &str {
        match marker {
            Marker::X => &self.x,
            Marker::O => &self.o,
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new("Player 1 (X)", "Player 2 (O)")
    }
}

/// Formats the board with column letters above and row numbers on the right.
///
/// ```text
///
///   A   B   C
/// -------------
/// | X | X | X |  1
/// -------------
/// | O | O | X |  2
/// -------------
/// | X |   | O |  3
/// -------------
/// ```
pub fn render_board(board: &Board) -> String {
    const SEPARATOR: &str = "-------------";

    let mut out = String::from("\n  A   B   C\n");
    for (row, cells) in board.all_cells().chunks(3).enumerate() {
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push('|');
        for cell in cells {
            let symbol = match cell {
                Cell::Empty => ' ',
                Cell::Occupied(Marker::X) => 'X',
                Cell::Occupied(Marker::O) => 'O',
            };
            out.push_str(&format!(" {symbol} |"));
        }
        out.push_str(&format!("  {}\n", row + 1));
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

/// One-line summary of a finished game.
pub fn result_message(outcome: Outcome, roster: &Roster) -> String {
    match outcome {
        Outcome::Win(marker) => format!("{} won :0", roster.name(marker)),
        Outcome::Tie | Outcome::InProgress => "There was a tie :0".to_string(),
    }
}
