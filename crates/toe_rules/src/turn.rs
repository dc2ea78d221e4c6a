//! Turn controller: whose marker and which kind of player moves next.

use super::Marker;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Who supplies moves for a marker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum PlayerKind {
    /// Moves typed at the console.
    Human,
    /// Uniformly random legal moves.
    #[display("Computer")]
    Automated,
}

impl PlayerKind {
    /// Returns the other kind.
    pub fn other(self) -> Self {
        match self {
            PlayerKind::Human => PlayerKind::Automated,
            PlayerKind::Automated => PlayerKind::Human,
        }
    }
}

/// Two independent toggles flipped after every accepted move.
///
/// The marker always starts at X. The player kind that starts is chosen
/// once; after that both toggles flip together, so their relative phase
/// is fixed for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    marker: Marker,
    kind: PlayerKind,
    turns_taken: usize,
}

impl TurnController {
    /// Starts with X, played by `first_kind`.
    #[instrument]
    pub fn new(first_kind: PlayerKind) -> Self {
        Self {
            marker: Marker::X,
            kind: first_kind,
            turns_taken: 0,
        }
    }

    /// Starts with X, played by a uniformly drawn kind.
    #[instrument(skip(rng))]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let first_kind = if rng.gen_bool(0.5) {
            PlayerKind::Human
        } else {
            PlayerKind::Automated
        };
        debug!(%first_kind, "Drew first player kind");
        Self::new(first_kind)
    }

    /// Marker to move.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Kind of player to move.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Number of accepted moves so far.
    pub fn turns_taken(&self) -> usize {
        self.turns_taken
    }

    /// Flips both toggles.
    #[instrument(skip(self))]
    pub fn advance(&mut self) {
        self.marker = self.marker.opponent();
        self.kind = self.kind.other();
        self.turns_taken += 1;
    }
}
