//! Core domain types for tic-tac-toe.

use super::coord::Coord;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marker a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Marker {
    /// Marker X (always moves first).
    X,
    /// Marker O.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Cell holds a marker. Never reverts to `Empty`.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }
}

/// Raw row/column lookup outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell ({}, {}) is off the board", row, col)]
pub struct BoardError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at a raw row and column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if either index is not in `0..3`.
    #[instrument(skip(self))]
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Coord::new(row, col)
            .map(|coord| self.cell(coord))
            .ok_or(BoardError { row, col })
    }

    /// Gets the cell at a coordinate.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Writes a marker into a cell.
    ///
    /// Storage only: occupancy is the caller's concern, see
    /// [`validate_coord`](crate::validate_coord).
    pub fn set(&mut self, coord: Coord, marker: Marker) {
        self.cells[coord.index()] = Cell::Occupied(marker);
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.cell(coord) == Cell::Empty
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// All cells in row-major order.
    pub fn all_cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_coords(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|coord| self.is_empty(*coord))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
