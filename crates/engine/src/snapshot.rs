//! Read-time projection of a session for renderers.
//!
//! The session stores the locked board and the active piece separately. A
//! snapshot is derived from both on demand (the piece painted over a copy of
//! the board) and never fed back into the session.

use crate::core::Piece;
use crate::types::{Cell, Color, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color: Color,
    pub row: i32,
    pub col: i32,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.color,
            row: value.row,
            col: value.col,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cells with the active piece overlaid
    pub cells: Vec<Cell>,
    /// Active piece while the game runs; `None` once it is over
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cell at (row, col); `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// One row of cells, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Copy out as a grid of rows (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
