//! Board module - manages the game grid
//!
//! The board is a rows × cols grid (20x10 by default) where each cell is empty
//! or holds the color of a locked piece. Storage is a flat row-major vector, so
//! line clears are plain `copy_within` moves and never reallocate.
//!
//! Coordinates are (row, col): row 0 is the top, col 0 the left edge. Pieces
//! may stand partly above the board (negative rows); those cells are neither
//! checked for collisions nor written on merge.

use crate::error::ConfigError;
use crate::piece::ShapeMatrix;
use crate::types::{Cell, Color, BOARD_COLS, BOARD_ROWS};

/// Largest supported board side
pub const MAX_BOARD_DIM: usize = 1024;

/// The game board - flat storage, fixed dimensions for its whole lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 20x10 board
    pub fn new() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            cells: vec![None; BOARD_ROWS * BOARD_COLS],
        }
    }

    /// Create an empty board of a custom size
    pub fn with_size(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// Build a board from explicit rows (top row first)
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(height, width)?;

        let mut cells = Vec::with_capacity(height * width);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(ConfigError::RaggedBoard {
                    row,
                    len: line.len(),
                    expected: width,
                });
            }
            cells.extend(line);
        }
        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check whether a shape fits with its top-left corner at (row, col).
    ///
    /// Every occupied shape cell must land inside `[0, cols)` horizontally and
    /// above row `rows`. Cells above the board (negative rows) always pass;
    /// cells on the board must be empty. A shape with no occupied cells fits
    /// anywhere.
    pub fn is_valid_position(&self, shape: &ShapeMatrix, row: i32, col: i32) -> bool {
        shape.occupied().all(|(i, j)| {
            let r = row + i as i32;
            let c = col + j as i32;
            if c < 0 || c as usize >= self.cols {
                return false;
            }
            if r < 0 {
                return true;
            }
            (r as usize) < self.rows && !self.is_occupied(r, c)
        })
    }

    /// Paint every occupied shape cell with `color`.
    ///
    /// Cells that fall above the board are dropped. Cells outside the board
    /// horizontally or below it are dropped too; callers only merge positions
    /// that passed `is_valid_position`.
    pub fn merge(&mut self, shape: &ShapeMatrix, color: Color, row: i32, col: i32) {
        for (i, j) in shape.occupied() {
            self.set(row + i as i32, col + j as i32, Some(color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Remove all full rows at once and return how many were removed.
    ///
    /// Remaining rows keep their relative order and sink to the bottom; the
    /// same number of empty rows appears at the top. Single bottom-up
    /// two-pointer pass, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols;
        let mut write_row = self.rows;
        let mut cleared = 0;

        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// One row of cells, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy out as a grid of rows (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), ConfigError> {
    if rows == 0 {
        return Err(ConfigError::ZeroRows);
    }
    if cols == 0 {
        return Err(ConfigError::ZeroCols);
    }
    if rows > MAX_BOARD_DIM || cols > MAX_BOARD_DIM {
        return Err(ConfigError::BoardTooLarge {
            rows,
            cols,
            max: MAX_BOARD_DIM,
        });
    }
    Ok(())
}
