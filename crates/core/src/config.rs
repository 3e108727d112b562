//! Session construction parameters.
//!
//! Everything here is checked once, up front, by [`GameConfig::validate`]. A
//! session built from a validated config can always spawn on an empty board,
//! which is what makes `restart` infallible.

use crate::board::MAX_BOARD_DIM;
use crate::piece::MAX_SHAPE_DIM;
use crate::catalog::Catalog;
use crate::error::ConfigError;
use crate::types::{BOARD_COLS, BOARD_ROWS, SPAWN_COL, SPAWN_ROW};

/// Highest a piece may spawn above the board: one shape height
pub const MIN_SPAWN_ROW: i32 = -(MAX_SHAPE_DIM as i32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub spawn_row: i32,
    pub spawn_col: i32,
    /// RNG seed for shape selection
    pub seed: u32,
    pub catalog: Catalog,
}

impl GameConfig {
    /// 20x10 board, spawn at (0, 3), all seven shapes
    pub fn standard(seed: u32) -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            spawn_row: SPAWN_ROW,
            spawn_col: SPAWN_COL,
            seed,
            catalog: Catalog::standard(),
        }
    }

    /// Custom board size. The spawn column sits two left of center, which is
    /// column 3 on the standard 10-wide board.
    pub fn with_size(rows: usize, cols: usize, seed: u32) -> Self {
        Self {
            rows,
            cols,
            spawn_col: (cols / 2).saturating_sub(2) as i32,
            ..Self::standard(seed)
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_spawn(mut self, row: i32, col: i32) -> Self {
        self.spawn_row = row;
        self.spawn_col = col;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Fail fast on a board or spawn point the engine cannot play on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if self.rows > MAX_BOARD_DIM || self.cols > MAX_BOARD_DIM {
            return Err(ConfigError::BoardTooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_BOARD_DIM,
            });
        }

        for def in self.catalog.shapes() {
            let right = i64::from(self.spawn_col) + def.matrix.cols() as i64;
            let bottom = i64::from(self.spawn_row) + def.matrix.rows() as i64;
            if self.spawn_row < MIN_SPAWN_ROW
                || self.spawn_col < 0
                || right > self.cols as i64
                || bottom > self.rows as i64
            {
                return Err(ConfigError::SpawnOutOfBounds {
                    kind: def.kind,
                    row: self.spawn_row,
                    col: self.spawn_col,
                });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard(1)
    }
}
