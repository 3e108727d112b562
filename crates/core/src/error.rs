//! Construction-time errors.
//!
//! Gameplay itself has no failure modes; every operation on a running session
//! is total. The only thing that can go wrong is handing the engine a board or
//! catalog it cannot play on, and that is rejected before a session exists.

use thiserror::Error;

use crate::types::ShapeKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one row")]
    ZeroRows,
    #[error("board must have at least one column")]
    ZeroCols,
    #[error("board of {rows}x{cols} exceeds the {max}x{max} limit")]
    BoardTooLarge { rows: usize, cols: usize, max: usize },
    #[error("board rows have unequal lengths (row {row} has {len} cells, expected {expected})")]
    RaggedBoard {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("board is {found_rows}x{found_cols} but the session expects {rows}x{cols}")]
    BoardSizeMismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },
    #[error("shape catalog is empty")]
    EmptyCatalog,
    #[error("shape has no occupied cells")]
    EmptyShape,
    #[error("shape of {rows}x{cols} exceeds the {max}x{max} limit")]
    ShapeTooLarge { rows: usize, cols: usize, max: usize },
    #[error("shape rows have unequal lengths")]
    RaggedShape,
    #[error("shape {kind:?} does not fit on the board at spawn ({row}, {col})")]
    SpawnOutOfBounds { kind: ShapeKind, row: i32, col: i32 },
}
