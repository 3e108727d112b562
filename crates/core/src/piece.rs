//! Piece module - shape matrices, clockwise rotation and the falling piece
//!
//! A shape is a small boolean matrix (at most 4x4). Rotation is purely
//! geometric: transpose then reverse each row, which turns an R×C matrix into
//! a C×R one. Whether the rotated shape actually fits is the board's business.
//!
//! Pieces are plain `Copy` values. Moving or rotating produces a new piece;
//! nothing is ever mutated in place.

use crate::board::Board;
use crate::catalog::ShapeDef;
use crate::error::ConfigError;
use crate::types::{Color, ShapeKind};

/// Largest supported shape side (rows or columns)
pub const MAX_SHAPE_DIM: usize = 4;

/// Occupancy pattern of a shape, stored in a fixed 4x4 array.
///
/// Cells outside `rows × cols` are always `false`, so two matrices compare
/// equal exactly when they have the same bounding box and pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl ShapeMatrix {
    /// Build a matrix from a literal grid of 0/1 values.
    ///
    /// Meant for constants; an oversized grid is a compile-time error when
    /// evaluated in a `const` item.
    pub const fn from_grid<const R: usize, const C: usize>(grid: [[u8; C]; R]) -> Self {
        assert!(
            R > 0 && R <= MAX_SHAPE_DIM && C > 0 && C <= MAX_SHAPE_DIM,
            "shape grid must be between 1x1 and 4x4"
        );
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut i = 0;
        while i < R {
            let mut j = 0;
            while j < C {
                cells[i][j] = grid[i][j] != 0;
                j += 1;
            }
            i += 1;
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    /// Build a matrix from runtime rows (custom catalogs).
    pub fn from_rows(rows: &[&[bool]]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyShape);
        }
        if height > MAX_SHAPE_DIM || width > MAX_SHAPE_DIM {
            return Err(ConfigError::ShapeTooLarge {
                rows: height,
                cols: width,
                max: MAX_SHAPE_DIM,
            });
        }
        if rows.iter().any(|r| r.len() != width) {
            return Err(ConfigError::RaggedShape);
        }

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in rows.iter().enumerate() {
            cells[i][..width].copy_from_slice(row);
        }
        Ok(Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Cell at (i, j); anything outside the bounding box reads as empty.
    pub fn get(&self, i: usize, j: usize) -> bool {
        i < self.rows() && j < self.cols() && self.cells[i][j]
    }

    /// Occupied cells as (row, col) offsets, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows())
            .flat_map(move |i| (0..self.cols()).map(move |j| (i, j)))
            .filter(move |&(i, j)| self.cells[i][j])
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }
}

/// Rotate a shape 90° clockwise: `out[i][j] = in[R-1-j][i]`.
///
/// Four applications always return the original matrix.
pub fn rotate_cw(matrix: &ShapeMatrix) -> ShapeMatrix {
    let r = matrix.rows();
    let c = matrix.cols();
    let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    for (i, out_row) in cells.iter_mut().enumerate().take(c) {
        for (j, out) in out_row.iter_mut().enumerate().take(r) {
            *out = matrix.cells[r - 1 - j][i];
        }
    }
    ShapeMatrix {
        rows: c as u8,
        cols: r as u8,
        cells,
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub matrix: ShapeMatrix,
    pub color: Color,
    /// Board row of the matrix's top edge (may be negative above the board)
    pub row: i32,
    /// Board column of the matrix's left edge
    pub col: i32,
}

impl Piece {
    /// Create a piece from a catalog definition at the given position
    pub fn spawn(def: &ShapeDef, row: i32, col: i32) -> Self {
        Self {
            kind: def.kind,
            matrix: def.matrix,
            color: def.color,
            row,
            col,
        }
    }

    /// Same piece translated by (drow, dcol)
    pub fn shifted(&self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
            ..*self
        }
    }

    /// Same piece with its matrix rotated clockwise, anchored at the same corner
    pub fn rotated(&self) -> Self {
        Self {
            matrix: rotate_cw(&self.matrix),
            ..*self
        }
    }

    /// Absolute (row, col) board coordinates of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.matrix
            .occupied()
            .map(move |(i, j)| (self.row + i as i32, self.col + j as i32))
    }

    /// Check if the piece fits on the board where it stands
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_position(&self.matrix, self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShapeDef;

    const L_SHAPE: ShapeMatrix = ShapeMatrix::from_grid([[1, 0, 0], [1, 1, 1]]);

    #[test]
    fn test_from_grid_dimensions() {
        assert_eq!(L_SHAPE.rows(), 2);
        assert_eq!(L_SHAPE.cols(), 3);
        assert!(L_SHAPE.get(0, 0));
        assert!(!L_SHAPE.get(0, 1));
        assert!(!L_SHAPE.get(3, 3));
        assert_eq!(L_SHAPE.occupied_count(), 4);
    }

    #[test]
    fn test_from_rows_matches_from_grid() {
        let built = ShapeMatrix::from_rows(&[&[true, false, false], &[true, true, true]]).unwrap();
        assert_eq!(built, L_SHAPE);
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert_eq!(ShapeMatrix::from_rows(&[]), Err(ConfigError::EmptyShape));
        assert_eq!(
            ShapeMatrix::from_rows(&[&[true, true], &[true]]),
            Err(ConfigError::RaggedShape)
        );
        assert!(matches!(
            ShapeMatrix::from_rows(&[&[true; 5]]),
            Err(ConfigError::ShapeTooLarge { cols: 5, .. })
        ));
    }

    #[test]
    fn test_rotate_cw_l_shape() {
        // 1 0 0      1 1
        // 1 1 1  ->  1 0
        //            1 0
        let rotated = rotate_cw(&L_SHAPE);
        assert_eq!(rotated, ShapeMatrix::from_grid([[1, 1], [1, 0], [1, 0]]));
    }

    #[test]
    fn test_rotate_cw_bar_transposes() {
        let bar = ShapeMatrix::from_grid([[1, 1, 1, 1]]);
        let rotated = rotate_cw(&bar);
        assert_eq!(rotated.rows(), 4);
        assert_eq!(rotated.cols(), 1);
        assert_eq!(rotate_cw(&rotated), bar);
    }

    #[test]
    fn test_four_rotations_identity() {
        let once = rotate_cw(&L_SHAPE);
        let back = rotate_cw(&rotate_cw(&rotate_cw(&once)));
        assert_eq!(back, L_SHAPE);
    }

    #[test]
    fn test_piece_moves_are_copies() {
        let def = ShapeDef::standard(ShapeKind::L);
        let piece = Piece::spawn(&def, 0, 3);
        let moved = piece.shifted(1, -1);

        assert_eq!((piece.row, piece.col), (0, 3));
        assert_eq!((moved.row, moved.col), (1, 2));
        assert_eq!(moved.matrix, piece.matrix);

        let turned = piece.rotated();
        assert_eq!((turned.row, turned.col), (0, 3));
        assert_eq!(turned.matrix, rotate_cw(&piece.matrix));
    }

    #[test]
    fn test_piece_cells_absolute() {
        let def = ShapeDef::standard(ShapeKind::O);
        let piece = Piece::spawn(&def, -1, 4);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(-1, 4), (-1, 5), (0, 4), (0, 5)]);
    }
}
