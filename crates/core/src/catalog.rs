//! Shape catalog - the seven built-in shapes and uniform random selection
//!
//! The standard definitions are compile-time constants and are never mutated.
//! `ShapeDef` is `Copy`, so every draw hands the caller an independent copy.

use crate::error::ConfigError;
use crate::piece::ShapeMatrix;
use crate::rng::SimpleRng;
use crate::types::{Color, ShapeKind};

/// A named shape: occupancy matrix plus the color its cells are painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeDef {
    pub kind: ShapeKind,
    pub matrix: ShapeMatrix,
    pub color: Color,
}

impl ShapeDef {
    /// The built-in definition for a kind
    pub fn standard(kind: ShapeKind) -> Self {
        STANDARD_SHAPES[kind as usize]
    }
}

/// Built-in shapes, indexed in `ShapeKind` declaration order
pub const STANDARD_SHAPES: [ShapeDef; 7] = [
    ShapeDef {
        kind: ShapeKind::I,
        matrix: ShapeMatrix::from_grid([[1, 1, 1, 1]]),
        color: Color::Cyan,
    },
    ShapeDef {
        kind: ShapeKind::O,
        matrix: ShapeMatrix::from_grid([[1, 1], [1, 1]]),
        color: Color::Yellow,
    },
    ShapeDef {
        kind: ShapeKind::T,
        matrix: ShapeMatrix::from_grid([[0, 1, 0], [1, 1, 1]]),
        color: Color::Purple,
    },
    ShapeDef {
        kind: ShapeKind::L,
        matrix: ShapeMatrix::from_grid([[1, 0, 0], [1, 1, 1]]),
        color: Color::Orange,
    },
    ShapeDef {
        kind: ShapeKind::J,
        matrix: ShapeMatrix::from_grid([[0, 0, 1], [1, 1, 1]]),
        color: Color::Blue,
    },
    ShapeDef {
        kind: ShapeKind::S,
        matrix: ShapeMatrix::from_grid([[0, 1, 1], [1, 1, 0]]),
        color: Color::Green,
    },
    ShapeDef {
        kind: ShapeKind::Z,
        matrix: ShapeMatrix::from_grid([[1, 1, 0], [0, 1, 1]]),
        color: Color::Red,
    },
];

/// The set of shapes a session draws from. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    shapes: Vec<ShapeDef>,
}

impl Catalog {
    /// All seven built-in shapes
    pub fn standard() -> Self {
        Self {
            shapes: STANDARD_SHAPES.to_vec(),
        }
    }

    /// A custom catalog. Every shape needs at least one occupied cell.
    pub fn new(shapes: Vec<ShapeDef>) -> Result<Self, ConfigError> {
        if shapes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if shapes.iter().any(|def| def.matrix.occupied_count() == 0) {
            return Err(ConfigError::EmptyShape);
        }
        Ok(Self { shapes })
    }

    /// A catalog restricted to some of the built-in kinds
    ///
    /// # Examples
    ///
    /// ```
    /// use rialo_tetris_core::Catalog;
    /// use rialo_tetris_core::types::ShapeKind;
    ///
    /// let only_o = Catalog::from_kinds(&[ShapeKind::O]).unwrap();
    /// assert_eq!(only_o.len(), 1);
    /// assert!(Catalog::from_kinds(&[]).is_err());
    /// ```
    pub fn from_kinds(kinds: &[ShapeKind]) -> Result<Self, ConfigError> {
        Self::new(kinds.iter().map(|&kind| ShapeDef::standard(kind)).collect())
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[ShapeDef] {
        &self.shapes
    }

    /// First definition of the given kind, if the catalog has one
    pub fn get(&self, kind: ShapeKind) -> Option<&ShapeDef> {
        self.shapes.iter().find(|def| def.kind == kind)
    }

    /// Pick a shape uniformly at random
    pub fn random_shape(&self, rng: &mut SimpleRng) -> ShapeDef {
        self.shapes[rng.next_index(self.shapes.len())]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_order_matches_kind() {
        for kind in ShapeKind::ALL {
            let def = ShapeDef::standard(kind);
            assert_eq!(def.kind, kind);
            assert_eq!(def.color, kind.color());
        }
    }

    #[test]
    fn test_every_standard_shape_has_four_cells() {
        for def in STANDARD_SHAPES {
            assert_eq!(def.matrix.occupied_count(), 4, "{:?}", def.kind);
        }
    }

    #[test]
    fn test_original_matrices() {
        let t = ShapeDef::standard(ShapeKind::T).matrix;
        assert_eq!((t.rows(), t.cols()), (2, 3));
        assert!(!t.get(0, 0) && t.get(0, 1) && !t.get(0, 2));
        assert!(t.get(1, 0) && t.get(1, 1) && t.get(1, 2));

        let i = ShapeDef::standard(ShapeKind::I).matrix;
        assert_eq!((i.rows(), i.cols()), (1, 4));
    }

    #[test]
    fn test_random_shape_draws_all_kinds() {
        let catalog = Catalog::standard();
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 7];
        for _ in 0..200 {
            seen[catalog.random_shape(&mut rng).kind as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_shape_is_a_copy() {
        let catalog = Catalog::from_kinds(&[ShapeKind::T]).unwrap();
        let mut rng = SimpleRng::new(1);
        let mut drawn = catalog.random_shape(&mut rng);
        drawn.matrix = crate::piece::rotate_cw(&drawn.matrix);
        assert_ne!(drawn, catalog.shapes()[0]);
        assert_eq!(catalog.shapes()[0], ShapeDef::standard(ShapeKind::T));
    }

    #[test]
    fn test_custom_catalog_validation() {
        assert_eq!(Catalog::new(Vec::new()), Err(ConfigError::EmptyCatalog));

        let blank = ShapeDef {
            kind: ShapeKind::O,
            matrix: ShapeMatrix::from_grid([[0, 0], [0, 0]]),
            color: Color::Yellow,
        };
        assert_eq!(Catalog::new(vec![blank]), Err(ConfigError::EmptyShape));
    }

    #[test]
    fn test_get_by_kind() {
        let catalog = Catalog::from_kinds(&[ShapeKind::S, ShapeKind::Z]).unwrap();
        assert!(catalog.get(ShapeKind::S).is_some());
        assert!(catalog.get(ShapeKind::I).is_none());
    }
}
