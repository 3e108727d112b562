//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn position**: row 0, column 3 for every shape
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `STEP_INTERVAL_MS` | 500 | Gravity step cadence used by the driver |
//!
//! The interval is constant: it does not depend on score or cleared lines.
//!
//! # Examples
//!
//! ```
//! use rialo_tetris_types::{Color, GameAction, ShapeKind, BOARD_COLS, BOARD_ROWS};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//! assert_eq!(kind.color(), Color::Purple);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(BOARD_ROWS, 20);
//! assert_eq!(BOARD_COLS, 10);
//! ```

/// Board height in cells (20 rows)
pub const BOARD_ROWS: usize = 20;

/// Board width in cells (10 columns)
pub const BOARD_COLS: usize = 10;

/// Row at which every new piece is placed
pub const SPAWN_ROW: i32 = 0;

/// Column at which every new piece is placed (not shape-dependent)
pub const SPAWN_COL: i32 = 3;

/// Gravity step interval in milliseconds
pub const STEP_INTERVAL_MS: u64 = 500;

/// Points awarded per cleared row (linear, no multi-row bonus)
pub const LINE_CLEAR_SCORE: u32 = 100;

/// The seven shape kinds of the catalog
///
/// Each kind has a fixed color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple
/// - **L**: Orange
/// - **J**: Blue (mirror of L)
/// - **S**: Green
/// - **Z**: Red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// All kinds, in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use rialo_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("Z"), Some(ShapeKind::Z));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Single uppercase letter, as printed in the side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
        }
    }

    /// Color every cell of this shape is painted with
    pub fn color(&self) -> Color {
        match self {
            ShapeKind::I => Color::Cyan,
            ShapeKind::O => Color::Yellow,
            ShapeKind::T => Color::Purple,
            ShapeKind::L => Color::Orange,
            ShapeKind::J => Color::Blue,
            ShapeKind::S => Color::Green,
            ShapeKind::Z => Color::Red,
        }
    }
}

/// Semantic color tag carried by occupied cells.
///
/// The core makes no assumption about the palette; renderers map these tags
/// to whatever they draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Orange,
    Blue,
    Green,
    Red,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell occupied by a locked piece of that color
pub type Cell = Option<Color>;

/// Operations a driver can feed into a game session
///
/// Input adapters and the step clock both produce these; the session applies
/// them strictly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Nudge piece one row down (never locks)
    MoveDown,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Let the piece fall until blocked, then lock it
    Drop,
    /// One gravity step (what the periodic timer sends)
    Step,
    /// Discard the session and start over
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive camelCase)
    ///
    /// # Examples
    ///
    /// ```
    /// use rialo_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "drop" => Some(GameAction::Drop),
            "step" => Some(GameAction::Step),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::Drop => "drop",
            GameAction::Step => "step",
            GameAction::Restart => "restart",
        }
    }
}
