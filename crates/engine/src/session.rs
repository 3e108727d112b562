//! Game session - the only component with mutable game state
//!
//! A session owns its board, the active piece, the RNG and the score. Drivers
//! call into it strictly one operation at a time (a periodic `step`, plus
//! moves/rotations from input); every call runs to completion.
//!
//! Lifecycle: `Running` until a freshly spawned piece does not fit, then
//! `GameOver`. In `GameOver` every operation except `restart` is a no-op.

use log::{debug, info, trace};

use crate::core::{Board, ConfigError, GameConfig, Piece, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Cell, GameAction, LINE_CLEAR_SCORE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What a gravity step (or a drop) did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece locked, `cleared` rows were removed, a new piece spawned
    Locked { cleared: usize },
    /// The piece locked but the next one could not be placed
    GameOver { cleared: usize },
    /// The session was already over; nothing happened
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    active: Piece,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    status: GameStatus,
}

impl GameSession {
    /// Create a session on an empty board
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::with_size(config.rows, config.cols)?;
        Ok(Self::start(config, board))
    }

    /// Standard 20x10 game with all seven shapes
    pub fn new_game(seed: u32) -> Self {
        Self::start(GameConfig::standard(seed), Board::new())
    }

    /// Create a session on a prepared board.
    ///
    /// If the first piece already collides the session starts in `GameOver`.
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.rows() != config.rows || board.cols() != config.cols {
            return Err(ConfigError::BoardSizeMismatch {
                rows: config.rows,
                cols: config.cols,
                found_rows: board.rows(),
                found_cols: board.cols(),
            });
        }
        Ok(Self::start(config, board))
    }

    fn start(config: GameConfig, board: Board) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let def = config.catalog.random_shape(&mut rng);
        let active = Piece::spawn(&def, config.spawn_row, config.spawn_col);
        let status = if active.is_valid(&board) {
            GameStatus::Running
        } else {
            info!("starting position is already blocked at spawn");
            GameStatus::GameOver
        };

        debug!(
            "new session {}x{} seed={} first={:?}",
            config.rows, config.cols, config.seed, active.kind
        );

        Self {
            config,
            board,
            active,
            rng,
            score: 0,
            lines: 0,
            status,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared since the last (re)start
    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// One gravity step: fall a row if possible, otherwise lock.
    pub fn step(&mut self) -> StepOutcome {
        if self.is_game_over() {
            return StepOutcome::Ignored;
        }

        let fallen = self.active.shifted(1, 0);
        if fallen.is_valid(&self.board) {
            self.active = fallen;
            return StepOutcome::Fell;
        }

        self.lock_piece()
    }

    /// Fall until blocked, then lock (same lock path as `step`).
    pub fn hard_drop(&mut self) -> StepOutcome {
        if self.is_game_over() {
            return StepOutcome::Ignored;
        }

        loop {
            let fallen = self.active.shifted(1, 0);
            if !fallen.is_valid(&self.board) {
                break;
            }
            self.active = fallen;
        }

        self.lock_piece()
    }

    pub fn move_left(&mut self) -> bool {
        self.try_replace(self.active.shifted(0, -1))
    }

    pub fn move_right(&mut self) -> bool {
        self.try_replace(self.active.shifted(0, 1))
    }

    /// Single-row nudge. Unlike `step`, a blocked nudge never locks.
    pub fn move_down(&mut self) -> bool {
        self.try_replace(self.active.shifted(1, 0))
    }

    /// Rotate clockwise in place. No wall kicks: a blocked rotation is a no-op.
    pub fn rotate(&mut self) -> bool {
        self.try_replace(self.active.rotated())
    }

    /// Discard the board, score and piece and start over.
    ///
    /// The RNG keeps running, so consecutive games get different shapes.
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.status = GameStatus::Running;
        self.spawn_piece();
        info!("game restarted (rng state {})", self.rng.state());
    }

    /// Apply a game action; returns whether the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
            GameAction::Drop => self.hard_drop() != StepOutcome::Ignored,
            GameAction::Step => self.step() != StepOutcome::Ignored,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Locked board with the active piece painted over it, as rows.
    pub fn board_snapshot(&self) -> Vec<Vec<Cell>> {
        self.snapshot().to_rows()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Fill an existing snapshot, reusing its cell buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.is_game_over();

        if self.is_game_over() {
            out.active = None;
            return;
        }

        out.active = Some(ActiveSnapshot::from(self.active));
        for (row, col) in self.active.cells() {
            if row < 0 || col < 0 || row as usize >= out.rows || col as usize >= out.cols {
                continue;
            }
            out.cells[row as usize * out.cols + col as usize] = Some(self.active.color);
        }
    }

    fn try_replace(&mut self, candidate: Piece) -> bool {
        if self.is_game_over() {
            return false;
        }
        if !candidate.is_valid(&self.board) {
            trace!(
                "rejected {:?} at ({}, {})",
                candidate.kind,
                candidate.row,
                candidate.col
            );
            return false;
        }
        self.active = candidate;
        true
    }

    /// Merge the active piece, clear rows, score, and spawn the next piece
    fn lock_piece(&mut self) -> StepOutcome {
        let piece = self.active;
        self.board
            .merge(&piece.matrix, piece.color, piece.row, piece.col);

        let cleared = self.board.clear_full_rows();
        self.lines = self.lines.saturating_add(cleared as u32);
        self.score = self
            .score
            .saturating_add(cleared as u32 * LINE_CLEAR_SCORE);

        debug!(
            "locked {:?} at ({}, {}), cleared {} rows, score {}",
            piece.kind, piece.row, piece.col, cleared, self.score
        );

        if self.spawn_piece() {
            StepOutcome::Locked { cleared }
        } else {
            StepOutcome::GameOver { cleared }
        }
    }

    /// Place a new random piece at the spawn point; on collision the game ends
    /// and the piece is left unmerged.
    fn spawn_piece(&mut self) -> bool {
        let def = self.config.catalog.random_shape(&mut self.rng);
        self.active = Piece::spawn(&def, self.config.spawn_row, self.config.spawn_col);

        if self.active.is_valid(&self.board) {
            return true;
        }

        self.status = GameStatus::GameOver;
        info!(
            "game over: {:?} cannot spawn, final score {}",
            def.kind, self.score
        );
        false
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new_game(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalog;
    use crate::types::{Color, ShapeKind};

    fn only(kind: ShapeKind) -> GameConfig {
        GameConfig::standard(1).with_catalog(Catalog::from_kinds(&[kind]).unwrap())
    }

    #[test]
    fn test_new_session_spawns_at_canonical_position() {
        let session = GameSession::new_game(12345);
        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.score(), 0);
        assert_eq!((session.active().row, session.active().col), (0, 3));
        assert_eq!(session.board().occupied_count(), 0);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let err = GameSession::new(GameConfig::with_size(0, 10, 1)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroRows);
    }

    #[test]
    fn test_with_board_size_mismatch() {
        let board = Board::with_size(10, 10).unwrap();
        let err = GameSession::with_board(GameConfig::standard(1), board).unwrap_err();
        assert!(matches!(err, ConfigError::BoardSizeMismatch { .. }));
    }

    #[test]
    fn test_step_falls_one_row() {
        let mut session = GameSession::new(only(ShapeKind::T)).unwrap();
        assert_eq!(session.step(), StepOutcome::Fell);
        assert_eq!(session.active().row, 1);
        assert_eq!(session.board().occupied_count(), 0);
    }

    #[test]
    fn test_move_left_stops_at_wall() {
        let mut session = GameSession::new(only(ShapeKind::O)).unwrap();
        for _ in 0..3 {
            assert!(session.move_left());
        }
        assert_eq!(session.active().col, 0);
        assert!(!session.move_left());
        assert_eq!(session.active().col, 0);
    }

    #[test]
    fn test_move_right_stops_at_wall() {
        let mut session = GameSession::new(only(ShapeKind::O)).unwrap();
        while session.move_right() {}
        assert_eq!(session.active().col, 8);
    }

    #[test]
    fn test_move_down_never_locks() {
        let mut session = GameSession::new(only(ShapeKind::O)).unwrap();
        while session.move_down() {}
        assert_eq!(session.active().row, 18);
        assert!(!session.move_down());
        assert!(!session.move_down());
        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.active().row, 18);
    }

    #[test]
    fn test_rotate_changes_matrix() {
        let mut session = GameSession::new(only(ShapeKind::I)).unwrap();
        assert!(session.rotate());
        let m = session.active().matrix;
        assert_eq!((m.rows(), m.cols()), (4, 1));
        assert_eq!((session.active().row, session.active().col), (0, 3));
    }

    #[test]
    fn test_rotate_blocked_by_floor_is_noop() {
        let mut session = GameSession::new(only(ShapeKind::I)).unwrap();
        while session.move_down() {}
        assert_eq!(session.active().row, 19);
        let before = session.active();
        // Vertical bar would need rows 19..23.
        assert!(!session.rotate());
        assert_eq!(session.active(), before);
    }

    #[test]
    fn test_hard_drop_locks_at_bottom() {
        let mut session = GameSession::new(only(ShapeKind::O)).unwrap();
        assert_eq!(session.hard_drop(), StepOutcome::Locked { cleared: 0 });
        assert_eq!(session.board().get(18, 3), Some(Some(Color::Yellow)));
        assert_eq!(session.board().get(19, 4), Some(Some(Color::Yellow)));
        assert_eq!((session.active().row, session.active().col), (0, 3));
    }

    #[test]
    fn test_lock_clears_and_scores() {
        let mut board = Board::new();
        for col in 0..10 {
            if col != 3 && col != 4 {
                board.set(19, col, Some(Color::Red));
                board.set(18, col, Some(Color::Red));
            }
        }
        let mut session = GameSession::with_board(only(ShapeKind::O), board).unwrap();
        assert_eq!(session.hard_drop(), StepOutcome::Locked { cleared: 2 });
        assert_eq!(session.score(), 200);
        assert_eq!(session.lines_cleared(), 2);
        assert_eq!(session.board().occupied_count(), 0);
    }

    #[test]
    fn test_game_over_makes_everything_noop() {
        let mut board = Board::new();
        // Leave the spawn area open but fill row 2 so the first piece locks high.
        for col in 0..10 {
            if col != 9 {
                board.set(2, col, Some(Color::Blue));
            }
        }
        let mut session = GameSession::with_board(only(ShapeKind::O), board).unwrap();
        assert_eq!(session.step(), StepOutcome::GameOver { cleared: 0 });
        assert!(session.is_game_over());

        let frozen = session.active();
        assert_eq!(session.step(), StepOutcome::Ignored);
        assert_eq!(session.hard_drop(), StepOutcome::Ignored);
        assert!(!session.move_left());
        assert!(!session.move_right());
        assert!(!session.move_down());
        assert!(!session.rotate());
        assert_eq!(session.active(), frozen);

        session.restart();
        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_start_on_blocked_board_is_over() {
        let mut board = Board::new();
        board.set(0, 3, Some(Color::Green));
        board.set(0, 4, Some(Color::Green));
        board.set(1, 3, Some(Color::Green));
        board.set(1, 4, Some(Color::Green));
        let session = GameSession::with_board(only(ShapeKind::O), board).unwrap();
        assert!(session.is_game_over());
    }

    #[test]
    fn test_snapshot_overlays_active_piece() {
        let session = GameSession::new(only(ShapeKind::O)).unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.get(0, 3), Some(Some(Color::Yellow)));
        assert_eq!(snap.get(1, 4), Some(Some(Color::Yellow)));
        assert_eq!(snap.get(2, 3), Some(None));
        // Authoritative board stays untouched.
        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.board_snapshot().len(), 20);
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let mut session = GameSession::new_game(3);
        let mut snap = GameSnapshot::default();
        session.snapshot_into(&mut snap);
        let cap = snap.cells.capacity();
        session.step();
        session.snapshot_into(&mut snap);
        assert_eq!(snap.cells.capacity(), cap);
        assert_eq!(snap.cells.len(), 200);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut session = GameSession::new(only(ShapeKind::T)).unwrap();
        assert!(session.apply_action(GameAction::MoveLeft));
        assert_eq!(session.active().col, 2);
        assert!(session.apply_action(GameAction::Step));
        assert_eq!(session.active().row, 1);
        assert!(session.apply_action(GameAction::Drop));
        assert_eq!(session.board().occupied_count(), 4);
        assert!(session.apply_action(GameAction::Restart));
        assert_eq!(session.board().occupied_count(), 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameSession::new_game(777);
        let mut b = GameSession::new_game(777);
        for _ in 0..500 {
            assert_eq!(a.step(), b.step());
            assert_eq!(a.active(), b.active());
        }
        assert_eq!(a.board(), b.board());
    }
}
