//! Game state module - the controller
//!
//! `GameState` owns the board, the active piece, the score and the gravity
//! timer. Every public method is one complete operation on `&mut self`, so a
//! lock/spawn/clear sequence can never interleave with another one.
//!
//! All piece movement is two-phase: build a candidate with
//! [`Piece::moved`]/[`Piece::rotated`], test it with [`collides`], and only
//! then commit it.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::collision::collides;
use crate::piece::Piece;
use crate::pieces::random_shape;
use crate::scoring::clear_lines;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    rng: StdRng,
    seed: u64,
    phase: Phase,
    score: u32,
    lines: u32,
    /// Number of times the top row filled and the board was wiped
    game_overs: u32,
    drop_counter_ms: u32,
    drop_interval_ms: u32,
    /// Last lock/line-clear event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game on a default 14x30 board with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_board(Board::default(), seed)
    }

    /// Create a new game on a board of custom dimensions
    pub fn with_board(board: Board, seed: u64) -> Self {
        Self {
            board,
            active: Piece::initial(),
            rng: StdRng::seed_from_u64(seed),
            seed,
            phase: Phase::Idle,
            score: 0,
            lines: 0,
            game_overs: 0,
            drop_counter_ms: 0,
            drop_interval_ms: DROP_INTERVAL_MS,
            last_event: None,
        }
    }

    /// Override the gravity interval
    pub fn with_drop_interval_ms(mut self, drop_interval_ms: u32) -> Self {
        self.drop_interval_ms = drop_interval_ms;
        self
    }

    /// Leave `Idle`: wipe the board and score and begin accepting ticks and
    /// input. Only the first call has any effect.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        self.board.reset();
        self.score = 0;
        self.lines = 0;
        self.drop_counter_ms = 0;
        self.phase = Phase::Running;
        info!(
            "game started (seed {}, board {}x{})",
            self.seed,
            self.board.width(),
            self.board.height()
        );
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_overs(&self) -> u32 {
        self.game_overs
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions (puzzles, tests)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece without any collision check
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.is_running().then_some(self.active);
        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
        out.game_overs = self.game_overs;
        out.drop_counter_ms = self.drop_counter_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Try to move the active piece; returns false (and changes nothing) on
    /// collision
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let candidate = self.active.moved(dx, dy);
        if collides(&self.board, &candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move down one row without locking on failure
    pub fn move_down(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate clockwise in place; rejected outright on collision
    pub fn rotate(&mut self) -> bool {
        let candidate = self.active.rotated();
        if collides(&self.board, &candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Move down one row, or lock if the piece cannot move.
    ///
    /// Returns the lock event when the piece locked.
    pub fn soft_drop(&mut self) -> Option<LockEvent> {
        if self.move_down() {
            return None;
        }
        Some(self.lock_piece())
    }

    /// Rows the active piece can fall before the next step would collide
    pub fn drop_distance(&self) -> i8 {
        let mut distance: i8 = 0;
        while distance < i8::MAX && !collides(&self.board, &self.active.moved(0, distance + 1)) {
            distance += 1;
        }
        distance
    }

    /// Drop the active piece as far as it goes and lock it.
    ///
    /// Only the rows below the piece are probed, so a piece spawned on top of
    /// existing blocks still falls through to the first blocked step.
    pub fn hard_drop(&mut self) -> LockEvent {
        let distance = self.drop_distance();
        self.active = self.active.moved(0, distance);
        self.lock_piece()
    }

    /// Run the lock sequence: lock, spawn, game-over check, line clear.
    ///
    /// Gravity, soft drop and hard drop all end here, in this order.
    pub fn lock_piece(&mut self) -> LockEvent {
        let locked = self.active;
        if !self.board.lock_piece(&locked) {
            debug!("locked piece at ({}, {}) partly off the board", locked.x, locked.y);
        }

        self.spawn_piece();

        let game_over = self.board.row_has_filled(0);
        if game_over {
            self.game_overs = self.game_overs.wrapping_add(1);
            self.board.reset();
            info!(
                "game over #{}: top row filled, board reset (score {})",
                self.game_overs, self.score
            );
        }

        let cleared = clear_lines(&mut self.board);
        let score_awarded = cleared.score();
        self.score = self.score.saturating_add(score_awarded);
        self.lines = self.lines.saturating_add(cleared.lines);
        if cleared.lines > 0 {
            info!(
                "cleared {} line(s), +{} (score {})",
                cleared.lines, score_awarded, self.score
            );
        }

        let event = LockEvent {
            lines_cleared: cleared.lines,
            score_awarded,
            multiplier: cleared.multiplier,
            game_over,
        };
        self.last_event = Some(event);
        event
    }

    /// Replace the active piece with a random catalog shape at the top row,
    /// in a random column from the left half of the board
    pub fn spawn_piece(&mut self) {
        let (kind, shape) = random_shape(&mut self.rng);
        let span = (self.board.width() / 2).max(1);
        let x = self.rng.gen_range(0..span) as i8;
        self.active = Piece::new(shape, x, 0);
        debug!("spawned {} at ({}, 0)", kind.as_str(), x);
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds the drop interval the piece falls one
    /// row (locking if it cannot) and the counter restarts from zero. Returns
    /// true when a gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_running() {
            return false;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms <= self.drop_interval_ms {
            return false;
        }

        self.soft_drop();
        self.drop_counter_ms = 0;
        true
    }

    /// Apply a player action. Ignored unless the game is running.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.is_running() {
            return false;
        }
        match action {
            GameAction::Rotate => self.rotate(),
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => {
                self.soft_drop();
                true
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{get_shape, Shape};

    fn running(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.start();
        state
    }

    fn fill_row_except(board: &mut Board, y: i8, gap: Option<i8>) {
        for x in 0..board.width() as i8 {
            if Some(x) != gap {
                board.set(x, y, 1);
            }
        }
    }

    fn dot() -> Shape {
        Shape::from_rows(&[&[1]]).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.game_overs, 0);
        assert_eq!(state.drop_interval_ms, DROP_INTERVAL_MS);
        assert_eq!(state.active, Piece::initial());
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_start_resets_board_and_score() {
        let mut state = GameState::new(1);
        state.board.set(3, 3, 1);
        state.score = 50;

        state.start();

        assert!(state.is_running());
        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_start_is_one_shot() {
        let mut state = running(1);
        state.board.set(3, 3, 1);
        state.score = 30;
        state.start();
        assert_eq!(state.board.filled_count(), 1);
        assert_eq!(state.score, 30);
    }

    #[test]
    fn test_idle_ignores_ticks_and_input() {
        let mut state = GameState::new(1);
        assert!(!state.tick(5000));
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::HardDrop));
        assert_eq!(state.active, Piece::initial());
        assert_eq!(state.drop_counter_ms, 0);
    }

    #[test]
    fn test_gravity_needs_strictly_more_than_interval() {
        let mut state = running(1);
        assert!(!state.tick(1000));
        assert_eq!(state.active.y, 5);
        assert!(state.tick(1));
        assert_eq!(state.active.y, 6);
        assert_eq!(state.drop_counter_ms, 0);
    }

    #[test]
    fn test_gravity_accumulates_small_deltas() {
        let mut state = running(1);
        for _ in 0..62 {
            assert!(!state.tick(TICK_MS));
        }
        // 63 * 16 = 1008 > 1000
        assert!(state.tick(TICK_MS));
        assert_eq!(state.active.y, 6);
    }

    #[test]
    fn test_custom_drop_interval() {
        let mut state = GameState::new(1).with_drop_interval_ms(100);
        state.start();
        assert!(state.tick(101));
        assert_eq!(state.active.y, 6);
    }

    #[test]
    fn test_o_piece_falls_to_floor_and_reverts() {
        let mut state = running(1);
        let mut moves = 0;
        while state.move_down() {
            moves += 1;
        }
        assert_eq!(moves, 23);
        assert_eq!(state.active.y, 28);
        assert_eq!(state.active.bottom(), 29);
        assert!(!collides(&state.board, &state.active));
    }

    #[test]
    fn test_gravity_locks_grounded_piece_and_spawns() {
        let mut state = running(1);
        state.active = Piece::new(get_shape(PieceKind::O), 5, 28);

        assert!(state.tick(1001));

        assert_eq!(state.board.get(5, 28), Some(1));
        assert_eq!(state.board.get(6, 29), Some(1));
        assert_eq!(state.active.y, 0);
        assert!(state.active.x < 7);
        assert_eq!(state.drop_counter_ms, 0);
        let event = state.take_last_event().unwrap();
        assert_eq!(event.lines_cleared, 0);
        assert!(!event.game_over);
    }

    #[test]
    fn test_move_left_blocked_by_wall() {
        let mut state = running(1);
        state.active = Piece::new(get_shape(PieceKind::T), 0, 10);
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active.x, 0);
        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active.x, 1);
    }

    #[test]
    fn test_move_blocked_by_filled_cell() {
        let mut state = running(1);
        state.board.set(7, 5, 1);
        // O at (5,5) occupies columns 5..6
        assert!(!state.move_right());
        assert_eq!(state.active.x, 5);
    }

    #[test]
    fn test_rotation_rejected_at_floor() {
        let mut state = running(1);
        let flat_i = Piece::new(get_shape(PieceKind::I), 0, 29);
        state.active = flat_i;
        assert!(!state.apply_action(GameAction::Rotate));
        assert_eq!(state.active, flat_i);
    }

    #[test]
    fn test_rotation_accepted_in_open_space() {
        let mut state = running(1);
        state.active = Piece::new(get_shape(PieceKind::I), 3, 3);
        assert!(state.apply_action(GameAction::Rotate));
        assert_eq!((state.active.shape.rows(), state.active.shape.cols()), (4, 1));
        assert_eq!((state.active.x, state.active.y), (3, 3));
    }

    #[test]
    fn test_soft_drop_moves_then_locks() {
        let mut state = running(1);
        state.active = Piece::new(get_shape(PieceKind::O), 0, 27);
        assert!(state.soft_drop().is_none());
        assert_eq!(state.active.y, 28);
        let event = state.soft_drop().unwrap();
        assert_eq!(event.lines_cleared, 0);
        assert_eq!(state.board.get(0, 29), Some(1));
        assert_eq!(state.active.y, 0);
    }

    #[test]
    fn test_hard_drop_lands_on_stack() {
        let mut state = running(1);
        state.board.set(5, 20, 1);
        state.active = Piece::new(get_shape(PieceKind::O), 5, 0);
        state.apply_action(GameAction::HardDrop);
        assert_eq!(state.board.get(5, 19), Some(1));
        assert_eq!(state.board.get(5, 18), Some(1));
        assert_eq!(state.board.get(6, 19), Some(1));
    }

    #[test]
    fn test_hard_drop_probes_only_rows_below() {
        let mut state = running(1);
        state.board.set(5, 10, 4);
        state.active = Piece::new(dot(), 5, 10);
        assert_eq!(state.drop_distance(), 19);
        state.hard_drop();
        assert_eq!(state.board.get(5, 10), Some(4));
        assert_eq!(state.board.get(5, 29), Some(1));
    }

    #[test]
    fn test_locked_cells_keep_piece_values() {
        let mut state = running(1);
        let shape = Shape::from_rows(&[&[3, 0], &[5, 9]]).unwrap();
        state.active = Piece::new(shape, 2, 0);
        state.hard_drop();
        assert_eq!(state.board.get(2, 28), Some(3));
        assert_eq!(state.board.get(3, 28), Some(0));
        assert_eq!(state.board.get(2, 29), Some(5));
        assert_eq!(state.board.get(3, 29), Some(9));
    }

    #[test]
    fn test_single_line_clear_scores_ten() {
        let mut state = running(1);
        fill_row_except(&mut state.board, 29, Some(0));
        state.active = Piece::new(dot(), 0, 0);

        let event = state.hard_drop();

        assert_eq!(event.lines_cleared, 1);
        assert_eq!(event.score_awarded, 10);
        assert_eq!(event.multiplier, 2);
        assert_eq!(state.score, 10);
        assert_eq!(state.lines, 1);
        assert!(!state.board.row_has_filled(0));
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_double_line_clear_is_not_bonused() {
        let mut state = running(1);
        fill_row_except(&mut state.board, 28, Some(0));
        fill_row_except(&mut state.board, 29, Some(0));
        state.active = Piece::new(get_shape(PieceKind::I).rotated_cw(), 0, 0);

        let event = state.hard_drop();

        assert_eq!(event.lines_cleared, 2);
        assert_eq!(event.score_awarded, 20);
        assert_eq!(event.multiplier, 4);
        assert_eq!(state.score, 20);
        // The two I cells above the cleared rows shifted down.
        assert_eq!(state.board.get(0, 29), Some(1));
        assert_eq!(state.board.get(0, 28), Some(1));
        assert_eq!(state.board.filled_count(), 2);
    }

    #[test]
    fn test_full_top_row_triggers_game_over_and_reset() {
        let mut state = running(1);
        state.score = 40;
        fill_row_except(&mut state.board, 0, None);
        state.board.set(3, 15, 1);

        let event = state.hard_drop();

        assert!(event.game_over);
        assert_eq!(event.lines_cleared, 0);
        assert_eq!(state.game_overs, 1);
        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(state.score, 40);
        assert!(state.is_running());
        assert_eq!(state.active.y, 0);
    }

    #[test]
    fn test_game_continues_after_game_over() {
        let mut state = running(1);
        fill_row_except(&mut state.board, 0, None);
        state.hard_drop();

        let y = state.active.y;
        assert!(state.tick(1001));
        assert_eq!(state.active.y, y + 1);
    }

    #[test]
    fn test_piece_locked_into_top_row_is_game_over() {
        let mut state = running(1);
        for y in 1..30 {
            state.board.set(0, y, 1);
        }
        state.active = Piece::new(dot(), 0, 0);
        let event = state.hard_drop();
        assert!(event.game_over);
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_spawn_column_in_left_half() {
        let mut state = running(99);
        for _ in 0..200 {
            state.spawn_piece();
            assert_eq!(state.active.y, 0);
            assert!((0..7).contains(&state.active.x));
        }
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = running(42);
        let mut b = running(42);
        for _ in 0..20 {
            a.spawn_piece();
            b.spawn_piece();
            assert_eq!(a.active, b.active);
        }
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(3);
        assert!(state.snapshot().active.is_none());

        state.start();
        state.board.set(1, 2, 6);
        let snap = state.snapshot();
        assert_eq!(snap.phase, Phase::Running);
        assert_eq!(snap.active, Some(state.active));
        assert_eq!(snap.cell(1, 2), 6);
        assert_eq!(snap.board.len(), 14 * 30);
    }
}
