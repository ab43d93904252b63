//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from the engine, the renderer and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 14 columns (indexed 0-13)
//! - **Height**: 30 rows (indexed 0-29, row 0 is the top)
//! - **Initial piece**: O shape at column 5, row 5
//! - **Spawn row**: 0, column drawn from the left half of the board
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame pacing of the terminal loop (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Gravity: one row per second |
//! | `GAME_OVER_NOTICE_MS` | 1500 | How long the game-over banner stays up |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 6);
//! assert_eq!(PieceKind::J.as_str(), "j");
//!
//! assert_eq!(BOARD_WIDTH, 14);
//! assert_eq!(BOARD_HEIGHT, 30);
//! ```

/// Board width in cells (14 columns)
pub const BOARD_WIDTH: u8 = 14;

/// Board height in cells (30 rows)
pub const BOARD_HEIGHT: u8 = 30;

/// Frame pacing interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval: the drop counter must exceed this before the piece falls
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared row, flat (no multi-line bonus)
pub const SCORE_PER_LINE: u32 = 10;

/// Top-left position (x, y) of the piece a new game begins with
pub const INITIAL_PIECE_POSITION: (i8, i8) = (5, 5);

/// Duration of the non-blocking game-over notice
pub const GAME_OVER_NOTICE_MS: u32 = 1500;

/// Largest extent of a shape grid in either dimension
pub const MAX_SHAPE_DIM: usize = 4;

/// A cell on the game board: 0 is empty, anything else is filled.
///
/// The value is whatever the locking piece carried in that cell.
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// The six piece kinds in the shape catalog
///
/// The catalog is the standard tetromino set without L:
/// - **T**: T-shaped, 2x3
/// - **I**: straight bar, 1x4
/// - **O**: 2x2 square
/// - **S**: S-shaped, 2x3
/// - **Z**: Z-shaped, 2x3 (mirror of S)
/// - **J**: J-shaped, 2x3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    I,
    O,
    S,
    Z,
    J,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::T,
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
    ];

    /// Lowercase name, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
        }
    }
}

/// Lifecycle phase of the controller
///
/// - **Idle**: waiting for the start control; ticks and input are ignored
/// - **Running**: gravity and input are live
///
/// Game over is not a resting phase. It is reported on the [`LockEvent`] that
/// detected it, the board is wiped, and the game stays `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
}

/// Player actions delivered by the input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Rotate piece 90° clockwise (rejected on collision, no kicks)
    Rotate,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Drop piece to the lowest reachable row and lock it
    HardDrop,
}

/// Core-side event emitted after every lock/spawn/clear sequence.
///
/// `multiplier` doubles once per row cleared in the same lock (starting at 1).
/// It is reported for observers only and never feeds into the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_awarded: u32,
    pub multiplier: u32,
    pub game_over: bool,
}
