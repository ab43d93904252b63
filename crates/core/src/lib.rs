//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state management. It has no
//! dependencies on rendering, terminals or I/O, which makes it:
//!
//! - **Deterministic**: the same seed produces the same spawn sequence
//! - **Testable**: every rule can be exercised without a screen
//! - **Portable**: the terminal binary is just one host
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with bounds-safe reads and row clearing
//! - [`pieces`]: the six-shape catalog and clockwise matrix rotation
//! - [`piece`]: the active piece and its candidate moves
//! - [`collision`]: the collision query
//! - [`scoring`]: bottom-up line clearing and flat scoring
//! - [`game_state`]: the controller tying it all together
//! - [`snapshot`]: render-facing state copies
//!
//! # Game Rules
//!
//! - Gravity moves the piece one row once more than 1000ms has accumulated
//! - Rotation is clockwise, in place, and simply refused on collision
//! - A piece that cannot move down locks; a new random piece spawns at the top
//! - Each full row (except the top one) clears for 10 points
//! - If the top row holds anything after a lock, that is game over: the board
//!   is wiped, the score is kept and play goes on
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.active().y, 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) with the real time
//! elapsed since the previous call. Frame rate does not affect fall speed.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::GameState;
pub use piece::Piece;
pub use pieces::{get_shape, random_shape, Shape};
pub use scoring::{clear_lines, line_clear_score, LineClear};
pub use snapshot::GameSnapshot;
