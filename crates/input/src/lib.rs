//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`], plus the two
//! controls that live outside the engine: start and quit.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_start_key, should_quit};
