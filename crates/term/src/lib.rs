//! Terminal render adapter.
//!
//! Renders a [`core::GameSnapshot`] into a framebuffer of styled character
//! cells, then flushes only the changed runs to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so layout can be unit-tested without a terminal
//! - Draw each board cell 2 chars wide to offset the tall terminal glyph aspect

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
