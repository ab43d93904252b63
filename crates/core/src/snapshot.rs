//! Render-facing copy of the game state.
//!
//! The render adapter never borrows `GameState`; it reads a snapshot, which can
//! be refilled every frame via
//! [`GameState::snapshot_into`](crate::GameState::snapshot_into) without
//! reallocating.

use crate::piece::Piece;
use crate::types::{Cell, Phase, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major board cells, `width * height` long
    pub board: Vec<Cell>,
    /// The falling piece; None while idle
    pub active: Option<Piece>,
    pub phase: Phase,
    pub score: u32,
    pub lines: u32,
    pub game_overs: u32,
    pub drop_counter_ms: u32,
}

impl GameSnapshot {
    /// Board cell at (x, y); empty when out of range
    pub fn cell(&self, x: u16, y: u16) -> Cell {
        if x >= self.width as u16 || y >= self.height as u16 {
            return EMPTY;
        }
        self.board
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(EMPTY)
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![EMPTY; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
            active: None,
            phase: Phase::Idle,
            score: 0,
            lines: 0,
            game_overs: 0,
            drop_counter_ms: 0,
        }
    }
}
