//! Scoring module - line clearing and points
//!
//! Scoring is flat: every cleared row is worth [`SCORE_PER_LINE`] no matter
//! how many rows clear together. A per-lock doubling multiplier is tracked
//! alongside and reported, but it never reaches the score.

use crate::board::Board;
use crate::types::SCORE_PER_LINE;

/// Outcome of one line-clear pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClear {
    pub lines: u32,
    /// Starts at 1 and doubles per cleared row. Informational only.
    pub multiplier: u32,
}

impl LineClear {
    pub fn score(&self) -> u32 {
        line_clear_score(self.lines)
    }
}

/// Points for clearing `lines` rows in one lock
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(SCORE_PER_LINE)
}

/// Clear every full row from the bottom up, stopping short of row 0.
///
/// Row 0 is never cleared here even when full; a full top row is the
/// game-over condition instead. After clearing row `y` the same index is
/// examined again, since the row above has just shifted into it.
pub fn clear_lines(board: &mut Board) -> LineClear {
    let mut result = LineClear {
        lines: 0,
        multiplier: 1,
    };

    let mut y = (board.height() as usize).saturating_sub(1);
    while y > 0 {
        if board.is_row_full(y) {
            board.clear_row(y);
            result.lines += 1;
            result.multiplier = result.multiplier.saturating_mul(2);
            continue;
        }
        y -= 1;
    }

    result
}
