//! Collision engine
//!
//! A single pure query over borrowed board and piece data. Everything off the
//! board counts as an obstacle: both side walls, the floor, and rows above the
//! top edge.

use crate::board::Board;
use crate::piece::Piece;

/// True if any filled cell of `piece` lands on a filled or off-board cell.
pub fn collides(board: &Board, piece: &Piece) -> bool {
    piece
        .cells()
        .iter()
        .any(|&((x, y), _)| board.is_cell_filled(x, y))
}
