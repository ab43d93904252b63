//! Active piece - a shape placed on the board by its top-left corner
//!
//! Pieces are small `Copy` values. Moving or rotating never mutates in place:
//! [`Piece::moved`] and [`Piece::rotated`] return a candidate that the
//! controller validates with [`collides`](crate::collision::collides) and
//! either commits or drops.

use arrayvec::ArrayVec;

use crate::pieces::{get_shape, Shape};
use crate::types::{Cell, PieceKind, INITIAL_PIECE_POSITION, MAX_SHAPE_DIM};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    /// Board column of the shape's left edge
    pub x: i8,
    /// Board row of the shape's top edge
    pub y: i8,
}

impl Piece {
    pub fn new(shape: Shape, x: i8, y: i8) -> Self {
        Self { shape, x, y }
    }

    /// The piece every new game starts with: an O at (5, 5)
    pub fn initial() -> Self {
        let (x, y) = INITIAL_PIECE_POSITION;
        Self::new(get_shape(PieceKind::O), x, y)
    }

    /// Candidate piece shifted by (dx, dy)
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Candidate piece with its shape rotated 90° clockwise about the same
    /// top-left corner
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Absolute board positions and values of the filled cells
    pub fn cells(&self) -> ArrayVec<((i8, i8), Cell), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }> {
        self.shape
            .filled()
            .into_iter()
            .map(|((dx, dy), value)| {
                (
                    (self.x.saturating_add(dx), self.y.saturating_add(dy)),
                    value,
                )
            })
            .collect()
    }

    /// Board row of the lowest filled cell
    pub fn bottom(&self) -> i8 {
        self.cells()
            .iter()
            .map(|&((_, y), _)| y)
            .max()
            .unwrap_or(self.y)
    }
}
