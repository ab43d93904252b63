//! Pieces module - shape catalog and matrix rotation
//!
//! Shapes are small 0/1 grids (at most 4x4) in their canonical orientation.
//! Rotation is a plain clockwise matrix rotation with no kick table: the
//! controller either accepts the rotated grid in place or rejects it.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::types::{Cell, PieceKind, EMPTY, MAX_SHAPE_DIM};

/// Offset (dx, dy) of one filled cell relative to the shape's top-left corner
pub type CellOffset = (i8, i8);

/// Filled-cell offsets of a shape; never allocates
pub type CellOffsets = ArrayVec<CellOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

type Grid = [[Cell; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];

/// An immutable shape grid.
///
/// Cells outside `rows x cols` are always empty, so two shapes compare equal
/// exactly when their visible grids do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: Grid,
}

impl Shape {
    const fn from_grid(rows: u8, cols: u8, cells: Grid) -> Self {
        Self { rows, cols, cells }
    }

    /// Build a shape from row slices.
    ///
    /// Returns None for an empty or ragged grid, or one larger than 4x4.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let dot = Shape::from_rows(&[&[1]]).unwrap();
    /// assert_eq!((dot.rows(), dot.cols()), (1, 1));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[Cell]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE_DIM || width == 0 || width > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [[EMPTY; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            cells[y][..width].copy_from_slice(row);
        }
        Some(Self::from_grid(height as u8, width as u8, cells))
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Cell value at column `x`, row `y`; empty outside the grid
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.cols as usize || y >= self.rows as usize {
            return EMPTY;
        }
        self.cells[y][x]
    }

    /// Offsets and values of all filled cells, row by row
    pub fn filled(&self) -> ArrayVec<(CellOffset, Cell), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }> {
        let mut out = ArrayVec::new();
        for y in 0..self.rows as usize {
            for x in 0..self.cols as usize {
                let value = self.cells[y][x];
                if value != EMPTY {
                    out.push(((x as i8, y as i8), value));
                }
            }
        }
        out
    }

    /// Offsets of all filled cells, row by row
    pub fn offsets(&self) -> CellOffsets {
        self.filled().into_iter().map(|(offset, _)| offset).collect()
    }

    /// Rotate the grid 90° clockwise.
    ///
    /// Dimensions swap; new row `y` is old column `y` read bottom to top.
    pub fn rotated_cw(&self) -> Self {
        let old_rows = self.rows as usize;
        let mut cells = [[EMPTY; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, new_row) in cells.iter_mut().enumerate().take(self.cols as usize) {
            for (k, slot) in new_row.iter_mut().enumerate().take(old_rows) {
                *slot = self.cells[old_rows - 1 - k][y];
            }
        }
        Self::from_grid(self.cols, self.rows, cells)
    }
}

const T_SHAPE: Shape = Shape::from_grid(2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const I_SHAPE: Shape = Shape::from_grid(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);
const O_SHAPE: Shape = Shape::from_grid(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const S_SHAPE: Shape = Shape::from_grid(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const Z_SHAPE: Shape = Shape::from_grid(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);
const J_SHAPE: Shape = Shape::from_grid(2, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);

/// Canonical shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => T_SHAPE,
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
    }
}

/// Uniformly pick a kind from the catalog and return it with its shape
pub fn random_shape<R: Rng + ?Sized>(rng: &mut R) -> (PieceKind, Shape) {
    let kind = PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())];
    (kind, get_shape(kind))
}
