//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of [`Cell`] values stored as a flat,
//! row-major vector. Dimensions are fixed at construction.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom, row 0 is the top edge).
//!
//! Every read is bounds-checked. Anything outside the grid, including rows
//! below the floor, reads as filled so that it blocks movement.

use crate::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Piece coordinates are `i8`, so each dimension is capped at 127.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.min(i8::MAX as u8);
        let height = height.min(i8::MAX as u8);
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) blocks a piece: filled, or anywhere off the board.
    pub fn is_cell_filled(&self, x: i8, y: i8) -> bool {
        match self.get(x, y) {
            Some(cell) => cell != EMPTY,
            None => true,
        }
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || y < 0 || x as u8 >= self.width || y as u8 >= self.height
    }

    /// Borrow one row, or None if `y` is past the bottom edge
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|&cell| cell != EMPTY))
    }

    /// Check if a row has at least one filled cell
    pub fn row_has_filled(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().any(|&cell| cell != EMPTY))
    }

    /// Remove row `y` and shift every row above it down by one.
    ///
    /// Row 0 becomes empty; rows below `y` are untouched. Returns false (and
    /// leaves the board alone) if `y` is out of range.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }

        let width = self.width as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(EMPTY);
        true
    }

    /// Clear row `y` only if it is full. A non-full row is left bit-for-bit
    /// unchanged.
    pub fn clear_row_if_full(&mut self, y: usize) -> bool {
        if !self.is_row_full(y) {
            return false;
        }
        self.clear_row(y)
    }

    /// Merge a piece into the board, copying its cell values.
    ///
    /// Cells already filled are overwritten. Cells that fall off the board are
    /// dropped; the return value is false if any were.
    pub fn lock_piece(&mut self, piece: &Piece) -> bool {
        let mut all_on_board = true;
        for ((x, y), value) in piece.cells() {
            all_on_board &= self.set(x, y, value);
        }
        all_on_board
    }

    /// Number of non-empty cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Zero every cell in place
    pub fn reset(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
