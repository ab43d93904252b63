//! Styled character grid shared by the view and the renderer.
//!
//! `GameView` paints into a `FrameBuffer`; `TerminalRenderer` diffs two of
//! them. Coordinates are terminal columns and rows, and writes that land
//! outside the grid are dropped, so drawing code never clips by hand.

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Cells already locked into the board
    pub const LOCKED: Rgb = Rgb::new(220, 60, 60);
    /// The falling piece
    pub const ACTIVE: Rgb = Rgb::new(70, 110, 240);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    /// Light grey on black, no attributes
    pub const PLAIN: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK);

    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

const STAT_VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::PLAIN,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    /// Row-major, `width * height` long
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// A blank grid of the given size
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the dimensions. A same-size call is free and the allocation is
    /// reused when shrinking. Call `clear` before redrawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) == (width, height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::BLANK);
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        let i = self.offset(x, y)?;
        self.cells.get(i).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.offset(x, y).and_then(|i| self.cells.get_mut(i)) {
            *slot = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `text` left to right from (x, y); the part past the right edge
    /// is dropped.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        for (cx, ch) in (x..self.width).zip(text.chars()) {
            self.put_char(cx, y, ch, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for cy in y..y.saturating_add(h) {
            for cx in x..x.saturating_add(w) {
                self.put_char(cx, cy, ch, style);
            }
        }
    }

    /// Paint one board cell as a solid `w x h` block of `fg` on black.
    pub fn block(&mut self, x: u16, y: u16, w: u16, h: u16, fg: Rgb) {
        self.fill_rect(x, y, w, h, '█', CellStyle::new(fg, Rgb::BLACK).bold());
    }

    /// Write a number in decimal without allocating. Returns the digit count.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, &d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, d as char, style);
        }
        len as u16
    }

    /// A bold label with its counter on the row below.
    pub fn stat(&mut self, x: u16, y: u16, label: &str, value: u32) {
        self.put_str(x, y, label, CellStyle::PLAIN.bold());
        self.put_u32(x, y.saturating_add(1), value, STAT_VALUE);
    }

    /// Collect one row as a string (tests, debugging)
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}
