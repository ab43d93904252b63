//! GameView: paints a `core::GameSnapshot` into a `FrameBuffer`.
//!
//! Nothing here touches the terminal, so layout is tested on plain buffers.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{EMPTY, GAME_OVER_NOTICE_MS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Host-side state shown on top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    /// Remaining time of the game-over notice; 0 when not shown
    pub game_over_notice_ms: u32,
}

impl HudView {
    /// Begin showing the game-over notice
    pub fn notify_game_over(&mut self) {
        self.game_over_notice_ms = GAME_OVER_NOTICE_MS;
    }

    /// Count the notice down by `elapsed_ms`
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.game_over_notice_ms = self.game_over_notice_ms.saturating_sub(elapsed_ms);
    }

    pub fn showing_game_over(&self) -> bool {
        self.game_over_notice_ms > 0
    }
}

/// Board cell width in terminal columns; 2x1 offsets the tall glyph aspect.
const CELL_W: u16 = 2;
/// Board cell height in terminal rows.
const CELL_H: u16 = 1;

/// Draws the board centered in the viewport with a stats panel to its right.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_hud(snap, None, viewport, fb);
    }

    pub fn render_into_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: Option<&HudView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let layout = BoardLayout::centered(snap, viewport);
        let well = CellStyle::new(Rgb::new(80, 80, 90), Rgb::BLACK);
        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.w - 2,
            layout.h - 2,
            ' ',
            well,
        );
        draw_frame(fb, &layout);

        for y in 0..snap.height as u16 {
            for x in 0..snap.width as u16 {
                if snap.cell(x, y) != EMPTY {
                    layout.block(fb, x, y, Rgb::LOCKED);
                }
            }
        }

        if let Some(active) = snap.active {
            for ((x, y), _) in active.cells() {
                let on_board =
                    x >= 0 && y >= 0 && (x as u8) < snap.width && (y as u8) < snap.height;
                if on_board {
                    layout.block(fb, x as u16, y as u16, Rgb::ACTIVE);
                }
            }
        }

        draw_stats(fb, snap, viewport, &layout);

        let banner = if !snap.playable() {
            Some("PRESS ENTER")
        } else if hud.is_some_and(HudView::showing_game_over) {
            Some("GAME OVER")
        } else {
            None
        };
        if let Some(text) = banner {
            draw_banner(fb, &layout, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_hud(snap, None, viewport)
    }

    pub fn render_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: Option<&HudView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_hud(snap, hud, viewport, &mut fb);
        fb
    }
}

/// Outer rectangle of the board including its border.
#[derive(Debug, Clone, Copy)]
struct BoardLayout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl BoardLayout {
    fn centered(snap: &GameSnapshot, viewport: Viewport) -> Self {
        let w = (snap.width as u16) * CELL_W + 2;
        let h = (snap.height as u16) * CELL_H + 2;
        Self {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Paint board cell (x, y) inside the border.
    fn block(&self, fb: &mut FrameBuffer, x: u16, y: u16, fg: Rgb) {
        fb.block(
            self.x + 1 + x * CELL_W,
            self.y + 1 + y * CELL_H,
            CELL_W,
            CELL_H,
            fg,
        );
    }
}

fn draw_frame(fb: &mut FrameBuffer, layout: &BoardLayout) {
    let BoardLayout { x, y, w, h } = *layout;
    let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
    let (right, bottom) = (x + w - 1, y + h - 1);

    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

/// Counters and key help to the right of the board; skipped on narrow
/// terminals.
fn draw_stats(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: &BoardLayout) {
    let px = layout.x.saturating_add(layout.w).saturating_add(2);
    if viewport.width.saturating_sub(px) < 12 {
        return;
    }

    let help = CellStyle::PLAIN.dim();

    let mut y = layout.y;
    for (label, value) in [
        ("SCORE", snap.score),
        ("LINES", snap.lines),
        ("GAME OVERS", snap.game_overs),
    ] {
        fb.stat(px, y, label, value);
        y = y.saturating_add(3);
    }

    for line in KEY_HELP {
        if y >= viewport.height {
            break;
        }
        fb.put_str(px, y, line, help);
        y = y.saturating_add(1);
    }
}

const KEY_HELP: [&str; 6] = [
    "←→  move",
    "↑   rotate",
    "↓   drop",
    "SPC hard drop",
    "ENT start",
    "q   quit",
];

fn draw_banner(fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
    let len = text.chars().count() as u16;
    let x = layout.x.saturating_add(layout.w.saturating_sub(len) / 2);
    let y = layout.y.saturating_add(layout.h / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::BLACK).bold();
    fb.put_str(x, y, text, style);
}
