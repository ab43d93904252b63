use blockfall::core::{GameSnapshot, GameState};
use blockfall::term::{FrameBuffer, GameView, HudView, Rgb, Viewport};

// 14x30 board, cells 2x1, plus border => 30x32 frame.
const FRAME_W: u16 = 30;
const FRAME_H: u16 = 32;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn running_snapshot() -> GameSnapshot {
    let mut gs = GameState::new(1);
    gs.start();
    gs.snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(FRAME_W, FRAME_H));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(FRAME_W - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, FRAME_H - 1).unwrap().ch, '└');
    assert_eq!(fb.get(FRAME_W - 1, FRAME_H - 1).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = running_snapshot();
    snap.board[29 * 14] = 1;
    snap.active = None;

    let fb = GameView::default().render(&snap, Viewport::new(FRAME_W, FRAME_H));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let y0 = 1 + 29;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(3, y0).unwrap().ch, ' ');
}

#[test]
fn term_view_colors_active_piece_apart_from_locked_cells() {
    let mut snap = running_snapshot();
    snap.board[29 * 14] = 1;

    let fb = GameView::default().render(&snap, Viewport::new(FRAME_W, FRAME_H));

    // Initial O piece at (5,5).
    let active = fb.get(1 + 5 * 2, 1 + 5).unwrap();
    let locked = fb.get(1, 1 + 29).unwrap();
    assert_eq!(active.ch, '█');
    assert_eq!(active.style.fg, Rgb::ACTIVE);
    assert_eq!(locked.style.fg, Rgb::LOCKED);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = running_snapshot();
    snap.score = 1234;
    snap.lines = 10;
    snap.game_overs = 2;

    let fb = GameView::default().render(&snap, Viewport::new(60, FRAME_H));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LINES"));
    assert!(all.contains("GAME OVERS"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = running_snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(FRAME_W + 4, FRAME_H));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_prompts_for_start_while_idle() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(FRAME_W, FRAME_H));
    assert!(screen_text(&fb).contains("PRESS ENTER"));
}

#[test]
fn term_view_shows_game_over_notice_from_hud() {
    let snap = running_snapshot();
    let view = GameView::default();
    let mut hud = HudView::default();

    let fb = view.render_with_hud(&snap, Some(&hud), Viewport::new(FRAME_W, FRAME_H));
    assert!(!screen_text(&fb).contains("GAME OVER"));

    hud.notify_game_over();
    let fb = view.render_with_hud(&snap, Some(&hud), Viewport::new(FRAME_W, FRAME_H));
    assert!(screen_text(&fb).contains("GAME OVER"));
    assert!(!screen_text(&fb).contains("PRESS ENTER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(FRAME_W, FRAME_H + 8));

    // start_y = 8 / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_handles_custom_board_sizes() {
    let mut snap = GameSnapshot {
        width: 4,
        height: 3,
        board: vec![0; 12],
        ..GameSnapshot::default()
    };
    snap.board[11] = 1;

    let fb = GameView::default().render(&snap, Viewport::new(10, 5));
    assert_eq!(fb.get(9, 4).unwrap().ch, '┘');
    assert_eq!(fb.get(7, 3).unwrap().ch, '█');
    assert_eq!(fb.get(8, 3).unwrap().ch, '█');
}
