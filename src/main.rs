//! Terminal Blockfall runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `blockfall-term`.
//! The game waits in `Idle` until Enter is pressed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use blockfall::config::Config;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, is_start_key, should_quit};
use blockfall::logging::init_logging;
use blockfall::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    let result = term.session(|term| run(term, &config));
    if let Err(err) = &result {
        error!("exited with error: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = GameState::new(config.seed).with_drop_interval_ms(config.gravity_ms);
    info!(
        "blockfall starting (seed {}, gravity {}ms)",
        game.seed(),
        game.drop_interval_ms()
    );

    let view = GameView::default();
    let mut hud = HudView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into_with_hud(&snap, Some(&hud), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if is_start_key(key) {
                        game.start();
                    } else if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the measured elapsed time.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            game.tick(elapsed_ms);
            hud.advance(elapsed_ms);
        }

        if let Some(event) = game.take_last_event() {
            if event.game_over {
                hud.notify_game_over();
            }
        }
    }
}
