//! Terminal block game (default binary).
//!
//! Renders with the framebuffer renderer, polls the keyboard until the next
//! tick, and feeds both key presses and drop-timer ticks through one
//! `Session` so every transition is applied in order.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blocks::core::{RandomPieces, Session};
use tui_blocks::input::{handle_key_event, is_mute_toggle, should_quit};
use tui_blocks::term::{FrameBuffer, GameView, Hud, TerminalFeedback, TerminalRenderer, Viewport};
use tui_blocks::{logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if logging::init(&config)? {
        for warning in config.warnings() {
            log::warn!("{warning}");
        }
    }
    log::info!(
        "starting: seed={:?} base_drop={}ms decay={} tick={}ms muted={}",
        config.seed,
        config.cadence.base_ms,
        config.cadence.decay,
        config.tick_ms,
        config.muted
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let restored = term.exit();
    match &result {
        Ok(()) => log::info!("shutdown"),
        Err(err) => log::error!("shutdown after error: {err:#}"),
    }
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let pieces = match config.seed {
        Some(seed) => RandomPieces::seeded(seed),
        None => RandomPieces::from_entropy(),
    };
    let mut session = Session::new(pieces, config.cadence);
    let mut feedback = TerminalFeedback::new(config.muted);

    let view = GameView::default();
    let mut frame = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = Hud {
            muted: feedback.is_muted(),
            flash: feedback.flash(),
        };
        view.render_into(session.state(), &hud, Viewport::new(w, h), &mut frame);
        term.present(&frame)?;
        if feedback.take_bell() {
            term.bell()?;
        }

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_mute_toggle(key) {
                        feedback.toggle_mute();
                    } else if let Some(action) = handle_key_event(key) {
                        session.dispatch(action, &mut feedback);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            session.tick(ms, &mut feedback);
            feedback.decay(ms);
        }
    }
}
