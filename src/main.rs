//! Terminal exposure game runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! Configuration comes from `LIGHT_CATCHER_*` environment variables; logs go to
//! `LIGHT_CATCHER_LOG_PATH` when set, since the terminal itself is the UI.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use light_catcher::config::GameConfig;
use light_catcher::core::{GameSession, SceneCatalog};
use light_catcher::input::{handle_key_event, should_quit};
use light_catcher::term::{
    view_fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};

/// Full repaint at least this often even when nothing changed.
const REFRESH_INTERVAL_MS: u64 = 1000;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }
    tracing::info!(?config, "starting");

    // Fail before touching the terminal so the error stays readable.
    let catalog = config.load_catalog()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &catalog, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        tracing::warn!(error = %err, "failed to restore terminal");
    }
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, catalog: &SceneCatalog, config: &GameConfig) -> Result<()> {
    let mut session = GameSession::new(catalog, config.locale)?;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(REFRESH_INTERVAL_MS);

    let started = Instant::now();
    let poll_timeout = Duration::from_millis(config.poll_ms);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, view_fingerprint(&session, viewport)) {
            view.render_into(&session, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Wake up at least once per poll interval so the throttle's periodic
        // refresh runs without input.
        if event::poll(poll_timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        tracing::info!(
                            rounds = session.rounds_played(),
                            total_score = session.total_score(),
                            "quit"
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action)?;
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

    }
}
