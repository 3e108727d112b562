//! Terminal Tetris runner (default binary).
//!
//! Wires the collaborators together: crossterm keys become actions in a
//! bounded queue, a step clock adds gravity steps, and the queue is drained
//! into the session one action at a time. Every frame is rendered from a
//! fresh snapshot into a reused framebuffer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use log::{info, warn};

use rialo_tetris::config::RunConfig;
use rialo_tetris::engine::{GameSession, GameSnapshot};
use rialo_tetris::input::{handle_key_event, should_quit, ActionQueue, StepClock};
use rialo_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use rialo_tetris::types::GameAction;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    let _logger = init_logging(&config)?;
    info!("starting: seed={} step={}ms", config.seed, config.step_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        warn!("exiting with error: {err:#}");
    }
    result
}

/// File logging only; stdout and stderr belong to the renderer.
fn init_logging(config: &RunConfig) -> Result<Option<LoggerHandle>> {
    let Some(dir) = &config.log_dir else {
        return Ok(None);
    };
    let handle = Logger::try_with_str(&config.log_spec)?
        .log_to_file(FileSpec::default().directory(dir).basename("rialo-tetris"))
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;
    Ok(Some(handle))
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut session = GameSession::new(config.game_config())?;
    let view = GameView::default();
    let mut clock = StepClock::new(config.step_ms);
    let mut queue = ActionQueue::new();

    let mut snapshot = GameSnapshot::default();
    let mut frame = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut frame);
        term.draw(&frame)?;

        // Input with timeout until the next step is due.
        if event::poll(Duration::from_millis(clock.remaining_ms()))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit requested, final score {}", session.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        queue.push(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity. Only whole milliseconds are consumed so nothing drifts.
        let elapsed_ms = u64::try_from(last_tick.elapsed().as_millis()).unwrap_or(u64::MAX);
        last_tick += Duration::from_millis(elapsed_ms);
        let due = clock.advance(elapsed_ms);
        if !session.is_game_over() {
            for _ in 0..due {
                queue.push(GameAction::Step);
            }
        }

        let mut restarted = false;
        queue.drain_into(|action| {
            restarted |= action == GameAction::Restart;
            session.apply_action(action);
        });
        if restarted {
            clock.reset();
        }
    }
}
