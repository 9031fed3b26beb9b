//! Blockfall terminal runner.
//!
//! `blockfall` plays interactively; `blockfall autoplay` plays headless and
//! prints a JSON summary.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::autoplay;
use blockfall::config::{parse_args, Command, HostConfig};
use blockfall::core::{DropScheduler, GameSession, GameSnapshot, SimpleRng};
use blockfall::input::{action_for_key, should_quit};
use blockfall::journal::{Journal, JournalRecord};
use blockfall::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use blockfall::types::GameAction;

/// Repaint at least this often even when nothing changed.
const IDLE_REPAINT_MS: u64 = 1000;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;
    let config = HostConfig::from_env();
    let seed = command.seed().unwrap_or(config.seed);
    let mut journal = Journal::from_path(config.log_path.as_deref())?;

    match command {
        Command::Autoplay { pieces, .. } => {
            let summary = autoplay::run_with_journal(seed, pieces, &mut journal);
            journal.report();
            println!("{}", serde_json::to_string(&summary)?);
            Ok(())
        }
        Command::Play { .. } => {
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &config, seed, &mut journal);

            // Always try to restore terminal state.
            let _ = term.exit();
            journal.report();
            let session = result?;
            eprintln!(
                "[blockfall] seed={} score={} level={} lines={}",
                seed,
                session.score(),
                session.level(),
                session.lines()
            );
            Ok(())
        }
    }
}

fn run(
    term: &mut TerminalRenderer,
    config: &HostConfig,
    seed: u32,
    journal: &mut Journal,
) -> Result<GameSession> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;
    let poll = Duration::from_millis(u64::from(config.frame_ms));

    let mut session = GameSession::new(SimpleRng::new(seed));
    let mut scheduler = DropScheduler::new();
    scheduler.start(now_ms());
    journal.record(&JournalRecord::Start {
        t_ms: now_ms(),
        seed,
    });

    let view = GameView::default();
    let mut throttle = RenderThrottle::new(IDLE_REPAINT_MS);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        if event::poll(poll)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = action_for_key(key) {
                        session = session.apply(action);
                        if action == GameAction::Restart {
                            scheduler.restart(now_ms());
                            journal.record(&JournalRecord::Start {
                                t_ms: now_ms(),
                                seed,
                            });
                        } else {
                            journal.record_transition(now_ms(), &session);
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        let now = now_ms();
        let halted = session.is_paused() || session.is_game_over();
        if scheduler.on_frame(now, halted, session.drop_time_ms()) {
            session = session.drop_tick();
            journal.record_transition(now, &session);
        }

        session.snapshot_into(&mut snap);
        if throttle.should_render(now, snap.fingerprint()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }

    scheduler.stop();
    journal.flush();
    Ok(session)
}
