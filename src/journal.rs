//! JSON-lines event journal.
//!
//! One record per line: `start` when a game begins, `lock` for every locked
//! piece and `game_over` when the next piece cannot enter play. A write
//! failure turns the journal off; the host reports it once via
//! [`Journal::failure`] after leaving raw mode.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{GameSession, LockEvent};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    Start {
        t_ms: u64,
        seed: u32,
    },
    Lock {
        t_ms: u64,
        piece: &'static str,
        rows_cleared: Vec<usize>,
        line_clear_score: u32,
        drop_score: u32,
        level_up: bool,
        score: u32,
        level: u32,
        lines: u32,
    },
    GameOver {
        t_ms: u64,
        score: u32,
        level: u32,
        lines: u32,
    },
}

impl JournalRecord {
    /// Build a `lock` record from the event and the session that produced it.
    pub fn lock<R>(t_ms: u64, event: &LockEvent, session: &GameSession<R>) -> Self {
        JournalRecord::Lock {
            t_ms,
            piece: event.kind.as_str(),
            rows_cleared: event.rows_cleared.to_vec(),
            line_clear_score: event.line_clear_score,
            drop_score: event.drop_score,
            level_up: event.level_up,
            score: session.score(),
            level: session.level(),
            lines: session.lines(),
        }
    }

    pub fn game_over<R>(t_ms: u64, session: &GameSession<R>) -> Self {
        JournalRecord::GameOver {
            t_ms,
            score: session.score(),
            level: session.level(),
            lines: session.lines(),
        }
    }
}

pub struct Journal<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
    failure: Option<String>,
}

impl Journal<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow!("journal: open {} failed: {}", path, e))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Journal for `path`, or a disabled one when no path is configured.
    pub fn from_path(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::open(p),
            None => Ok(Self::disabled()),
        }
    }
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
            failure: None,
        }
    }

    /// A journal that drops every record.
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
            failure: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Write one record. Errors disable the journal instead of propagating.
    pub fn record(&mut self, rec: &JournalRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        let res = serde_json::to_writer(&mut self.buf, rec)
            .map_err(io::Error::from)
            .and_then(|_| {
                self.buf.push(b'\n');
                out.write_all(&self.buf)
            });
        if let Err(e) = res {
            self.fail(format!("write failed: {}", e));
        }
    }

    /// Record whatever the latest transition produced: a lock, and a game
    /// over if that lock ended the game.
    pub fn record_transition<R>(&mut self, t_ms: u64, session: &GameSession<R>) {
        let Some(event) = session.last_event() else {
            return;
        };
        self.record(&JournalRecord::lock(t_ms, event, session));
        if event.game_over {
            self.record(&JournalRecord::game_over(t_ms, session));
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if let Err(e) = out.flush() {
                self.fail(format!("flush failed: {}", e));
            }
        }
    }

    fn fail(&mut self, msg: String) {
        self.out = None;
        self.failure = Some(msg);
    }

    /// Why the journal turned itself off, if it did.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Print the failure, if any, with the `[journal]` prefix.
    pub fn report(&self) {
        if let Some(msg) = self.failure() {
            eprintln!("[journal] {}; journal disabled", msg);
        }
    }

    /// Give back the writer, if still enabled.
    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}
