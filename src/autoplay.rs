//! Headless automated play.
//!
//! A second seeded generator picks, for every piece, a rotation count and a
//! horizontal shift; the piece is then hard-dropped. No search, no look-ahead:
//! this exists to exercise the engine end to end and to make reproducible
//! journals, not to play well.

use std::io::Write;

use serde::Serialize;

use crate::core::{GameSession, RandomSource, SimpleRng};
use crate::journal::{Journal, JournalRecord};
use crate::types::BOARD_WIDTH;

/// Outcome of one automated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoplaySummary {
    pub seed: u32,
    pub pieces: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

pub fn run(seed: u32, max_pieces: u32) -> AutoplaySummary {
    let mut journal: Journal<std::io::Sink> = Journal::disabled();
    run_with_journal(seed, max_pieces, &mut journal)
}

/// Play until game over or `max_pieces` locks, journaling as interactive play does.
///
/// `t_ms` in journal records counts locked pieces, since there is no clock.
pub fn run_with_journal<W: Write>(
    seed: u32,
    max_pieces: u32,
    journal: &mut Journal<W>,
) -> AutoplaySummary {
    let mut session = GameSession::new(SimpleRng::new(seed));
    // Derived so the planner stream differs from the piece stream.
    let mut planner = SimpleRng::new(seed.rotate_left(16) ^ 0x9E37_79B9);
    let mut pieces = 0u32;

    journal.record(&JournalRecord::Start { t_ms: 0, seed });

    while !session.is_game_over() && pieces < max_pieces {
        let turns = planner.next_range(4);
        let span = u32::from(BOARD_WIDTH) + 1;
        let shift = planner.next_range(span) as i32 - (span as i32) / 2;

        for _ in 0..turns {
            session = session.rotate();
        }
        for _ in 0..shift.unsigned_abs() {
            session = if shift < 0 {
                session.move_left()
            } else {
                session.move_right()
            };
        }
        session = session.hard_drop();

        if session.last_event().is_some() {
            pieces += 1;
            journal.record_transition(u64::from(pieces), &session);
        }
    }
    journal.flush();

    AutoplaySummary {
        seed,
        pieces,
        score: session.score(),
        level: session.level(),
        lines: session.lines(),
        game_over: session.is_game_over(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_game() {
        assert_eq!(run(7, 60), run(7, 60));
    }

    #[test]
    fn stops_at_piece_limit_or_game_over() {
        let s = run(3, 10);
        assert!(s.pieces <= 10);
        assert!(s.pieces == 10 || s.game_over);
        // The first hard drop onto an empty board always scores.
        assert!(s.score > 0);
    }

    #[test]
    fn zero_pieces_returns_fresh_summary() {
        let s = run(11, 0);
        assert_eq!(s.pieces, 0);
        assert_eq!(s.score, 0);
        assert!(!s.game_over);
    }

    #[test]
    fn journal_gets_start_and_one_lock_per_piece() {
        let mut j = Journal::new(Vec::new());
        let s = run_with_journal(5, 8, &mut j);
        let text = String::from_utf8(j.into_inner().unwrap()).unwrap();
        let locks = text.lines().filter(|l| l.contains("\"type\":\"lock\"")).count();
        assert!(text.starts_with("{\"type\":\"start\""));
        assert_eq!(locks as u32, s.pieces);
    }
}
