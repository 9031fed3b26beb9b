//! Scoring module - line clear points, drop bonuses, level and gravity curves

use crate::types::{
    DROP_STEP_MS, HARD_DROP_POINTS, INITIAL_DROP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_MS,
    SOFT_DROP_POINTS,
};

/// How a piece was moved down by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    Soft,
    Hard,
}

/// Points for clearing `rows` rows at once at `level` (0-based).
/// Counts outside 1..=4 score nothing.
pub fn score_for_clear(rows: usize, level: u32) -> u32 {
    if rows == 0 || rows >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[rows].saturating_mul(level.saturating_add(1))
}

/// Drop bonus
/// soft: +1 per cell, hard: +2 per row travelled
pub fn drop_score(cells: u32, kind: DropKind) -> u32 {
    match kind {
        DropKind::Soft => cells.saturating_mul(SOFT_DROP_POINTS),
        DropKind::Hard => cells.saturating_mul(HARD_DROP_POINTS),
    }
}

/// Level increases every 10 lines cleared
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Automatic descent interval for a level, in milliseconds.
pub fn drop_time_for_level(level: u32) -> u32 {
    INITIAL_DROP_MS
        .saturating_sub(level.saturating_mul(DROP_STEP_MS))
        .max(MIN_DROP_MS)
}
