//! Scoring module - line clear points and gravity speed
//!
//! A lock that clears `n` rows (n >= 1) is worth `25 + 2^n * 100`, awarded once
//! per lock. Gravity speeds up by one tick every 500 points, down to a floor.

use crate::types::{
    INITIAL_TICKS_PER_DROP, LINE_CLEAR_BASE_SCORE, LINE_CLEAR_UNIT_SCORE, MIN_TICKS_PER_DROP,
    SCORE_PER_SPEED_STEP,
};

/// Points for a single lock that cleared `lines` rows
pub fn line_clear_score(lines: usize) -> u32 {
    if lines == 0 {
        return 0;
    }
    LINE_CLEAR_BASE_SCORE + (1u32 << lines) * LINE_CLEAR_UNIT_SCORE
}

/// Ticks between gravity steps at the given score
pub fn ticks_per_drop(score: u32) -> u32 {
    INITIAL_TICKS_PER_DROP
        .saturating_sub(score / SCORE_PER_SPEED_STEP)
        .max(MIN_TICKS_PER_DROP)
}

/// Level shown to the player (starts at 1)
pub fn level(score: u32) -> u32 {
    1 + score / SCORE_PER_SPEED_STEP
}
