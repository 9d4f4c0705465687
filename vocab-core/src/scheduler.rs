//! SM-2 derived review scheduling.
//!
//! Simplified quality model: the engine only ever supplies 5 (correct)
//! or 2 (incorrect), never intermediate recall grades.

use chrono::{DateTime, Duration, Utc};

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Ease factor assigned to a word on first practice
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// Interval after the first successful review of a 1-day card
pub const SECOND_INTERVAL_DAYS: i32 = 6;

/// Quality signal for a correct answer
pub const QUALITY_CORRECT: i32 = 5;

/// Quality signal for an incorrect answer
pub const QUALITY_INCORRECT: i32 = 2;

/// Result of calculating the next review
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewOutcome {
    pub interval_days: i32,
    pub ease_factor: f64,
}

/// Calculate the next review interval and ease factor.
///
/// The ease update `EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02))`
/// applies to failures as well as successes, then clamps at 1.3.
/// Failures reset the interval to 1 day; the first successful review of
/// a 1-day card jumps to 6 days; later successes multiply by the new
/// ease factor. No upper bound is enforced on the interval.
pub fn next_review(quality: i32, previous_interval_days: i32, ease_factor: f64) -> ReviewOutcome {
    let quality = quality.clamp(0, 5);

    let miss = (5 - quality) as f64;
    let ease_factor = (ease_factor + (0.1 - miss * (0.08 + miss * 0.02))).max(MIN_EASE_FACTOR);

    let interval_days = if quality < 3 {
        1
    } else if previous_interval_days == 1 {
        SECOND_INTERVAL_DAYS
    } else {
        (previous_interval_days as f64 * ease_factor).round() as i32
    };

    ReviewOutcome {
        interval_days,
        ease_factor,
    }
}

/// Map a practice result to the simplified quality signal
pub fn quality_for(correct: bool) -> i32 {
    if correct {
        QUALITY_CORRECT
    } else {
        QUALITY_INCORRECT
    }
}

/// When a card with the given interval becomes due again.
///
/// Long success runs grow the interval past chrono's representable
/// range well before the i32 limit, so the addition must not use the
/// panicking `Add` impl. Out-of-range dates pin to the calendar's far
/// end, which keeps the card "never due soon" as intended.
pub fn due_date(now: DateTime<Utc>, interval_days: i32) -> DateTime<Utc> {
    now.checked_add_signed(Duration::days(interval_days as i64))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
