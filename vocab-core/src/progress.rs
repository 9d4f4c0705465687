//! Per-word progress arithmetic.
//!
//! Pure create/update logic for [`WordProgress`]; persistence happens
//! in the repository layer. Mastery is a plain rolling accuracy
//! percentage, so it can jump sharply on small sample sizes (the second
//! ever correct answer already yields 100). That behavior is kept as-is
//! for compatibility with existing student data.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use vocab_types::{EngineError, EngineResult, PracticeOutcome, PracticeWord, WordProgress};

use crate::scheduler::{self, INITIAL_EASE_FACTOR, MIN_EASE_FACTOR};

/// XP awarded per correct answer
pub const XP_CORRECT: i32 = 10;

/// XP awarded per incorrect answer
pub const XP_INCORRECT: i32 = 2;

/// Mastery level after a first-ever correct answer
pub const INITIAL_MASTERY_CORRECT: i32 = 20;

/// Deterministic per-word key
pub fn word_id(english: &str, translation: &str) -> String {
    format!("{}-{}", english, translation)
}

/// Build the progress record for the first practice of a word.
pub fn initial_progress(
    student_id: Uuid,
    word: &PracticeWord,
    outcome: &PracticeOutcome,
    now: DateTime<Utc>,
) -> WordProgress {
    let correct = outcome.correct;

    WordProgress {
        id: Uuid::new_v4(),
        student_id,
        word_id: word_id(&word.english, &word.translation),
        english: word.english.clone(),
        translation: word.translation.clone(),
        session_id: word.session_id,
        mastery_level: if correct { INITIAL_MASTERY_CORRECT } else { 0 },
        practice_count: 1,
        correct_count: if correct { 1 } else { 0 },
        incorrect_count: if correct { 0 } else { 1 },
        last_practiced: Some(now),
        next_review: Some(scheduler::due_date(now, 1)),
        interval_days: 1,
        ease_factor: INITIAL_EASE_FACTOR,
        xp_earned: if correct { XP_CORRECT } else { XP_INCORRECT },
        streak_count: if correct { 1 } else { 0 },
        best_streak: if correct { 1 } else { 0 },
        average_response_time_ms: outcome.response_time_ms as f64,
        last_response_time_ms: outcome.response_time_ms,
        created_at: now,
        updated_at: now,
    }
}

/// Apply one practice attempt to an existing progress record.
pub fn apply_practice(progress: &mut WordProgress, outcome: &PracticeOutcome, now: DateTime<Utc>) {
    let quality = scheduler::quality_for(outcome.correct);
    let review = scheduler::next_review(quality, progress.interval_days, progress.ease_factor);

    // Incremental mean over the pre-update attempt count
    let previous_count = progress.practice_count;
    progress.average_response_time_ms = (progress.average_response_time_ms
        * previous_count as f64
        + outcome.response_time_ms as f64)
        / (previous_count + 1) as f64;

    progress.practice_count += 1;
    if outcome.correct {
        progress.correct_count += 1;
        progress.streak_count += 1;
        progress.best_streak = progress.best_streak.max(progress.streak_count);
    } else {
        progress.incorrect_count += 1;
        progress.streak_count = 0;
    }

    progress.mastery_level =
        (100.0 * progress.correct_count as f64 / progress.practice_count as f64).round() as i32;

    progress.xp_earned += if outcome.correct { XP_CORRECT } else { XP_INCORRECT };
    progress.interval_days = review.interval_days;
    progress.ease_factor = review.ease_factor;
    progress.next_review = Some(scheduler::due_date(now, review.interval_days));
    progress.last_practiced = Some(now);
    progress.last_response_time_ms = outcome.response_time_ms;
    progress.updated_at = now;
}

/// Reject inconsistent state before it reaches the store.
pub fn validate(progress: &WordProgress) -> EngineResult<()> {
    if !(0..=100).contains(&progress.mastery_level) {
        return Err(EngineError::validation(
            "mastery_level",
            format!("{} is outside 0-100", progress.mastery_level),
        ));
    }
    if progress.ease_factor < MIN_EASE_FACTOR {
        return Err(EngineError::validation(
            "ease_factor",
            format!("{} is below the 1.3 floor", progress.ease_factor),
        ));
    }
    if progress.interval_days < 1 {
        return Err(EngineError::validation(
            "interval_days",
            format!("{} is below 1", progress.interval_days),
        ));
    }
    if progress.correct_count < 0 || progress.incorrect_count < 0 {
        return Err(EngineError::validation(
            "correct_count",
            "negative answer counter",
        ));
    }
    if progress.practice_count != progress.correct_count + progress.incorrect_count {
        return Err(EngineError::validation(
            "practice_count",
            format!(
                "{} != {} correct + {} incorrect",
                progress.practice_count, progress.correct_count, progress.incorrect_count
            ),
        ));
    }
    if progress.best_streak < progress.streak_count {
        return Err(EngineError::validation(
            "best_streak",
            format!(
                "{} is below current streak {}",
                progress.best_streak, progress.streak_count
            ),
        ));
    }
    Ok(())
}
