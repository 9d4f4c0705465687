mod common;

use chrono::Utc;
use common::*;
use uuid::Uuid;
use vocab_core::{apply_practice, initial_progress, qualifying_rules, validate};
use vocab_types::StudentStats;

#[test]
fn test_three_attempt_scenario() {
    let now = Utc::now();
    let student = Uuid::new_v4();

    // correct 800ms, correct 600ms, incorrect 900ms
    let mut progress = initial_progress(student, &cat_gato(), &correct(800), now);
    assert_eq!(progress.mastery_level, 20);
    assert_eq!(progress.interval_days, 1);

    apply_practice(&mut progress, &correct(600), now);
    assert_eq!(progress.mastery_level, 100);
    assert_eq!(progress.interval_days, 6);
    assert!((progress.ease_factor - 2.6).abs() < 1e-9);
    assert!((progress.average_response_time_ms - 700.0).abs() < 1e-9);

    apply_practice(&mut progress, &incorrect(900), now);
    assert_eq!(progress.mastery_level, 67);
    assert_eq!(progress.interval_days, 1);
    assert!((progress.ease_factor - 2.28).abs() < 1e-9);
    assert_eq!(progress.streak_count, 0);
    assert_eq!(progress.best_streak, 2);
    assert_eq!(progress.xp_earned, 22);
    assert_eq!(progress.next_review, Some(now + chrono::Duration::days(1)));

    validate(&progress).unwrap();
}

#[test]
fn test_long_success_run_keeps_invariants() {
    let now = Utc::now();
    let attempts: Vec<(bool, i32)> = (0..30).map(|i| (true, 500 + i)).collect();

    let progress = run_attempts(Uuid::new_v4(), &word("dog", "perro"), &attempts, now);

    assert_eq!(progress.mastery_level, 100);
    assert_eq!(progress.streak_count, 30);
    assert_eq!(progress.best_streak, 30);
    // No interval ceiling: repeated successes keep growing the cadence,
    // far past chrono's representable date range; the due date pins to
    // the calendar's far end rather than failing the update
    assert!(progress.interval_days > 365);
    assert!(progress.next_review.unwrap() > now);
    validate(&progress).unwrap();
}

#[test]
fn test_alternating_answers_keep_interval_resetting() {
    let now = Utc::now();
    let attempts: Vec<(bool, i32)> = (0..20).map(|i| (i % 2 == 0, 700)).collect();

    let progress = run_attempts(Uuid::new_v4(), &word("sun", "sol"), &attempts, now);

    // Last attempt is incorrect, so cadence is back to tomorrow
    assert_eq!(progress.interval_days, 1);
    assert_eq!(progress.streak_count, 0);
    assert_eq!(progress.mastery_level, 50);
    validate(&progress).unwrap();
}

#[test]
fn test_scenario_stats_unlock_first_word_only() {
    let stats = StudentStats {
        total_words: 1,
        mastered_words: 0,
        streak: 0,
        accuracy: 67.0,
        total_sessions: 1,
    };

    let names: Vec<&str> = qualifying_rules(&stats).iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["First Word"]);
}
