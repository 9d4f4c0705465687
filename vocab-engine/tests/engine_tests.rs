mod common;

use chrono::{Duration, Utc};
use common::*;
use uuid::Uuid;
use vocab_types::{EngineError, PracticeKind, PracticeSession, StudentStats};

/// The full deterministic flow: three attempts on "cat"/"gato", the
/// due-word check, session recording, and the achievement pass.
#[tokio::test]
async fn test_practice_flow_end_to_end() {
    let (engine, student) = setup_engine_with_student("Maria").await;
    let now = Utc::now();
    let cat = word("cat", "gato");

    let first = engine
        .record_practice_at(student, &cat, &correct(800), now)
        .await
        .unwrap();
    assert_eq!(first.mastery_level, 20);
    assert_eq!(first.interval_days, 1);
    assert_eq!(first.xp_earned, 10);

    let second = engine
        .record_practice_at(student, &cat, &correct(600), now)
        .await
        .unwrap();
    assert_eq!(second.mastery_level, 100);
    assert_eq!(second.interval_days, 6);
    assert!((second.ease_factor - 2.6).abs() < 1e-9);
    assert!((second.average_response_time_ms - 700.0).abs() < 1e-9);

    let third = engine
        .record_practice_at(student, &cat, &incorrect(900), now)
        .await
        .unwrap();
    assert_eq!(third.mastery_level, 67);
    assert_eq!(third.interval_days, 1);
    assert!((third.ease_factor - 2.28).abs() < 1e-9);
    assert_eq!(third.streak_count, 0);
    assert_eq!(third.best_streak, 2);
    assert_eq!(third.xp_earned, 22);

    // Not due yet; due once the 1-day interval passes
    assert!(engine.due_words_at(student, now).await.unwrap().is_empty());
    let due = engine
        .due_words_at(student, now + Duration::days(2))
        .await
        .unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].word_id, "cat-gato");

    // Session wrap-up credits the student's XP aggregate
    let end = now + Duration::seconds(120);
    engine
        .record_session(&PracticeSession {
            id: Uuid::new_v4(),
            student_id: student,
            session_type: PracticeKind::Flashcards,
            total_words: 3,
            correct_answers: 2,
            incorrect_answers: 1,
            accuracy_rate: 67.0,
            start_time: now,
            end_time: end,
            duration_seconds: 120,
            xp_earned: 22,
            achievements_unlocked: vec![],
            combo_best: 2,
            word_ids: vec!["cat-gato".to_string()],
            source_session_ids: None,
        })
        .await
        .unwrap();

    assert_eq!(engine.student(student).await.unwrap().unwrap().total_xp, 22);
    assert_eq!(engine.session_history(student).await.unwrap().len(), 1);

    // Achievement pass for these stats unlocks first_word only, once
    let stats = StudentStats {
        total_words: 1,
        mastered_words: 0,
        streak: 0,
        accuracy: 67.0,
        total_sessions: 1,
    };
    let unlocked = engine.check_achievements(student, &stats).await.unwrap();
    assert_eq!(unlocked, vec!["First Word"]);

    let again = engine.check_achievements(student, &stats).await.unwrap();
    assert!(again.is_empty());
    assert_eq!(engine.achievements(student).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_achievements_unlock_incrementally() {
    let (engine, student) = setup_engine_with_student("Li").await;

    let early = StudentStats {
        total_words: 3,
        mastered_words: 0,
        streak: 0,
        accuracy: 80.0,
        total_sessions: 2,
    };
    assert_eq!(
        engine.check_achievements(student, &early).await.unwrap(),
        vec!["First Word"]
    );

    let later = StudentStats {
        total_words: 12,
        mastered_words: 10,
        streak: 7,
        accuracy: 100.0,
        total_sessions: 9,
    };
    let unlocked = engine.check_achievements(student, &later).await.unwrap();
    assert_eq!(
        unlocked,
        vec![
            "Word Collector",
            "Week Warrior",
            "Perfect Session",
            "Rising Scholar"
        ]
    );

    assert_eq!(engine.achievements(student).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_leaderboard_reflects_session_xp() {
    let engine = setup_engine().await;
    let maria = Uuid::new_v4();
    let li = Uuid::new_v4();
    engine.register_student(maria, "Maria").await.unwrap();
    engine.register_student(li, "Li").await.unwrap();

    let now = Utc::now();
    for (student, xp) in [(maria, 400), (li, 1200)] {
        engine
            .record_session(&PracticeSession {
                id: Uuid::new_v4(),
                student_id: student,
                session_type: PracticeKind::Mixed,
                total_words: 10,
                correct_answers: 10,
                incorrect_answers: 0,
                accuracy_rate: 100.0,
                start_time: now,
                end_time: now + Duration::seconds(300),
                duration_seconds: 300,
                xp_earned: xp,
                achievements_unlocked: vec![],
                combo_best: 10,
                word_ids: vec![],
                source_session_ids: None,
            })
            .await
            .unwrap();
    }

    let board = engine.leaderboard(10).await.unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].display_name, "Li");
    assert_eq!(board[0].rank, 1);
    assert_eq!(board[0].xp, 1200);
    assert_eq!(board[0].level, 2);
    assert_eq!(board[1].display_name, "Maria");
    assert_eq!(board[1].level, 1);

    assert_eq!(engine.student_rank(li).await.unwrap(), Some(1));
    assert_eq!(engine.student_rank(maria).await.unwrap(), Some(2));
}

#[tokio::test]
async fn test_words_from_multiple_sessions_schedule_independently() {
    let (engine, student) = setup_engine_with_student("Omar").await;
    let now = Utc::now();

    let cat = word("cat", "gato");
    let dog = word("dog", "perro");

    engine
        .record_practice_at(student, &cat, &correct(700), now)
        .await
        .unwrap();
    engine
        .record_practice_at(student, &cat, &correct(650), now)
        .await
        .unwrap();
    engine
        .record_practice_at(student, &dog, &incorrect(1100), now)
        .await
        .unwrap();

    // Only dog (1-day interval) is due after two days; cat waits 6 days
    let due = engine
        .due_words_at(student, now + Duration::days(2))
        .await
        .unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].word_id, "dog-perro");

    let all_due = engine
        .due_words_at(student, now + Duration::days(7))
        .await
        .unwrap();
    assert_eq!(all_due.len(), 2);
    assert_eq!(all_due[0].word_id, "dog-perro");

    let progress = engine.student_progress(student).await.unwrap();
    assert_eq!(progress[0].word_id, "cat-gato");
    assert_eq!(progress[0].mastery_level, 100);
    assert_eq!(progress[1].mastery_level, 0);
}

#[tokio::test]
async fn test_session_for_unknown_student_fails_loudly() {
    let engine = setup_engine().await;
    let now = Utc::now();

    let err = engine
        .record_session(&PracticeSession {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            session_type: PracticeKind::Typing,
            total_words: 1,
            correct_answers: 1,
            incorrect_answers: 0,
            accuracy_rate: 100.0,
            start_time: now,
            end_time: now,
            duration_seconds: 0,
            xp_earned: 10,
            achievements_unlocked: vec![],
            combo_best: 1,
            word_ids: vec!["cat-gato".to_string()],
            source_session_ids: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::StudentNotFound { .. }));
}
