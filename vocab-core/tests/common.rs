use chrono::{DateTime, Utc};
use uuid::Uuid;
use vocab_core::{apply_practice, initial_progress};
use vocab_types::{PracticeKind, PracticeOutcome, PracticeWord, WordProgress};

/// Creates the scenario word used throughout the practice-flow tests
pub fn cat_gato() -> PracticeWord {
    word("cat", "gato")
}

pub fn word(english: &str, translation: &str) -> PracticeWord {
    PracticeWord {
        english: english.to_string(),
        translation: translation.to_string(),
        session_id: None,
    }
}

pub fn correct(response_time_ms: i32) -> PracticeOutcome {
    PracticeOutcome {
        correct: true,
        response_time_ms,
        practice_type: PracticeKind::Flashcards,
    }
}

pub fn incorrect(response_time_ms: i32) -> PracticeOutcome {
    PracticeOutcome {
        correct: false,
        response_time_ms,
        practice_type: PracticeKind::Flashcards,
    }
}

/// Runs a sequence of attempts against one word, creating the record on
/// the first attempt. `true` means a correct answer.
pub fn run_attempts(
    student_id: Uuid,
    word: &PracticeWord,
    attempts: &[(bool, i32)],
    now: DateTime<Utc>,
) -> WordProgress {
    let mut iter = attempts.iter();
    let (first_correct, first_rt) = iter.next().expect("at least one attempt");
    let first = if *first_correct {
        correct(*first_rt)
    } else {
        incorrect(*first_rt)
    };

    let mut progress = initial_progress(student_id, word, &first, now);
    for (was_correct, rt) in iter {
        let outcome = if *was_correct {
            correct(*rt)
        } else {
            incorrect(*rt)
        };
        apply_practice(&mut progress, &outcome, now);
    }
    progress
}
