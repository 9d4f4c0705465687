use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub type StudentId = Uuid;

/// Practice activity that produced a result, both for individual words
/// and for whole sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PracticeKind {
    Flashcards,
    Matching,
    Typing,
    Mixed,
}

impl PracticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PracticeKind::Flashcards => "flashcards",
            PracticeKind::Matching => "matching",
            PracticeKind::Typing => "typing",
            PracticeKind::Mixed => "mixed",
        }
    }

    pub fn from_str_or_mixed(value: &str) -> Self {
        match value {
            "flashcards" => PracticeKind::Flashcards,
            "matching" => PracticeKind::Matching,
            "typing" => PracticeKind::Typing,
            _ => PracticeKind::Mixed,
        }
    }
}

/// A vocabulary word as presented during practice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PracticeWord {
    pub english: String,
    pub translation: String,
    /// Lesson session the word was drawn from, if any
    pub session_id: Option<Uuid>,
}

/// Outcome of a single practice attempt on one word.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PracticeOutcome {
    pub correct: bool,
    pub response_time_ms: i32,
    pub practice_type: PracticeKind,
}

/// Per-student, per-word spaced-repetition state.
///
/// Created on the first practice of a word and mutated on every
/// subsequent attempt; never deleted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordProgress {
    pub id: Uuid,
    pub student_id: StudentId,
    /// Deterministic key: `english + "-" + translation`
    pub word_id: String,
    pub english: String,
    pub translation: String,
    pub session_id: Option<Uuid>,
    /// Rolling accuracy percentage, 0-100
    pub mastery_level: i32,
    pub practice_count: i32,
    pub correct_count: i32,
    pub incorrect_count: i32,
    #[ts(type = "string | null")]
    pub last_practiced: Option<DateTime<Utc>>,
    #[ts(type = "string | null")]
    pub next_review: Option<DateTime<Utc>>,
    pub interval_days: i32,
    /// SM-2 difficulty multiplier, never below 1.3
    pub ease_factor: f64,
    pub xp_earned: i32,
    pub streak_count: i32,
    pub best_streak: i32,
    pub average_response_time_ms: f64,
    pub last_response_time_ms: i32,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}
