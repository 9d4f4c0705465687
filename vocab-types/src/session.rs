use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::PracticeKind;

/// A completed practice run, recorded once when the run ends and
/// immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PracticeSession {
    pub id: Uuid,
    pub student_id: Uuid,
    pub session_type: PracticeKind,
    pub total_words: i32,
    pub correct_answers: i32,
    pub incorrect_answers: i32,
    /// Percentage, 0-100
    pub accuracy_rate: f64,
    #[ts(type = "string")]
    pub start_time: DateTime<Utc>,
    #[ts(type = "string")]
    pub end_time: DateTime<Utc>,
    pub duration_seconds: i32,
    pub xp_earned: i32,
    pub achievements_unlocked: Vec<String>,
    pub combo_best: i32,
    pub word_ids: Vec<String>,
    /// Lesson sessions the practiced words were drawn from
    pub source_session_ids: Option<Vec<Uuid>>,
}
