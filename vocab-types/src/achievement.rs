use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Milestone,
    Streak,
    Mastery,
    Speed,
    Accuracy,
}

impl AchievementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementKind::Milestone => "milestone",
            AchievementKind::Streak => "streak",
            AchievementKind::Mastery => "mastery",
            AchievementKind::Speed => "speed",
            AchievementKind::Accuracy => "accuracy",
        }
    }

    pub fn from_str_or_milestone(value: &str) -> Self {
        match value {
            "streak" => AchievementKind::Streak,
            "mastery" => AchievementKind::Mastery,
            "speed" => AchievementKind::Speed,
            "accuracy" => AchievementKind::Accuracy,
            _ => AchievementKind::Milestone,
        }
    }
}

/// An unlocked badge for one student. Uniqueness per
/// `(student_id, achievement_id)` is enforced by the store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Achievement {
    pub id: Uuid,
    pub student_id: Uuid,
    /// Stable slug, e.g. "first_word"
    pub achievement_id: String,
    pub name: String,
    pub description: String,
    pub kind: AchievementKind,
    pub requirement: i32,
    pub xp_reward: i32,
    pub unlocked: bool,
    #[ts(type = "string")]
    pub unlocked_at: DateTime<Utc>,
}

/// Aggregated practice statistics evaluated against the achievement
/// rule table. Explicit named fields rather than a loose stats bag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StudentStats {
    pub total_words: i32,
    pub mastered_words: i32,
    pub streak: i32,
    /// Percentage, 0-100
    pub accuracy: f64,
    pub total_sessions: i32,
}
