use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The externally-owned student aggregate. This engine only adds to
/// `total_xp` (atomic increment) and reads it for ranking.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Student {
    pub id: Uuid,
    pub display_name: String,
    pub total_xp: i64,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeaderboardEntry {
    /// 1-based rank
    pub rank: u32,
    pub student_id: Uuid,
    pub display_name: String,
    pub xp: i64,
    /// `floor(xp / 1000) + 1`
    pub level: i32,
}
