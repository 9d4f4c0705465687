use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "word_progress")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub word_id: String,
    pub english: String,
    pub translation: String,
    pub session_id: Option<Uuid>,
    pub mastery_level: i32,
    pub practice_count: i32,
    pub correct_count: i32,
    pub incorrect_count: i32,
    pub last_practiced: Option<DateTimeWithTimeZone>,
    pub next_review: Option<DateTimeWithTimeZone>,
    pub interval_days: i32,
    pub ease_factor: f64,
    pub xp_earned: i32,
    pub streak_count: i32,
    pub best_streak: i32,
    pub average_response_time_ms: f64,
    pub last_response_time_ms: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
