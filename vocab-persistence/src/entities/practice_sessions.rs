use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "practice_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub session_type: String,
    pub total_words: i32,
    pub correct_answers: i32,
    pub incorrect_answers: i32,
    pub accuracy_rate: f64,
    pub start_time: DateTimeWithTimeZone,
    pub end_time: DateTimeWithTimeZone,
    pub duration_seconds: i32,
    pub xp_earned: i32,
    /// JSON-encoded list of unlocked achievement names
    pub achievements_unlocked: String,
    pub combo_best: i32,
    /// JSON-encoded list of practiced word ids
    pub word_ids: String,
    /// JSON-encoded list of origin lesson session ids
    pub source_session_ids: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
