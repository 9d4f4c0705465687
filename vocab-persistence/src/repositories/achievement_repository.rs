use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::info;
use uuid::Uuid;

use crate::entities::{achievements, prelude::*};
use vocab_core::achievements::AchievementRule;
use vocab_types::{Achievement, AchievementKind, EngineError, EngineResult};

/// Badge store with unlock-once semantics.
///
/// "Unlock if absent" is a single conditional insert bouncing off the
/// `(student_id, achievement_id)` unique index, so concurrent checks
/// cannot double-unlock.
pub struct AchievementRepository {
    db: DatabaseConnection,
}

impl AchievementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_achievement(model: achievements::Model) -> Achievement {
        Achievement {
            id: model.id,
            student_id: model.student_id,
            achievement_id: model.achievement_id,
            name: model.name,
            description: model.description,
            kind: AchievementKind::from_str_or_milestone(&model.kind),
            requirement: model.requirement,
            xp_reward: model.xp_reward,
            unlocked: model.unlocked,
            unlocked_at: model.unlocked_at.with_timezone(&Utc),
        }
    }

    /// Unlock a rule for a student unless already unlocked. Returns
    /// whether this call did the unlocking.
    pub async fn unlock(
        &self,
        student_id: Uuid,
        rule: &AchievementRule,
        now: DateTime<Utc>,
    ) -> EngineResult<bool> {
        let record = achievements::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            achievement_id: Set(rule.id.to_string()),
            name: Set(rule.name.to_string()),
            description: Set(rule.description.to_string()),
            kind: Set(rule.kind.as_str().to_string()),
            requirement: Set(rule.requirement),
            xp_reward: Set(rule.xp_reward()),
            unlocked: Set(true),
            unlocked_at: Set(now.into()),
        };

        let result = Achievements::insert(record)
            .on_conflict(
                OnConflict::columns([
                    achievements::Column::StudentId,
                    achievements::Column::AchievementId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(&self.db)
            .await;

        match result {
            Ok(_) => {
                info!(student_id = %student_id, achievement = rule.id, "achievement unlocked");
                Ok(true)
            }
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(EngineError::store(e)),
        }
    }

    pub async fn find_by_student(&self, student_id: Uuid) -> EngineResult<Vec<Achievement>> {
        let models = Achievements::find()
            .filter(achievements::Column::StudentId.eq(student_id))
            .order_by_asc(achievements::Column::UnlockedAt)
            .all(&self.db)
            .await
            .map_err(EngineError::store)?;

        Ok(models.into_iter().map(Self::model_to_achievement).collect())
    }
}
