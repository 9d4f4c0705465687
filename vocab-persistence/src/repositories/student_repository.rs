use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::entities::{prelude::*, students};
use vocab_core::leveling::level_for_xp;
use vocab_types::{EngineError, EngineResult, LeaderboardEntry, Student};

/// Read side of the externally-owned student aggregate, plus the
/// leaderboard ranking queries.
pub struct StudentRepository {
    db: DatabaseConnection,
}

impl StudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_student(model: students::Model) -> Student {
        Student {
            id: model.id,
            display_name: model.display_name,
            total_xp: model.total_xp,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> EngineResult<Option<Student>> {
        let model = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(EngineError::store)?;

        Ok(model.map(Self::model_to_student))
    }

    pub async fn create_student(&self, id: Uuid, display_name: &str) -> EngineResult<Student> {
        let now = Utc::now();
        let record = students::ActiveModel {
            id: Set(id),
            display_name: Set(display_name.to_string()),
            total_xp: Set(0),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        Students::insert(record)
            .exec(&self.db)
            .await
            .map_err(EngineError::store)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| EngineError::store("failed to retrieve created student"))
    }

    /// Students by XP descending, 1-based rank, truncated to `limit`.
    pub async fn get_leaderboard(&self, limit: u64) -> EngineResult<Vec<LeaderboardEntry>> {
        let models = Students::find()
            .order_by_desc(students::Column::TotalXp)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(EngineError::store)?;

        Ok(models
            .into_iter()
            .enumerate()
            .map(|(index, model)| LeaderboardEntry {
                rank: (index + 1) as u32,
                student_id: model.id,
                display_name: model.display_name,
                xp: model.total_xp,
                level: level_for_xp(model.total_xp),
            })
            .collect())
    }

    pub async fn get_student_rank(&self, student_id: Uuid) -> EngineResult<Option<u32>> {
        let student = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(EngineError::store)?;

        if let Some(model) = student {
            let students_above = Students::find()
                .filter(students::Column::TotalXp.gt(model.total_xp))
                .count(&self.db)
                .await
                .map_err(EngineError::store)?;

            Ok(Some(students_above as u32 + 1))
        } else {
            Ok(None)
        }
    }
}
