use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use crate::entities::{practice_sessions, prelude::*, students};
use vocab_types::{EngineError, EngineResult, PracticeKind, PracticeSession};

/// Records completed practice runs and feeds the student XP aggregate.
pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_session(model: practice_sessions::Model) -> PracticeSession {
        PracticeSession {
            id: model.id,
            student_id: model.student_id,
            session_type: PracticeKind::from_str_or_mixed(&model.session_type),
            total_words: model.total_words,
            correct_answers: model.correct_answers,
            incorrect_answers: model.incorrect_answers,
            accuracy_rate: model.accuracy_rate,
            start_time: model.start_time.with_timezone(&Utc),
            end_time: model.end_time.with_timezone(&Utc),
            duration_seconds: model.duration_seconds,
            xp_earned: model.xp_earned,
            achievements_unlocked: serde_json::from_str(&model.achievements_unlocked)
                .unwrap_or_default(),
            combo_best: model.combo_best,
            word_ids: serde_json::from_str(&model.word_ids).unwrap_or_default(),
            source_session_ids: model
                .source_session_ids
                .as_deref()
                .and_then(|raw| serde_json::from_str(raw).ok()),
        }
    }

    fn session_to_active(
        session: &PracticeSession,
        created_at: chrono::DateTime<Utc>,
    ) -> EngineResult<practice_sessions::ActiveModel> {
        let achievements = serde_json::to_string(&session.achievements_unlocked)
            .map_err(EngineError::store)?;
        let word_ids = serde_json::to_string(&session.word_ids).map_err(EngineError::store)?;
        let sources = session
            .source_session_ids
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(EngineError::store)?;

        Ok(practice_sessions::ActiveModel {
            id: Set(session.id),
            student_id: Set(session.student_id),
            session_type: Set(session.session_type.as_str().to_string()),
            total_words: Set(session.total_words),
            correct_answers: Set(session.correct_answers),
            incorrect_answers: Set(session.incorrect_answers),
            accuracy_rate: Set(session.accuracy_rate),
            start_time: Set(session.start_time.into()),
            end_time: Set(session.end_time.into()),
            duration_seconds: Set(session.duration_seconds),
            xp_earned: Set(session.xp_earned),
            achievements_unlocked: Set(achievements),
            combo_best: Set(session.combo_best),
            word_ids: Set(word_ids),
            source_session_ids: Set(sources),
            created_at: Set(created_at.into()),
        })
    }

    /// Persist a finished session and add its XP to the student's
    /// aggregate. The XP add is a store-side increment expression, never
    /// a read-then-write, and both writes commit in one transaction.
    pub async fn record_session(&self, session: &PracticeSession) -> EngineResult<()> {
        if session.accuracy_rate < 0.0 || session.accuracy_rate > 100.0 {
            return Err(EngineError::validation(
                "accuracy_rate",
                format!("{} is outside 0-100", session.accuracy_rate),
            ));
        }
        // An abandoned run can leave words unanswered, so the answer
        // counts may fall short of total_words but never exceed it
        if session.correct_answers < 0 || session.incorrect_answers < 0 {
            return Err(EngineError::validation(
                "correct_answers",
                "negative answer counter",
            ));
        }
        if session.correct_answers + session.incorrect_answers > session.total_words {
            return Err(EngineError::validation(
                "total_words",
                "answer counts exceed word count",
            ));
        }

        let now = Utc::now();
        let txn = self.db.begin().await.map_err(EngineError::store)?;

        PracticeSessions::insert(Self::session_to_active(session, now)?)
            .exec(&txn)
            .await
            .map_err(EngineError::store)?;

        let updated = Students::update_many()
            .col_expr(
                students::Column::TotalXp,
                Expr::col(students::Column::TotalXp).add(session.xp_earned as i64),
            )
            .col_expr(
                students::Column::UpdatedAt,
                Expr::value(sea_orm::prelude::DateTimeWithTimeZone::from(now)),
            )
            .filter(students::Column::Id.eq(session.student_id))
            .exec(&txn)
            .await
            .map_err(EngineError::store)?;

        if updated.rows_affected == 0 {
            // Dropping the transaction rolls the session insert back
            return Err(EngineError::StudentNotFound {
                student_id: session.student_id,
            });
        }

        txn.commit().await.map_err(EngineError::store)?;

        info!(
            student_id = %session.student_id,
            session_id = %session.id,
            xp = session.xp_earned,
            "recorded practice session"
        );
        Ok(())
    }

    /// Session history for one student, newest first.
    pub async fn find_by_student(&self, student_id: Uuid) -> EngineResult<Vec<PracticeSession>> {
        let models = PracticeSessions::find()
            .filter(practice_sessions::Column::StudentId.eq(student_id))
            .order_by_desc(practice_sessions::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(EngineError::store)?;

        Ok(models.into_iter().map(Self::model_to_session).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use chrono::Duration;
    use migration::{Migrator, MigratorTrait};

    async fn setup_test_db() -> SessionRepository {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SessionRepository::new(db)
    }

    async fn insert_student(repo: &SessionRepository, name: &str, xp: i64) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        Students::insert(students::ActiveModel {
            id: Set(id),
            display_name: Set(name.to_string()),
            total_xp: Set(xp),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        })
        .exec(&repo.db)
        .await
        .unwrap();
        id
    }

    fn session_for(student_id: Uuid, xp: i32) -> PracticeSession {
        let end = Utc::now();
        PracticeSession {
            id: Uuid::new_v4(),
            student_id,
            session_type: PracticeKind::Flashcards,
            total_words: 3,
            correct_answers: 2,
            incorrect_answers: 1,
            accuracy_rate: 67.0,
            start_time: end - Duration::seconds(90),
            end_time: end,
            duration_seconds: 90,
            xp_earned: xp,
            achievements_unlocked: vec!["First Word".to_string()],
            combo_best: 2,
            word_ids: vec!["cat-gato".to_string(), "dog-perro".to_string()],
            source_session_ids: None,
        }
    }

    #[tokio::test]
    async fn test_record_session_persists_and_adds_xp() {
        let repo = setup_test_db().await;
        let student = insert_student(&repo, "Maria", 40).await;

        repo.record_session(&session_for(student, 22)).await.unwrap();

        let stored = repo.find_by_student(student).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].xp_earned, 22);
        assert_eq!(stored[0].word_ids, vec!["cat-gato", "dog-perro"]);
        assert_eq!(stored[0].achievements_unlocked, vec!["First Word"]);

        let row = Students::find_by_id(student)
            .one(&repo.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.total_xp, 62);
    }

    #[tokio::test]
    async fn test_xp_accumulates_across_sessions() {
        let repo = setup_test_db().await;
        let student = insert_student(&repo, "Maria", 0).await;

        repo.record_session(&session_for(student, 10)).await.unwrap();
        repo.record_session(&session_for(student, 30)).await.unwrap();

        let row = Students::find_by_id(student)
            .one(&repo.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.total_xp, 40);
        assert_eq!(repo.find_by_student(student).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_student_rolls_everything_back() {
        let repo = setup_test_db().await;
        let ghost = Uuid::new_v4();

        let err = repo.record_session(&session_for(ghost, 10)).await.unwrap_err();
        assert!(matches!(err, EngineError::StudentNotFound { .. }));

        // The session insert must not survive the failed XP update
        assert!(repo.find_by_student(ghost).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_accuracy_is_rejected_before_write() {
        let repo = setup_test_db().await;
        let student = insert_student(&repo, "Maria", 0).await;

        let mut session = session_for(student, 10);
        session.accuracy_rate = 140.0;

        let err = repo.record_session(&session).await.unwrap_err();
        assert!(matches!(err, EngineError::Validation { .. }));
        assert!(repo.find_by_student(student).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_abandoned_run_with_unanswered_words_is_accepted() {
        let repo = setup_test_db().await;
        let student = insert_student(&repo, "Maria", 0).await;

        // 5 words dealt, run abandoned after 3 answers
        let mut session = session_for(student, 10);
        session.total_words = 5;

        repo.record_session(&session).await.unwrap();

        let stored = repo.find_by_student(student).await.unwrap();
        assert_eq!(stored[0].total_words, 5);
        assert_eq!(stored[0].correct_answers, 2);
        assert_eq!(stored[0].incorrect_answers, 1);
    }

    #[tokio::test]
    async fn test_answers_exceeding_word_count_are_rejected() {
        let repo = setup_test_db().await;
        let student = insert_student(&repo, "Maria", 0).await;

        let mut session = session_for(student, 10);
        session.total_words = 2;

        let err = repo.record_session(&session).await.unwrap_err();
        assert!(matches!(err, EngineError::Validation { .. }));
        assert!(repo.find_by_student(student).await.unwrap().is_empty());
    }
}
