use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use crate::entities::{prelude::*, word_progress};
use vocab_core::progress::{apply_practice, initial_progress, validate, word_id};
use vocab_types::{EngineError, EngineResult, PracticeOutcome, PracticeWord, WordProgress};

/// Word-progress store adapter.
///
/// All writes run inside a transaction with an optimistic guard on
/// `practice_count`, so a concurrent practice of the same word from
/// another tab or device surfaces as `ConcurrencyConflict` instead of a
/// silent lost update.
pub struct ProgressRepository {
    db: DatabaseConnection,
}

impl ProgressRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_progress(model: word_progress::Model) -> WordProgress {
        WordProgress {
            id: model.id,
            student_id: model.student_id,
            word_id: model.word_id,
            english: model.english,
            translation: model.translation,
            session_id: model.session_id,
            mastery_level: model.mastery_level,
            practice_count: model.practice_count,
            correct_count: model.correct_count,
            incorrect_count: model.incorrect_count,
            last_practiced: model.last_practiced.map(|t| t.with_timezone(&Utc)),
            next_review: model.next_review.map(|t| t.with_timezone(&Utc)),
            interval_days: model.interval_days,
            ease_factor: model.ease_factor,
            xp_earned: model.xp_earned,
            streak_count: model.streak_count,
            best_streak: model.best_streak,
            average_response_time_ms: model.average_response_time_ms,
            last_response_time_ms: model.last_response_time_ms,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    fn progress_to_active(progress: &WordProgress) -> word_progress::ActiveModel {
        word_progress::ActiveModel {
            id: Set(progress.id),
            student_id: Set(progress.student_id),
            word_id: Set(progress.word_id.clone()),
            english: Set(progress.english.clone()),
            translation: Set(progress.translation.clone()),
            session_id: Set(progress.session_id),
            mastery_level: Set(progress.mastery_level),
            practice_count: Set(progress.practice_count),
            correct_count: Set(progress.correct_count),
            incorrect_count: Set(progress.incorrect_count),
            last_practiced: Set(progress.last_practiced.map(Into::into)),
            next_review: Set(progress.next_review.map(Into::into)),
            interval_days: Set(progress.interval_days),
            ease_factor: Set(progress.ease_factor),
            xp_earned: Set(progress.xp_earned),
            streak_count: Set(progress.streak_count),
            best_streak: Set(progress.best_streak),
            average_response_time_ms: Set(progress.average_response_time_ms),
            last_response_time_ms: Set(progress.last_response_time_ms),
            created_at: Set(progress.created_at.into()),
            updated_at: Set(progress.updated_at.into()),
        }
    }

    /// Record one practice attempt, creating the progress record on the
    /// first attempt and mutating it afterwards. Returns the state as
    /// written.
    pub async fn record_practice(
        &self,
        student_id: Uuid,
        word: &PracticeWord,
        outcome: &PracticeOutcome,
        now: DateTime<Utc>,
    ) -> EngineResult<WordProgress> {
        let key = word_id(&word.english, &word.translation);

        let txn = self.db.begin().await.map_err(EngineError::store)?;

        let existing = WordProgressRecords::find()
            .filter(word_progress::Column::StudentId.eq(student_id))
            .filter(word_progress::Column::WordId.eq(key.as_str()))
            .one(&txn)
            .await
            .map_err(EngineError::store)?;

        let progress = match existing {
            Some(model) => {
                let expected_count = model.practice_count;
                let mut progress = Self::model_to_progress(model);
                apply_practice(&mut progress, outcome, now);
                validate(&progress)?;

                let result = WordProgressRecords::update(Self::progress_to_active(&progress))
                    .filter(word_progress::Column::PracticeCount.eq(expected_count))
                    .exec(&txn)
                    .await;
                match result {
                    Ok(_) => {}
                    // The row moved under us between read and write
                    Err(DbErr::RecordNotUpdated) => {
                        return Err(EngineError::conflict("word_progress", key));
                    }
                    Err(e) => return Err(EngineError::store(e)),
                }
                progress
            }
            None => {
                let progress = initial_progress(student_id, word, outcome, now);
                validate(&progress)?;

                let result = WordProgressRecords::insert(Self::progress_to_active(&progress))
                    .on_conflict(
                        OnConflict::columns([
                            word_progress::Column::StudentId,
                            word_progress::Column::WordId,
                        ])
                        .do_nothing()
                        .to_owned(),
                    )
                    .exec(&txn)
                    .await;
                match result {
                    Ok(_) => {}
                    // Another session created the record concurrently
                    Err(DbErr::RecordNotInserted) => {
                        return Err(EngineError::conflict("word_progress", key));
                    }
                    Err(e) => return Err(EngineError::store(e)),
                }
                progress
            }
        };

        txn.commit().await.map_err(EngineError::store)?;

        debug!(
            student_id = %student_id,
            word_id = %progress.word_id,
            mastery = progress.mastery_level,
            interval_days = progress.interval_days,
            "recorded practice"
        );
        Ok(progress)
    }

    pub async fn find_by_student_and_word(
        &self,
        student_id: Uuid,
        word_id: &str,
    ) -> EngineResult<Option<WordProgress>> {
        let model = WordProgressRecords::find()
            .filter(word_progress::Column::StudentId.eq(student_id))
            .filter(word_progress::Column::WordId.eq(word_id))
            .one(&self.db)
            .await
            .map_err(EngineError::store)?;

        Ok(model.map(Self::model_to_progress))
    }

    /// Records due for review at `as_of`, soonest first. `as_of` is a
    /// parameter so callers (and tests) control the clock.
    pub async fn get_due_words(
        &self,
        student_id: Uuid,
        as_of: DateTime<Utc>,
    ) -> EngineResult<Vec<WordProgress>> {
        let as_of: sea_orm::prelude::DateTimeWithTimeZone = as_of.into();
        let models = WordProgressRecords::find()
            .filter(word_progress::Column::StudentId.eq(student_id))
            .filter(word_progress::Column::NextReview.lte(as_of))
            .order_by_asc(word_progress::Column::NextReview)
            .all(&self.db)
            .await
            .map_err(EngineError::store)?;

        Ok(models.into_iter().map(Self::model_to_progress).collect())
    }

    /// Every progress record for the student, best-known words first.
    pub async fn get_student_progress(&self, student_id: Uuid) -> EngineResult<Vec<WordProgress>> {
        let models = WordProgressRecords::find()
            .filter(word_progress::Column::StudentId.eq(student_id))
            .order_by_desc(word_progress::Column::MasteryLevel)
            .all(&self.db)
            .await
            .map_err(EngineError::store)?;

        Ok(models.into_iter().map(Self::model_to_progress).collect())
    }
}
