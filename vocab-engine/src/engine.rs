//! Library façade over the mastery engine.
//!
//! Ties the pure scheduling/achievement logic to the repositories. One
//! practice UI event maps to one `record_practice` call; finishing a
//! run maps to `record_session` followed by `check_achievements`.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tracing::{debug, info};
use uuid::Uuid;

use vocab_core::achievements::qualifying_rules;
use vocab_persistence::repositories::{
    AchievementRepository, ProgressRepository, SessionRepository, StudentRepository,
};
use vocab_types::{
    Achievement, EngineResult, LeaderboardEntry, PracticeOutcome, PracticeSession, PracticeWord,
    Student, StudentStats, WordProgress,
};

pub struct MasteryEngine {
    progress: ProgressRepository,
    sessions: SessionRepository,
    achievements: AchievementRepository,
    students: StudentRepository,
}

impl MasteryEngine {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            progress: ProgressRepository::new(db.clone()),
            sessions: SessionRepository::new(db.clone()),
            achievements: AchievementRepository::new(db.clone()),
            students: StudentRepository::new(db),
        }
    }

    /// Record one practice attempt for one word.
    pub async fn record_practice(
        &self,
        student_id: Uuid,
        word: &PracticeWord,
        outcome: &PracticeOutcome,
    ) -> EngineResult<WordProgress> {
        self.record_practice_at(student_id, word, outcome, Utc::now())
            .await
    }

    /// Same as [`record_practice`](Self::record_practice) with an
    /// explicit clock, for deterministic scheduling in tests.
    pub async fn record_practice_at(
        &self,
        student_id: Uuid,
        word: &PracticeWord,
        outcome: &PracticeOutcome,
        now: DateTime<Utc>,
    ) -> EngineResult<WordProgress> {
        debug!(student_id = %student_id, english = %word.english, correct = outcome.correct, "practice event");
        self.progress
            .record_practice(student_id, word, outcome, now)
            .await
    }

    /// Persist a finished practice run and credit its XP to the student.
    pub async fn record_session(&self, session: &PracticeSession) -> EngineResult<()> {
        self.sessions.record_session(session).await
    }

    /// Evaluate the rule table against aggregated stats and unlock
    /// anything newly earned. Returns the names unlocked by this call;
    /// a second call with the same stats returns nothing.
    pub async fn check_achievements(
        &self,
        student_id: Uuid,
        stats: &StudentStats,
    ) -> EngineResult<Vec<String>> {
        self.check_achievements_at(student_id, stats, Utc::now())
            .await
    }

    pub async fn check_achievements_at(
        &self,
        student_id: Uuid,
        stats: &StudentStats,
        now: DateTime<Utc>,
    ) -> EngineResult<Vec<String>> {
        let mut unlocked = Vec::new();
        for rule in qualifying_rules(stats) {
            if self.achievements.unlock(student_id, rule, now).await? {
                unlocked.push(rule.name.to_string());
            }
        }

        if !unlocked.is_empty() {
            info!(student_id = %student_id, count = unlocked.len(), "new achievements");
        }
        Ok(unlocked)
    }

    /// Words due for review right now, soonest first.
    pub async fn due_words(&self, student_id: Uuid) -> EngineResult<Vec<WordProgress>> {
        self.due_words_at(student_id, Utc::now()).await
    }

    pub async fn due_words_at(
        &self,
        student_id: Uuid,
        as_of: DateTime<Utc>,
    ) -> EngineResult<Vec<WordProgress>> {
        self.progress.get_due_words(student_id, as_of).await
    }

    /// Every progress record for the student, best mastered first.
    pub async fn student_progress(&self, student_id: Uuid) -> EngineResult<Vec<WordProgress>> {
        self.progress.get_student_progress(student_id).await
    }

    /// Completed sessions, newest first.
    pub async fn session_history(&self, student_id: Uuid) -> EngineResult<Vec<PracticeSession>> {
        self.sessions.find_by_student(student_id).await
    }

    /// Unlocked badges in unlock order.
    pub async fn achievements(&self, student_id: Uuid) -> EngineResult<Vec<Achievement>> {
        self.achievements.find_by_student(student_id).await
    }

    pub async fn leaderboard(&self, limit: u64) -> EngineResult<Vec<LeaderboardEntry>> {
        self.students.get_leaderboard(limit).await
    }

    pub async fn student_rank(&self, student_id: Uuid) -> EngineResult<Option<u32>> {
        self.students.get_student_rank(student_id).await
    }

    pub async fn student(&self, student_id: Uuid) -> EngineResult<Option<Student>> {
        self.students.find_by_id(student_id).await
    }

    /// Register a student row. The aggregate is owned by the wider
    /// application; this exists for bootstrapping and tests.
    pub async fn register_student(&self, id: Uuid, display_name: &str) -> EngineResult<Student> {
        self.students.create_student(id, display_name).await
    }
}
