use migration::{Migrator, MigratorTrait};
use uuid::Uuid;
use vocab_engine::MasteryEngine;
use vocab_persistence::connection::connect_to_memory_database;
use vocab_types::{PracticeKind, PracticeOutcome, PracticeWord};

/// Engine over a fresh in-memory database with migrations applied
pub async fn setup_engine() -> MasteryEngine {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let db = connect_to_memory_database().await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    MasteryEngine::new(db)
}

pub async fn setup_engine_with_student(name: &str) -> (MasteryEngine, Uuid) {
    let engine = setup_engine().await;
    let id = Uuid::new_v4();
    engine.register_student(id, name).await.unwrap();
    (engine, id)
}

pub fn word(english: &str, translation: &str) -> PracticeWord {
    PracticeWord {
        english: english.to_string(),
        translation: translation.to_string(),
        session_id: None,
    }
}

pub fn correct(response_time_ms: i32) -> PracticeOutcome {
    PracticeOutcome {
        correct: true,
        response_time_ms,
        practice_type: PracticeKind::Flashcards,
    }
}

pub fn incorrect(response_time_ms: i32) -> PracticeOutcome {
    PracticeOutcome {
        correct: false,
        response_time_ms,
        practice_type: PracticeKind::Flashcards,
    }
}
