pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_students_table;
mod m20260101_000002_create_word_progress_table;
mod m20260101_000003_create_practice_sessions_table;
mod m20260101_000004_create_achievements_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_students_table::Migration),
            Box::new(m20260101_000002_create_word_progress_table::Migration),
            Box::new(m20260101_000003_create_practice_sessions_table::Migration),
            Box::new(m20260101_000004_create_achievements_table::Migration),
        ]
    }
}
