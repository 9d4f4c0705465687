use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WordProgress::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WordProgress::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WordProgress::StudentId).uuid().not_null())
                    .col(ColumnDef::new(WordProgress::WordId).string().not_null())
                    .col(ColumnDef::new(WordProgress::English).string().not_null())
                    .col(ColumnDef::new(WordProgress::Translation).string().not_null())
                    .col(ColumnDef::new(WordProgress::SessionId).uuid())
                    .col(
                        ColumnDef::new(WordProgress::MasteryLevel)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WordProgress::PracticeCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WordProgress::CorrectCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WordProgress::IncorrectCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(WordProgress::LastPracticed).timestamp_with_time_zone())
                    .col(ColumnDef::new(WordProgress::NextReview).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(WordProgress::IntervalDays)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(WordProgress::EaseFactor)
                            .double()
                            .not_null()
                            .default(2.5),
                    )
                    .col(
                        ColumnDef::new(WordProgress::XpEarned)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WordProgress::StreakCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WordProgress::BestStreak)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WordProgress::AverageResponseTimeMs)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WordProgress::LastResponseTimeMs)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WordProgress::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WordProgress::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The unique index backing the per-student, per-word upsert
        manager
            .create_index(
                Index::create()
                    .name("idx_word_progress_student_word")
                    .table(WordProgress::Table)
                    .col(WordProgress::StudentId)
                    .col(WordProgress::WordId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index on (student_id, next_review) for due-word queries
        manager
            .create_index(
                Index::create()
                    .name("idx_word_progress_next_review")
                    .table(WordProgress::Table)
                    .col(WordProgress::StudentId)
                    .col(WordProgress::NextReview)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WordProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WordProgress {
    Table,
    Id,
    StudentId,
    WordId,
    English,
    Translation,
    SessionId,
    MasteryLevel,
    PracticeCount,
    CorrectCount,
    IncorrectCount,
    LastPracticed,
    NextReview,
    IntervalDays,
    EaseFactor,
    XpEarned,
    StreakCount,
    BestStreak,
    AverageResponseTimeMs,
    LastResponseTimeMs,
    CreatedAt,
    UpdatedAt,
}
