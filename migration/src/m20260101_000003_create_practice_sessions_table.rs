use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PracticeSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PracticeSessions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PracticeSessions::StudentId).uuid().not_null())
                    .col(
                        ColumnDef::new(PracticeSessions::SessionType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PracticeSessions::TotalWords)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PracticeSessions::CorrectAnswers)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PracticeSessions::IncorrectAnswers)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PracticeSessions::AccuracyRate)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PracticeSessions::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PracticeSessions::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PracticeSessions::DurationSeconds)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PracticeSessions::XpEarned)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PracticeSessions::AchievementsUnlocked)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PracticeSessions::ComboBest)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(PracticeSessions::WordIds).text().not_null())
                    .col(ColumnDef::new(PracticeSessions::SourceSessionIds).text())
                    .col(
                        ColumnDef::new(PracticeSessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index on (student_id, created_at) for history queries
        manager
            .create_index(
                Index::create()
                    .name("idx_practice_sessions_student")
                    .table(PracticeSessions::Table)
                    .col(PracticeSessions::StudentId)
                    .col(PracticeSessions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PracticeSessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PracticeSessions {
    Table,
    Id,
    StudentId,
    SessionType,
    TotalWords,
    CorrectAnswers,
    IncorrectAnswers,
    AccuracyRate,
    StartTime,
    EndTime,
    DurationSeconds,
    XpEarned,
    AchievementsUnlocked,
    ComboBest,
    WordIds,
    SourceSessionIds,
    CreatedAt,
}
