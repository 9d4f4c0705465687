use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Achievements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Achievements::StudentId).uuid().not_null())
                    .col(
                        ColumnDef::new(Achievements::AchievementId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Achievements::Name).string().not_null())
                    .col(ColumnDef::new(Achievements::Description).string().not_null())
                    .col(ColumnDef::new(Achievements::Kind).string().not_null())
                    .col(ColumnDef::new(Achievements::Requirement).integer().not_null())
                    .col(ColumnDef::new(Achievements::XpReward).integer().not_null())
                    .col(
                        ColumnDef::new(Achievements::Unlocked)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Achievements::UnlockedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Unlock-once: one row per (student, achievement)
        manager
            .create_index(
                Index::create()
                    .name("idx_achievements_student_achievement")
                    .table(Achievements::Table)
                    .col(Achievements::StudentId)
                    .col(Achievements::AchievementId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Achievements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
    StudentId,
    AchievementId,
    Name,
    Description,
    Kind,
    Requirement,
    XpReward,
    Unlocked,
    UnlockedAt,
}
