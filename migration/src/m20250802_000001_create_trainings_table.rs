use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trainings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Trainings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Trainings::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Trainings::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Trainings::TrainingDate).date().not_null())
                    .col(ColumnDef::new(Trainings::TrainingTime).time().not_null())
                    .col(
                        ColumnDef::new(Trainings::Duration)
                            .integer()
                            .not_null()
                            .default(60),
                    )
                    .col(
                        ColumnDef::new(Trainings::Location)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Trainings::Organizer)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Trainings::TrainingType)
                            .string_len(30)
                            .not_null()
                            .default("Team Training"),
                    )
                    .col(
                        ColumnDef::new(Trainings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Trainings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_trainings_training_date")
                    .table(Trainings::Table)
                    .col(Trainings::TrainingDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrainingParticipants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrainingParticipants::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TrainingParticipants::TrainingId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingParticipants::ParticipantName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingParticipants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_participants_training_id")
                            .from(
                                TrainingParticipants::Table,
                                TrainingParticipants::TrainingId,
                            )
                            .to(Trainings::Table, Trainings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_training_participants_training_id")
                    .table(TrainingParticipants::Table)
                    .col(TrainingParticipants::TrainingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingParticipants::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Trainings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Trainings {
    Table,
    Id,
    Title,
    Description,
    TrainingDate,
    TrainingTime,
    Duration,
    Location,
    Organizer,
    TrainingType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TrainingParticipants {
    Table,
    Id,
    TrainingId,
    ParticipantName,
    CreatedAt,
}
