use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrainingData::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrainingData::Month).string_len(3).not_null())
                    // 並び順はラベルではなく月番号 (1-12) で決める
                    .col(
                        ColumnDef::new(TrainingData::MonthIndex)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TrainingData::Year).integer().not_null())
                    .col(
                        ColumnDef::new(TrainingData::Planned)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TrainingData::Done)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TrainingData::Pending)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TrainingData::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TrainingData::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // upsert のキー
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_training_data_month_year")
                    .table(TrainingData::Table)
                    .col(TrainingData::Month)
                    .col(TrainingData::Year)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_training_data_month_year")
                    .table(TrainingData::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TrainingData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TrainingData {
    Table,
    Id,
    Month,
    MonthIndex,
    Year,
    Planned,
    Done,
    Pending,
    CreatedAt,
    UpdatedAt,
}
