use sea_orm_migration::prelude::*;

use super::m20250801_000001_create_departments_table::Departments;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrainingPlans::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrainingPlans::DepartmentId).uuid().not_null())
                    .col(
                        ColumnDef::new(TrainingPlans::TrainingTopic)
                            .string_len(200)
                            .not_null(),
                    )
                    // 月ラベル ("Apr-25" 形式) の配列をJSONで保持
                    .col(ColumnDef::new(TrainingPlans::PlannedMonths).json().not_null())
                    .col(ColumnDef::new(TrainingPlans::ActualMonths).json().not_null())
                    .col(
                        ColumnDef::new(TrainingPlans::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TrainingPlans::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_plans_department_id")
                            .from(TrainingPlans::Table, TrainingPlans::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_training_plans_department_id")
                    .table(TrainingPlans::Table)
                    .col(TrainingPlans::DepartmentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingPlans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TrainingPlans {
    Table,
    Id,
    DepartmentId,
    TrainingTopic,
    PlannedMonths,
    ActualMonths,
    CreatedAt,
    UpdatedAt,
}
