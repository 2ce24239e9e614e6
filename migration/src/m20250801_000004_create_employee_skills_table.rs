use sea_orm_migration::prelude::*;

use super::m20250801_000002_create_employees_table::Employees;
use super::m20250801_000003_create_skills_table::Skills;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeSkills::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EmployeeSkills::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(EmployeeSkills::SkillId).uuid().not_null())
                    .col(
                        ColumnDef::new(EmployeeSkills::SkillLevel)
                            .string_len(2)
                            .not_null()
                            .default("NA"),
                    )
                    .col(
                        ColumnDef::new(EmployeeSkills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(EmployeeSkills::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_skills_employee_id")
                            .from(EmployeeSkills::Table, EmployeeSkills::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_skills_skill_id")
                            .from(EmployeeSkills::Table, EmployeeSkills::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // (社員, スキル) ごとにレベルは1つだけ
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_employee_skills_employee_id_skill_id")
                    .table(EmployeeSkills::Table)
                    .col(EmployeeSkills::EmployeeId)
                    .col(EmployeeSkills::SkillId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_employee_skills_employee_id_skill_id")
                    .table(EmployeeSkills::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EmployeeSkills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmployeeSkills {
    Table,
    Id,
    EmployeeId,
    SkillId,
    SkillLevel,
    CreatedAt,
    UpdatedAt,
}
