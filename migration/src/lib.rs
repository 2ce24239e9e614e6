// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 組織・社員・スキル関連マイグレーション
mod m20250801_000001_create_departments_table;
mod m20250801_000002_create_employees_table;
mod m20250801_000003_create_skills_table;
mod m20250801_000004_create_employee_skills_table;

// 研修関連マイグレーション
mod m20250802_000001_create_trainings_table;
mod m20250802_000002_create_training_plans_table;
mod m20250802_000003_create_training_data_table;

// 認証関連マイグレーション
mod m20250803_000001_create_users_table;
mod m20250803_000002_create_auth_sessions_table;
mod m20250803_000003_create_password_reset_tokens_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 部署 (依存関係なし)
            Box::new(m20250801_000001_create_departments_table::Migration),
            // 2. 部署に依存するテーブル
            Box::new(m20250801_000002_create_employees_table::Migration),
            Box::new(m20250801_000003_create_skills_table::Migration),
            // 3. 社員とスキルの関連
            Box::new(m20250801_000004_create_employee_skills_table::Migration),
            // 4. 研修スケジュール・研修計画・月次集計
            Box::new(m20250802_000001_create_trainings_table::Migration),
            Box::new(m20250802_000002_create_training_plans_table::Migration),
            Box::new(m20250802_000003_create_training_data_table::Migration),
            // 5. 認証
            Box::new(m20250803_000001_create_users_table::Migration),
            Box::new(m20250803_000002_create_auth_sessions_table::Migration),
            Box::new(m20250803_000003_create_password_reset_tokens_table::Migration),
        ]
    }
}
