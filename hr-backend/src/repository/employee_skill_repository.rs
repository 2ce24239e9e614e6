// src/repository/employee_skill_repository.rs
use crate::domain::employee_skill_model::{self, Entity as EmployeeSkill};
use crate::domain::skill_level::SkillLevel;
use crate::domain::skill_model::{self, Entity as Skill};
use sea_orm::prelude::*;
use sea_orm::{ConnectionTrait, Set};

pub struct EmployeeSkillRepository;

impl EmployeeSkillRepository {
    /// 社員の習熟度をスキル名付きで取得
    pub async fn find_with_skill_by_employee<C: ConnectionTrait>(
        db: &C,
        employee_id: Uuid,
    ) -> Result<Vec<(employee_skill_model::Model, Option<skill_model::Model>)>, DbErr> {
        EmployeeSkill::find()
            .filter(employee_skill_model::Column::EmployeeId.eq(employee_id))
            .find_also_related(Skill)
            .all(db)
            .await
    }

    pub async fn delete_by_employee<C: ConnectionTrait>(
        db: &C,
        employee_id: Uuid,
    ) -> Result<u64, DbErr> {
        let result = EmployeeSkill::delete_many()
            .filter(employee_skill_model::Column::EmployeeId.eq(employee_id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    /// (skill_id, level) の組をまとめて挿入する
    pub async fn insert_levels<C: ConnectionTrait>(
        db: &C,
        employee_id: Uuid,
        levels: Vec<(Uuid, SkillLevel)>,
    ) -> Result<usize, DbErr> {
        if levels.is_empty() {
            return Ok(0);
        }
        let count = levels.len();
        let models = levels.into_iter().map(|(skill_id, level)| employee_skill_model::ActiveModel {
            employee_id: Set(employee_id),
            skill_id: Set(skill_id),
            skill_level: Set(level.to_string()),
            ..employee_skill_model::ActiveModel::new()
        });
        EmployeeSkill::insert_many(models).exec(db).await?;
        Ok(count)
    }
}
