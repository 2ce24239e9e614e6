// src/repository/skill_repository.rs
use crate::domain::skill_model::{self, Entity as Skill};
use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, QueryOrder, Set};

pub struct SkillRepository;

impl SkillRepository {
    pub async fn find_by_department<C: ConnectionTrait>(
        db: &C,
        department_id: Uuid,
    ) -> Result<Vec<skill_model::Model>, DbErr> {
        Skill::find()
            .filter(skill_model::Column::DepartmentId.eq(department_id))
            .order_by_asc(skill_model::Column::Name)
            .all(db)
            .await
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<Option<skill_model::Model>, DbErr> {
        Skill::find_by_id(id).one(db).await
    }

    pub async fn find_by_department_and_name<C: ConnectionTrait>(
        db: &C,
        department_id: Uuid,
        name: &str,
    ) -> Result<Option<skill_model::Model>, DbErr> {
        Skill::find()
            .filter(skill_model::Column::DepartmentId.eq(department_id))
            .filter(skill_model::Column::Name.eq(name))
            .one(db)
            .await
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        department_id: Uuid,
        name: String,
    ) -> Result<skill_model::Model, DbErr> {
        let active_model = skill_model::ActiveModel {
            department_id: Set(department_id),
            name: Set(name),
            ..skill_model::ActiveModel::new()
        };
        active_model.insert(db).await
    }

    pub async fn delete_by_id<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
        let result = Skill::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }
}
