// src/repository/training_plan_repository.rs
use crate::domain::department_model::{self, Entity as Department};
use crate::domain::training_plan_model::{self, Entity as TrainingPlan};
use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, QueryOrder};

pub struct TrainingPlanRepository;

impl TrainingPlanRepository {
    /// 作成順に部署情報付きで取得
    pub async fn find_all_with_department<C: ConnectionTrait>(
        db: &C,
    ) -> Result<Vec<(training_plan_model::Model, Option<department_model::Model>)>, DbErr> {
        TrainingPlan::find()
            .find_also_related(Department)
            .order_by_asc(training_plan_model::Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<Option<training_plan_model::Model>, DbErr> {
        TrainingPlan::find_by_id(id).one(db).await
    }

    pub async fn find_by_id_with_department<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<Option<(training_plan_model::Model, Option<department_model::Model>)>, DbErr> {
        TrainingPlan::find_by_id(id)
            .find_also_related(Department)
            .one(db)
            .await
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        active_model: training_plan_model::ActiveModel,
    ) -> Result<training_plan_model::Model, DbErr> {
        active_model.insert(db).await
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        active_model: training_plan_model::ActiveModel,
    ) -> Result<training_plan_model::Model, DbErr> {
        active_model.update(db).await
    }

    pub async fn delete_by_id<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
        let result = TrainingPlan::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }
}
