// src/service/training_plan_service.rs

use crate::api::dto::training_plan_dto::{
    CreateTrainingPlanRequest, TrainingPlanDto, UpdateTrainingPlanRequest,
};
use crate::db::DbPool;
use crate::domain::month::normalize_plan_months;
use crate::domain::training_plan_model::{self, MonthList};
use crate::error::{AppError, AppResult};
use crate::repository::department_repository::DepartmentRepository;
use crate::repository::training_plan_repository::TrainingPlanRepository;
use sea_orm::{ActiveModelBehavior, Set};
use tracing::info;
use uuid::Uuid;

pub struct TrainingPlanService {
    db: DbPool,
}

fn normalize(labels: &[String], field: &str) -> AppResult<MonthList> {
    normalize_plan_months(labels)
        .map(MonthList::from)
        .map_err(|label| {
            AppError::ValidationError(format!(
                "Invalid month '{}' in {}. Expected Mon-YY such as Apr-25",
                label, field
            ))
        })
}

/// 実施月は計画月に含まれていなければならない
fn ensure_actual_within_planned(planned: &MonthList, actual: &MonthList) -> AppResult<()> {
    match actual.0.iter().find(|m| !planned.contains(m)) {
        Some(month) => Err(AppError::BadRequest(format!(
            "Actual month '{}' is not a planned month",
            month
        ))),
        None => Ok(()),
    }
}

impl TrainingPlanService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// 作成順 (部署名付き)
    pub async fn list_all(&self) -> AppResult<Vec<TrainingPlanDto>> {
        let plans = TrainingPlanRepository::find_all_with_department(&self.db).await?;
        Ok(plans.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, payload: CreateTrainingPlanRequest) -> AppResult<TrainingPlanDto> {
        let topic = payload.training_topic.trim().to_string();
        if topic.is_empty() {
            return Err(AppError::ValidationError(
                "Training topic is required".to_string(),
            ));
        }
        let planned = normalize(&payload.planned_months, "planned_months")?;
        let actual = normalize(&payload.actual_months, "actual_months")?;
        ensure_actual_within_planned(&planned, &actual)?;

        let department = DepartmentRepository::find_by_id(&self.db, payload.department_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Department with id {} not found",
                    payload.department_id
                ))
            })?;

        let active_model = training_plan_model::ActiveModel {
            department_id: Set(payload.department_id),
            training_topic: Set(topic),
            planned_months: Set(planned),
            actual_months: Set(actual),
            ..training_plan_model::ActiveModel::new()
        };
        let plan = TrainingPlanRepository::create(&self.db, active_model).await?;

        info!(plan_id = %plan.id, department_id = %plan.department_id, "Training plan created");
        Ok((plan, Some(department)).into())
    }

    /// 部分更新。片方の月リストだけ変える場合も保存後の状態で包含関係を検査する
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateTrainingPlanRequest,
    ) -> AppResult<TrainingPlanDto> {
        let plan = TrainingPlanRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Training plan with id {} not found", id)))?;

        let planned = match payload.planned_months.as_deref() {
            Some(labels) => normalize(labels, "planned_months")?,
            None => plan.planned_months.clone(),
        };
        let actual = match payload.actual_months.as_deref() {
            Some(labels) => normalize(labels, "actual_months")?,
            None => plan.actual_months.clone(),
        };
        ensure_actual_within_planned(&planned, &actual)?;

        let mut active_model: training_plan_model::ActiveModel = plan.into();
        if let Some(topic) = payload.training_topic {
            let topic = topic.trim().to_string();
            if topic.is_empty() {
                return Err(AppError::ValidationError(
                    "Training topic is required".to_string(),
                ));
            }
            active_model.training_topic = Set(topic);
        }
        if let Some(department_id) = payload.department_id {
            DepartmentRepository::find_by_id(&self.db, department_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Department with id {} not found", department_id))
                })?;
            active_model.department_id = Set(department_id);
        }
        active_model.planned_months = Set(planned);
        active_model.actual_months = Set(actual);

        TrainingPlanRepository::update(&self.db, active_model).await?;
        info!(plan_id = %id, "Training plan updated");

        TrainingPlanRepository::find_by_id_with_department(&self.db, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Training plan with id {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let rows = TrainingPlanRepository::delete_by_id(&self.db, id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Training plan with id {} not found",
                id
            )));
        }
        info!(plan_id = %id, "Training plan deleted");
        Ok(())
    }
}
