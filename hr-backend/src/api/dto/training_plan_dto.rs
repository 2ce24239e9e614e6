// src/api/dto/training_plan_dto.rs
use crate::domain::{department_model, training_plan_model};
use crate::utils::validation::common;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateTrainingPlanRequest {
    pub department_id: Uuid,

    #[validate(
        length(max = common::training::TOPIC_MAX_LENGTH, message = "Training topic must not exceed 200 characters"),
        custom(function = common::validate_not_blank)
    )]
    pub training_topic: String,

    #[validate(custom(function = common::validate_plan_month_labels))]
    #[serde(default)]
    pub planned_months: Vec<String>,

    #[validate(custom(function = common::validate_plan_month_labels))]
    #[serde(default)]
    pub actual_months: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct UpdateTrainingPlanRequest {
    pub department_id: Option<Uuid>,

    #[validate(
        length(max = common::training::TOPIC_MAX_LENGTH, message = "Training topic must not exceed 200 characters"),
        custom(function = common::validate_not_blank)
    )]
    pub training_topic: Option<String>,

    #[validate(custom(function = common::validate_plan_month_labels))]
    pub planned_months: Option<Vec<String>>,

    #[validate(custom(function = common::validate_plan_month_labels))]
    pub actual_months: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingPlanDto {
    pub id: Uuid,
    pub department_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    pub training_topic: String,
    pub planned_months: Vec<String>,
    pub actual_months: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<(training_plan_model::Model, Option<department_model::Model>)> for TrainingPlanDto {
    fn from(
        (plan, department): (training_plan_model::Model, Option<department_model::Model>),
    ) -> Self {
        Self {
            id: plan.id,
            department_id: plan.department_id,
            department_name: department.map(|d| d.name),
            training_topic: plan.training_topic,
            planned_months: plan.planned_months.0,
            actual_months: plan.actual_months.0,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}
