// src/api/dto/department_dto.rs
use crate::domain::department_model;
use crate::utils::validation::common;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(
        length(
            min = common::department::NAME_MIN_LENGTH,
            max = common::department::NAME_MAX_LENGTH,
            message = "Department name must be between 1 and 100 characters"
        ),
        custom(function = common::validate_not_blank)
    )]
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct UpdateDepartmentRequest {
    #[validate(
        length(
            min = common::department::NAME_MIN_LENGTH,
            max = common::department::NAME_MAX_LENGTH,
            message = "Department name must be between 1 and 100 characters"
        ),
        custom(function = common::validate_not_blank)
    )]
    pub name: Option<String>,

    #[validate(range(min = 0, message = "Employee count must not be negative"))]
    pub employee_count: Option<i32>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DepartmentDto {
    pub id: Uuid,
    pub name: String,
    pub employee_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<department_model::Model> for DepartmentDto {
    fn from(model: department_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            employee_count: model.employee_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
