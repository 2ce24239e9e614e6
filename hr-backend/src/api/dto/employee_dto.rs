// src/api/dto/employee_dto.rs
use crate::domain::skill_level::SkillLevel;
use crate::domain::{department_model, employee_model};
use crate::utils::validation::common;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

/// 部署は URL のパスで指定する
#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(
        length(max = common::employee::NAME_MAX_LENGTH, message = "Name must not exceed 100 characters"),
        custom(function = common::validate_not_blank)
    )]
    pub name: String,

    #[validate(
        length(max = common::employee::CODE_MAX_LENGTH, message = "Employee code must not exceed 50 characters"),
        custom(function = common::validate_not_blank)
    )]
    pub employee_code: String,

    #[validate(
        length(max = common::employee::POSITION_MAX_LENGTH, message = "Position must not exceed 100 characters"),
        custom(function = common::validate_not_blank)
    )]
    pub position: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(
        length(max = common::employee::NAME_MAX_LENGTH, message = "Name must not exceed 100 characters"),
        custom(function = common::validate_not_blank)
    )]
    pub name: Option<String>,

    #[validate(
        length(max = common::employee::CODE_MAX_LENGTH, message = "Employee code must not exceed 50 characters"),
        custom(function = common::validate_not_blank)
    )]
    pub employee_code: Option<String>,

    #[validate(
        length(max = common::employee::POSITION_MAX_LENGTH, message = "Position must not exceed 100 characters"),
        custom(function = common::validate_not_blank)
    )]
    pub position: Option<String>,

    pub department_id: Option<Uuid>,
}

/// スキル名 → レベル の全置換
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UpdateEmployeeSkillsRequest {
    pub skills: BTreeMap<String, SkillLevel>,
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeDto {
    pub id: Uuid,
    pub name: String,
    pub employee_code: String,
    pub position: String,
    pub department_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<employee_model::Model> for EmployeeDto {
    fn from(model: employee_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            employee_code: model.employee_code,
            position: model.position,
            department_id: model.department_id,
            department_name: None,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<(employee_model::Model, Option<department_model::Model>)> for EmployeeDto {
    fn from((employee, department): (employee_model::Model, Option<department_model::Model>)) -> Self {
        let mut dto = Self::from(employee);
        dto.department_name = department.map(|d| d.name);
        dto
    }
}

/// L1〜L4 の件数集計
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillSummaryDto {
    /// "L1".."L4" → 件数 (0件のレベルも含む)
    pub counts: BTreeMap<String, usize>,
    /// NA 以外のスキル数
    pub total: usize,
    /// 例: `L1 = 2, L3 = 1 out of 3 skills`
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeSkillsDto {
    pub employee_id: Uuid,
    pub skills: BTreeMap<String, SkillLevel>,
    pub summary: SkillSummaryDto,
}
