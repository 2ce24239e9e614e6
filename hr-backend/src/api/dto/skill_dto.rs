// src/api/dto/skill_dto.rs
use crate::domain::skill_catalog::SkillCatalog;
use crate::domain::skill_model;
use crate::utils::validation::common;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateSkillRequest {
    #[validate(
        length(max = common::skill::NAME_MAX_LENGTH, message = "Skill name must not exceed 200 characters"),
        custom(function = common::validate_not_blank)
    )]
    pub name: String,
}

/// カタログ省略時は製造ライン向け
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SeedSkillsRequest {
    pub catalog: Option<SkillCatalog>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkillDto {
    pub id: Uuid,
    pub name: String,
    pub department_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<skill_model::Model> for SkillDto {
    fn from(model: skill_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            department_id: model.department_id,
            created_at: model.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SeedSkillsResponse {
    pub catalog: SkillCatalog,
    pub inserted: Vec<SkillDto>,
    /// 既に登録済みで飛ばした件数
    pub skipped: usize,
}
