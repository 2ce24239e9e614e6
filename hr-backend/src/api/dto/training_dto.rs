// src/api/dto/training_dto.rs
use crate::api::dto::common::deserialize_time;
use crate::domain::training_model;
use crate::domain::training_type::TrainingType;
use crate::utils::validation::common;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateTrainingRequest {
    #[validate(
        length(max = common::training::TITLE_MAX_LENGTH, message = "Title must not exceed 200 characters"),
        custom(function = common::validate_not_blank)
    )]
    pub title: String,

    #[validate(length(
        max = common::training::DESCRIPTION_MAX_LENGTH,
        message = "Description must not exceed 2000 characters"
    ))]
    #[serde(default)]
    pub description: Option<String>,

    pub training_date: NaiveDate,

    #[serde(deserialize_with = "deserialize_time")]
    pub training_time: NaiveTime,

    /// 省略時は60分
    #[validate(range(
        min = common::training::DURATION_MIN_MINUTES,
        max = common::training::DURATION_MAX_MINUTES,
        message = "Duration must be between 1 and 1440 minutes"
    ))]
    #[serde(default)]
    pub duration: Option<i32>,

    #[validate(length(
        max = common::training::LOCATION_MAX_LENGTH,
        message = "Location must not exceed 200 characters"
    ))]
    #[serde(default)]
    pub location: Option<String>,

    #[validate(length(
        max = common::training::ORGANIZER_MAX_LENGTH,
        message = "Organizer must not exceed 100 characters"
    ))]
    #[serde(default)]
    pub organizer: Option<String>,

    #[serde(default)]
    pub training_type: Option<TrainingType>,

    /// 参加者名 (空白のみの名前は捨てる)
    #[serde(default)]
    pub participants: Vec<String>,
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub training_date: NaiveDate,
    pub training_time: NaiveTime,
    pub duration: i32,
    pub location: String,
    pub organizer: String,
    pub training_type: TrainingType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<training_model::Model> for TrainingDto {
    fn from(model: training_model::Model) -> Self {
        let training_type = model.kind();
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            training_date: model.training_date,
            training_time: model.training_time,
            duration: model.duration,
            location: model.location,
            organizer: model.organizer,
            training_type,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// 作成直後のレスポンス (参加者名付き)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingWithParticipantsDto {
    #[serde(flatten)]
    pub training: TrainingDto,
    pub participants: Vec<String>,
}
