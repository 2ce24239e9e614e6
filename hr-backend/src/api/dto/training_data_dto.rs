// src/api/dto/training_data_dto.rs
use crate::domain::training_data_model;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 省略したカウンタは現在値のまま (新規行では 0)
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, Validate)]
pub struct UpdateMonthRequest {
    #[validate(range(min = 0, message = "Planned must not be negative"))]
    pub planned: Option<i32>,
    #[validate(range(min = 0, message = "Done must not be negative"))]
    pub done: Option<i32>,
    #[validate(range(min = 0, message = "Pending must not be negative"))]
    pub pending: Option<i32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct MonthRowRequest {
    /// `Jan`〜`Dec`
    pub month: String,
    #[validate(range(min = 0, message = "Planned must not be negative"))]
    pub planned: i32,
    #[validate(range(min = 0, message = "Done must not be negative"))]
    pub done: i32,
    #[validate(range(min = 0, message = "Pending must not be negative"))]
    pub pending: i32,
}

/// グラフ編集ダイアログの「全て保存」
#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct SaveYearRequest {
    #[validate(nested)]
    pub months: Vec<MonthRowRequest>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrainingDataDto {
    pub month: String,
    pub month_index: i16,
    pub year: i32,
    pub planned: i32,
    pub done: i32,
    pub pending: i32,
}

impl From<training_data_model::Model> for TrainingDataDto {
    fn from(model: training_data_model::Model) -> Self {
        Self {
            month: model.month,
            month_index: model.month_index,
            year: model.year,
            planned: model.planned,
            done: model.done,
            pending: model.pending,
        }
    }
}
