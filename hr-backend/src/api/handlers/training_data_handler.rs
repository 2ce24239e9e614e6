// src/api/handlers/training_data_handler.rs
use crate::api::dto::training_data_dto::{SaveYearRequest, UpdateMonthRequest};
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use crate::utils::validation::validate_dto;
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{get, put},
    Router,
};

pub async fn get_training_data_handler(
    State(app_state): State<AppState>,
    Path(year): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let rows = app_state.training_data_service.get_by_year(year).await?;
    Ok(ApiResponse::list(rows))
}

/// グラフ編集ダイアログの一括保存
pub async fn save_year_handler(
    State(app_state): State<AppState>,
    Path(year): Path<i32>,
    Json(payload): Json<SaveYearRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;
    let rows = app_state
        .training_data_service
        .update_year(year, payload.months)
        .await?;
    Ok(ApiResponse::list(rows))
}

pub async fn update_month_handler(
    State(app_state): State<AppState>,
    Path((year, month)): Path<(i32, String)>,
    Json(payload): Json<UpdateMonthRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;
    let row = app_state
        .training_data_service
        .update_month(&month, year, payload)
        .await?;
    Ok(ApiResponse::success(row))
}

pub fn training_data_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/training-data/{year}",
            get(get_training_data_handler).put(save_year_handler),
        )
        .route("/training-data/{year}/{month}", put(update_month_handler))
        .with_state(app_state)
}
