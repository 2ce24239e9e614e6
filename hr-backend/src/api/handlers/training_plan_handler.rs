// src/api/handlers/training_plan_handler.rs
use super::UuidPath;
use crate::api::dto::training_plan_dto::{CreateTrainingPlanRequest, UpdateTrainingPlanRequest};
use crate::api::dto::OperationResult;
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use crate::utils::validation::validate_dto;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Router,
};

pub async fn list_training_plans_handler(
    State(app_state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let plans = app_state.training_plan_service.list_all().await?;
    Ok(ApiResponse::list(plans))
}

pub async fn create_training_plan_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTrainingPlanRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;
    let plan = app_state.training_plan_service.create(payload).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(plan)))
}

pub async fn update_training_plan_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateTrainingPlanRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;
    let plan = app_state.training_plan_service.update(id, payload).await?;
    Ok(ApiResponse::success(plan))
}

pub async fn delete_training_plan_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    app_state.training_plan_service.delete(id).await?;
    Ok(ApiResponse::success(OperationResult::deleted(
        id,
        "Training plan",
    )))
}

pub fn training_plan_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/training-plans",
            get(list_training_plans_handler).post(create_training_plan_handler),
        )
        .route(
            "/training-plans/{id}",
            patch(update_training_plan_handler).delete(delete_training_plan_handler),
        )
        .with_state(app_state)
}
