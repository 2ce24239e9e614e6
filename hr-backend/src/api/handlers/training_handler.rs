// src/api/handlers/training_handler.rs
use super::UuidPath;
use crate::api::dto::training_dto::CreateTrainingRequest;
use crate::api::dto::OperationResult;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use crate::utils::validation::validate_dto;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};

pub async fn list_trainings_handler(
    State(app_state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let trainings = app_state.training_service.list_all().await?;
    Ok(ApiResponse::list(trainings))
}

/// 研修の登録。主催者が空ならサインイン中のユーザー名を入れる
pub async fn create_training_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateTrainingRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;
    let training = app_state
        .training_service
        .create(payload, user.username())
        .await?;
    Ok((StatusCode::CREATED, ApiResponse::success(training)))
}

pub async fn get_training_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let training = app_state.training_service.get(id).await?;
    Ok(ApiResponse::success(training))
}

pub async fn get_participants_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let participants = app_state.training_service.get_participants(id).await?;
    Ok(ApiResponse::list(participants))
}

pub async fn delete_training_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    app_state.training_service.delete(id).await?;
    Ok(ApiResponse::success(OperationResult::deleted(id, "Training")))
}

pub fn training_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/trainings",
            get(list_trainings_handler).post(create_training_handler),
        )
        .route(
            "/trainings/{id}",
            get(get_training_handler).delete(delete_training_handler),
        )
        .route("/trainings/{id}/participants", get(get_participants_handler))
        .with_state(app_state)
}
