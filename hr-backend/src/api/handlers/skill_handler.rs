// src/api/handlers/skill_handler.rs
use super::UuidPath;
use crate::api::dto::skill_dto::{CreateSkillRequest, SeedSkillsRequest};
use crate::api::dto::OperationResult;
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use crate::utils::validation::validate_dto;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};

pub async fn list_skills_handler(
    State(app_state): State<AppState>,
    UuidPath(department_id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let skills = app_state
        .skill_service
        .list_skills_by_department(department_id)
        .await?;
    Ok(ApiResponse::list(skills))
}

pub async fn create_skill_handler(
    State(app_state): State<AppState>,
    UuidPath(department_id): UuidPath,
    Json(payload): Json<CreateSkillRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;
    let skill = app_state
        .skill_service
        .create_skill(department_id, payload.name)
        .await?;
    Ok((StatusCode::CREATED, ApiResponse::success(skill)))
}

/// 組み込みカタログの登録 (`{}` なら部署名から選ぶ)
pub async fn seed_skills_handler(
    State(app_state): State<AppState>,
    UuidPath(department_id): UuidPath,
    Json(payload): Json<SeedSkillsRequest>,
) -> AppResult<impl IntoResponse> {
    let seeded = app_state
        .skill_service
        .seed_default_catalog(department_id, payload.catalog)
        .await?;
    Ok(ApiResponse::success(seeded))
}

pub async fn delete_skill_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    app_state.skill_service.delete_skill(id).await?;
    Ok(ApiResponse::success(OperationResult::deleted(id, "Skill")))
}

pub fn skill_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/departments/{id}/skills",
            get(list_skills_handler).post(create_skill_handler),
        )
        .route("/departments/{id}/skills/seed", post(seed_skills_handler))
        .route("/skills/{id}", delete(delete_skill_handler))
        .with_state(app_state)
}
