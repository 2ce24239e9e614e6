// src/api/handlers/department_handler.rs
use super::UuidPath;
use crate::api::dto::department_dto::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::api::dto::OperationResult;
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use crate::utils::validation::validate_dto;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};

pub async fn list_departments_handler(
    State(app_state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let departments = app_state.department_service.list_all().await?;
    Ok(ApiResponse::list(departments))
}

pub async fn get_department_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let department = app_state.department_service.get(id).await?;
    Ok(ApiResponse::success(department))
}

pub async fn create_department_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateDepartmentRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;
    let department = app_state.department_service.create(payload).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(department)))
}

pub async fn update_department_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;
    let department = app_state.department_service.update(id, payload).await?;
    Ok(ApiResponse::success(department))
}

pub async fn delete_department_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    app_state.department_service.delete(id).await?;
    Ok(ApiResponse::success(OperationResult::deleted(id, "Department")))
}

pub fn department_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/departments",
            get(list_departments_handler).post(create_department_handler),
        )
        .route(
            "/departments/{id}",
            get(get_department_handler)
                .patch(update_department_handler)
                .delete(delete_department_handler),
        )
        .with_state(app_state)
}
