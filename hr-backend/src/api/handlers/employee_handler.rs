// src/api/handlers/employee_handler.rs
use super::UuidPath;
use crate::api::dto::employee_dto::{
    CreateEmployeeRequest, UpdateEmployeeRequest, UpdateEmployeeSkillsRequest,
};
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

pub async fn list_employees_handler(
    State(app_state): State<AppState>,
    UuidPath(department_id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let employees = app_state
        .employee_service
        .list_by_department(department_id)
        .await?;
    Ok(ApiResponse::list(employees))
}

pub async fn create_employee_handler(
    State(app_state): State<AppState>,
    UuidPath(department_id): UuidPath,
    Json(payload): Json<CreateEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;
    let employee = app_state
        .employee_service
        .create(department_id, payload)
        .await?;
    Ok((StatusCode::CREATED, ApiResponse::success(employee)))
}

pub async fn get_employee_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let employee = app_state.employee_service.get(id).await?;
    Ok(ApiResponse::success(employee))
}

pub async fn update_employee_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;
    let employee = app_state.employee_service.update(id, payload).await?;
    Ok(ApiResponse::success(employee))
}

pub async fn delete_employee_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    app_state.employee_service.delete(id).await?;
    Ok(ApiResponse::success(OperationResult::deleted(id, "Employee")))
}

pub async fn get_employee_skills_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let skills = app_state.skill_service.get_employee_skills(id).await?;
    Ok(ApiResponse::success(skills))
}

/// スキル割り当ての全置換
pub async fn replace_employee_skills_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateEmployeeSkillsRequest>,
) -> AppResult<impl IntoResponse> {
    let skills = app_state
        .skill_service
        .update_employee_skills(id, payload.skills)
        .await?;
    Ok(ApiResponse::success(skills))
}

pub fn employee_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/departments/{id}/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/{id}",
            get(get_employee_handler)
                .patch(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route(
            "/employees/{id}/skills",
            get(get_employee_skills_handler).put(replace_employee_skills_handler),
        )
        .with_state(app_state)
}
