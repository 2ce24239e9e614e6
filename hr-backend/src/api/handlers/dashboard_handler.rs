// src/api/handlers/dashboard_handler.rs
use crate::api::dto::dashboard_dto::DashboardQuery;
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use chrono::{Datelike, Utc};

pub async fn dashboard_overview_handler(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> AppResult<impl IntoResponse> {
    let today = Utc::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let overview = app_state.dashboard_service.overview(year, today).await?;
    Ok(ApiResponse::success(overview))
}

pub fn dashboard_router(app_state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard_overview_handler))
        .with_state(app_state)
}
