// src/api/handlers/mod.rs
pub mod auth_handler;
pub mod dashboard_handler;
pub mod department_handler;
pub mod employee_handler;
pub mod health_handler;
pub mod skill_handler;
pub mod training_data_handler;
pub mod training_handler;
pub mod training_plan_handler;

use crate::error::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// パスの `{id}` を UUID として取り出す
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid path parameter".to_string()))?;

        let id = Uuid::parse_str(&raw)
            .map_err(|_| AppError::BadRequest(format!("Invalid UUID format: '{}'", raw)))?;

        Ok(UuidPath(id))
    }
}
