// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

use crate::session::AuthError;
use crate::utils::jwt::JwtError;
use crate::utils::password::PasswordError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Multiple validation errors")]
    ValidationErrors(Vec<String>),

    #[error("Failed to parse UUID: {0}")]
    UuidError(#[from] uuid::Error),

    #[error("Validation failed")]
    ValidationFailure(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                AppError::Unauthorized("Invalid email or password".to_string())
            }
            AuthError::InvalidToken(msg) => AppError::Unauthorized(msg),
            AuthError::EmailAlreadyRegistered => {
                AppError::Conflict("User already registered".to_string())
            }
            AuthError::InvalidEmail(msg) | AuthError::WeakPassword(msg) => {
                AppError::ValidationError(msg)
            }
            AuthError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => AppError::Unauthorized("Access token expired".to_string()),
            JwtError::EncodingError(_) | JwtError::ConfigurationError(_) => {
                AppError::InternalServerError(err.to_string())
            }
            _ => AppError::Unauthorized("Invalid access token".to_string()),
        }
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::WeakPassword(msg) => AppError::ValidationError(msg),
            other => AppError::InternalServerError(other.to_string()),
        }
    }
}

impl AppError {
    /// 一意制約違反かどうか
    pub fn is_unique_violation(db_err: &DbErr) -> bool {
        matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }

    /// 一意制約違反だけを Conflict に読み替える
    pub fn conflict_on_unique(db_err: DbErr, message: impl Into<String>) -> Self {
        if Self::is_unique_violation(&db_err) {
            AppError::Conflict(message.into())
        } else {
            AppError::DbErr(db_err)
        }
    }
}

impl ErrorResponse {
    fn simple(message: String, error_type: &str) -> Self {
        Self {
            success: false,
            error: message.clone(),
            message,
            details: None,
            validation_errors: None,
            errors: None,
            error_type: error_type.to_string(),
        }
    }
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::DbErr(db_err) => {
                if Self::is_unique_violation(&db_err) {
                    warn!(error = %db_err, "Unique constraint violation");
                    let mut body = ErrorResponse::simple(
                        "The record conflicts with an existing one".to_string(),
                        "conflict",
                    );
                    body.details = Some(json!({ "operation": "insert_or_update" }));
                    (StatusCode::CONFLICT, body)
                } else {
                    error!(error = ?db_err, "Database error"); // サーバーログには詳細を出す

                    let status = match db_err {
                        DbErr::RecordNotFound(_) => StatusCode::NOT_FOUND,
                        _ => StatusCode::INTERNAL_SERVER_ERROR,
                    };

                    let (message, details) = match &db_err {
                        DbErr::RecordNotFound(entity) => (
                            "The requested resource was not found".to_string(),
                            Some(json!({ "entity": entity })),
                        ),
                        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => (
                            "The database is unavailable".to_string(),
                            Some(json!({ "operation": "connect", "hint": "Check DATABASE_URL" })),
                        ),
                        DbErr::Exec(_) => (
                            "A database operation failed".to_string(),
                            Some(json!({ "operation": "exec", "hint": "Check database connection" })),
                        ),
                        DbErr::Query(_) => (
                            "A database query failed".to_string(),
                            Some(json!({ "operation": "query", "hint": "Check query syntax" })),
                        ),
                        _ => ("A database error occurred".to_string(), None),
                    };

                    let mut body = ErrorResponse::simple(message, "database_error");
                    body.details = details;
                    (status, body)
                }
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::simple(message, "not_found"),
            ),
            AppError::ValidationError(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::simple(message, "validation_error"),
            ),
            AppError::ValidationErrors(errors) => {
                let mut field_errors = HashMap::new();
                for error in &errors {
                    if let Some((field, message)) = error.split_once(": ") {
                        field_errors
                            .entry(field.to_string())
                            .or_insert_with(Vec::new)
                            .push(message.to_string());
                    }
                }
                let errors_array: Vec<serde_json::Value> =
                    errors.iter().map(|e| json!({"message": e})).collect();
                let mut body =
                    ErrorResponse::simple("Validation failed".to_string(), "validation_errors");
                body.validation_errors = Some(field_errors);
                body.errors = Some(errors_array);
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::UuidError(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::simple(format!("Invalid UUID: {}", err), "invalid_uuid"),
            ),
            AppError::ValidationFailure(errors) => {
                let field_errors: HashMap<String, Vec<String>> = errors
                    .field_errors()
                    .into_iter()
                    .map(|(field, errors)| {
                        let messages = errors
                            .iter()
                            .map(|e| {
                                e.message
                                    .as_ref()
                                    .map_or_else(|| "Invalid value".to_string(), |m| m.to_string())
                            })
                            .collect();
                        (field.to_string(), messages)
                    })
                    .collect();
                let errors_array: Vec<serde_json::Value> = field_errors
                    .iter()
                    .flat_map(|(field, messages)| {
                        messages
                            .iter()
                            .map(move |msg| json!({"message": format!("{}: {}", field, msg)}))
                    })
                    .collect();
                let mut body =
                    ErrorResponse::simple("Validation failed".to_string(), "validation_errors");
                body.validation_errors = Some(field_errors);
                body.errors = Some(errors_array);
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::simple(message, "bad_request"),
            ),
            AppError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::simple(message, "unauthorized"),
            ),
            AppError::Forbidden(message) => (
                StatusCode::FORBIDDEN,
                ErrorResponse::simple(message, "forbidden"),
            ),
            AppError::Conflict(message) => (
                StatusCode::CONFLICT,
                ErrorResponse::simple(message, "conflict"),
            ),
            AppError::InternalServerError(message) => {
                error!(%message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::simple(
                        "An internal server error occurred".to_string(),
                        "internal_server_error",
                    ),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<serde_json::Value>>,
    pub error_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = vec![
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::ValidationError("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
            (
                AppError::DbErr(DbErr::RecordNotFound("departments".into())),
                StatusCode::NOT_FOUND,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_auth_error_mapping() {
        assert!(matches!(
            AppError::from(AuthError::EmailAlreadyRegistered),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(AuthError::InvalidCredentials),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            AppError::from(AuthError::WeakPassword("short".into())),
            AppError::ValidationError(_)
        ));
    }
}
