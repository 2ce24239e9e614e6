// src/utils/validation.rs
pub mod common;

use crate::error::AppError;
use validator::Validate;

/// DTO を検証し、失敗時は AppError::ValidationFailure を返す
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), AppError> {
    dto.validate().map_err(AppError::ValidationFailure)
}
