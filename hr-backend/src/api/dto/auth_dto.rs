// src/api/dto/auth_dto.rs
use crate::domain::user_model::{self, display_name};
use crate::utils::jwt::TokenPair;
use crate::utils::validation::common;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- リクエストDTO ---

/// サインアップ (確認用パスワードは送られてきた場合のみ照合する)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(custom(function = common::validate_email_format))]
    pub email: String,

    #[validate(length(
        min = common::password::MIN_LENGTH,
        max = common::password::MAX_LENGTH,
        message = "Password must be at least 6 characters"
    ))]
    pub password: String,

    pub confirm_password: Option<String>,
}

impl SignUpRequest {
    /// 確認用パスワードの照合結果
    pub fn confirmation_matches(&self) -> bool {
        match &self.confirm_password {
            Some(confirm) => confirm == &self.password,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(length(min = common::required::MIN_LENGTH, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = common::required::MIN_LENGTH, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = common::required::MIN_LENGTH, message = "Refresh token is required"))]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(custom(function = common::validate_email_format))]
    pub email: String,

    /// 省略時は `{FRONTEND_URL}/reset-password`
    pub redirect_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmPasswordResetRequest {
    #[validate(length(min = common::required::MIN_LENGTH, message = "Reset token is required"))]
    pub token: String,

    #[validate(length(
        min = common::password::MIN_LENGTH,
        max = common::password::MAX_LENGTH,
        message = "Password must be at least 6 characters"
    ))]
    pub new_password: String,
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    /// メールアドレスの @ より前
    pub username: String,
    pub last_sign_in_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<user_model::Model> for UserDto {
    fn from(model: user_model::Model) -> Self {
        Self {
            id: model.id,
            username: display_name(Some(&model.email)),
            email: model.email,
            last_sign_in_at: model.last_sign_in_at,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserDto,
    pub session_id: Uuid,
    pub tokens: TokenPair,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub user: UserDto,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
