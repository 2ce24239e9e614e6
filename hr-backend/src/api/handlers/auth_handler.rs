// src/api/handlers/auth_handler.rs
use crate::api::dto::auth_dto::{
    ConfirmPasswordResetRequest, MessageResponse, RefreshTokenRequest, ResetPasswordRequest,
    SignInRequest, SignUpRequest, SignUpResponse,
};
use crate::api::{AppState, CookieConfig};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use crate::utils::validation::validate_dto;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::info;

fn access_cookie(config: &CookieConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.access_token_name.clone(), token))
        .path(config.path.clone())
        .secure(config.secure)
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// サインアップ (セッションは作らない)
pub async fn signup_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<SignUpRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;
    if !payload.confirmation_matches() {
        return Err(AppError::ValidationError(
            "Passwords do not match".to_string(),
        ));
    }

    let user = app_state
        .auth_service
        .sign_up(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::success(SignUpResponse {
            user,
            message: "Sign up successful. Please sign in.".to_string(),
        }),
    ))
}

pub async fn signin_handler(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<SignInRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;

    let response = app_state
        .auth_service
        .sign_in(&payload.email, &payload.password)
        .await?;
    let jar = jar.add(access_cookie(
        &app_state.cookie_config,
        response.tokens.access_token.clone(),
    ));

    Ok((jar, ApiResponse::success(response)))
}

pub async fn refresh_handler(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RefreshTokenRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;

    let response = app_state.auth_service.refresh(&payload.refresh_token).await?;
    let jar = jar.add(access_cookie(
        &app_state.cookie_config,
        response.tokens.access_token.clone(),
    ));

    Ok((jar, ApiResponse::success(response)))
}

pub async fn signout_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    app_state.auth_service.sign_out(user.session_id).await?;

    let config = &app_state.cookie_config;
    let jar = jar.remove(Cookie::build((config.access_token_name.clone(), "")).path(config.path.clone()));

    Ok((
        jar,
        ApiResponse::success(MessageResponse::new("Successfully signed out")),
    ))
}

/// リセットリンクを発行する。登録の有無は応答から分からないようにする
pub async fn reset_password_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;

    app_state
        .auth_service
        .reset_password(&payload.email, payload.redirect_to)
        .await?;

    Ok(ApiResponse::success(MessageResponse::new(
        "If the address is registered, a password reset link has been sent",
    )))
}

pub async fn confirm_password_reset_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ConfirmPasswordResetRequest>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&payload)?;

    let user = app_state
        .auth_service
        .confirm_password_reset(&payload.token, &payload.new_password)
        .await?;
    info!(user_id = %user.id, "Password updated via reset link");

    Ok(ApiResponse::success(MessageResponse::new(
        "Password has been updated. Please sign in again.",
    )))
}

pub async fn me_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<impl IntoResponse> {
    let current = app_state.auth_service.current_user(user.user_id).await?;
    Ok(ApiResponse::success(current))
}

pub fn auth_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/signup", post(signup_handler))
        .route("/auth/signin", post(signin_handler))
        .route("/auth/refresh", post(refresh_handler))
        .route("/auth/signout", post(signout_handler))
        .route("/auth/reset-password", post(reset_password_handler))
        .route(
            "/auth/reset-password/confirm",
            post(confirm_password_reset_handler),
        )
        .route("/auth/me", get(me_handler))
        .with_state(app_state)
}
