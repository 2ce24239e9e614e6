// src/middleware/auth.rs

use crate::domain::user_model::display_name;
use crate::error::AppError;
use crate::service::auth_service::AuthService;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// JWT認証ミドルウェアの設定
#[derive(Clone)]
pub struct AuthMiddlewareConfig {
    pub auth_service: Arc<AuthService>,
    pub access_token_cookie_name: String,
    /// 前方一致で認証を省略するパス
    pub skip_auth_paths: Vec<String>,
}

impl AuthMiddlewareConfig {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self {
            auth_service,
            access_token_cookie_name: ACCESS_TOKEN_COOKIE.to_string(),
            skip_auth_paths: vec![
                "/auth/signup".to_string(),
                "/auth/signin".to_string(),
                "/auth/refresh".to_string(),
                "/auth/reset-password".to_string(),
                "/health".to_string(),
            ],
        }
    }
}

/// 認証済みユーザー (リクエストのエクステンションに入る)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub email: String,
}

impl AuthenticatedUser {
    /// 画面に出す名前 (メールアドレスの @ より前)
    pub fn username(&self) -> String {
        display_name(Some(&self.email))
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

/// JWT認証ミドルウェア
///
/// トークンの署名に加えて、発行元のセッションがまだ有効かを確かめる。
pub async fn jwt_auth_middleware(
    State(config): State<AuthMiddlewareConfig>,
    headers: HeaderMap,
    cookie_jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    if should_skip_auth(&path, &config.skip_auth_paths) {
        debug!(path = %path, "Skipping auth");
        return Ok(next.run(request).await);
    }

    let token = extract_token(&headers, &cookie_jar, &config.access_token_cookie_name)
        .ok_or_else(|| {
            warn!(path = %path, "Missing authentication token");
            AppError::Unauthorized("Authentication required".to_string())
        })?;

    let claims = config
        .auth_service
        .authenticate(&token)
        .await
        .map_err(|e| {
            warn!(path = %path, error = %e, "Rejected access token");
            AppError::from(e)
        })?;

    let user = AuthenticatedUser {
        user_id: claims.user_id()?,
        session_id: claims.session_id()?,
        email: claims.email,
    };
    debug!(user_id = %user.user_id, path = %path, "Authenticated request");
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Authorization ヘッダーを優先し、無ければ Cookie を見る
fn extract_token(headers: &HeaderMap, cookie_jar: &CookieJar, cookie_name: &str) -> Option<String> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    auth_header.or_else(|| {
        cookie_jar
            .get(cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|s| !s.is_empty())
    })
}

fn should_skip_auth(path: &str, skip_paths: &[String]) -> bool {
    skip_paths.iter().any(|skip_path| path.starts_with(skip_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Cookie;

    #[test]
    fn test_should_skip_auth() {
        let skip_paths = vec!["/auth/signin".to_string(), "/auth/reset-password".to_string()];

        assert!(should_skip_auth("/auth/signin", &skip_paths));
        assert!(should_skip_auth("/auth/reset-password/confirm", &skip_paths));
        assert!(!should_skip_auth("/auth/me", &skip_paths));
        assert!(!should_skip_auth("/departments", &skip_paths));
    }

    #[test]
    fn test_extract_token_prefers_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer from-header".parse().unwrap());
        let jar = CookieJar::new().add(Cookie::new(ACCESS_TOKEN_COOKIE, "from-cookie"));

        assert_eq!(
            extract_token(&headers, &jar, ACCESS_TOKEN_COOKIE).as_deref(),
            Some("from-header")
        );
        assert_eq!(
            extract_token(&HeaderMap::new(), &jar, ACCESS_TOKEN_COOKIE).as_deref(),
            Some("from-cookie")
        );
        assert_eq!(
            extract_token(&HeaderMap::new(), &CookieJar::new(), ACCESS_TOKEN_COOKIE),
            None
        );
    }

    #[test]
    fn test_username_is_local_part() {
        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            session_id: Uuid::new_v4(),
            email: "taro.yamada@example.com".to_string(),
        };
        assert_eq!(user.username(), "taro.yamada");
    }
}
