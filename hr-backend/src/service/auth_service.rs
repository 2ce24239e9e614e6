// src/service/auth_service.rs

use crate::api::dto::auth_dto::{AuthResponse, UserDto};
use crate::db::DbPool;
use crate::domain::user_model;
use crate::repository::auth_session_repository::AuthSessionRepository;
use crate::repository::password_reset_token_repository::PasswordResetTokenRepository;
use crate::repository::user_repository::UserRepository;
use crate::session::{AuthBackend, AuthError, AuthEvent, Session, SessionUser};
use crate::utils::jwt::{utils as token_utils, AccessTokenClaims, JwtManager, TokenPair};
use crate::utils::password::{validate_password_length, PasswordManager};
use crate::utils::validation::common::EMAIL_REGEX;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::TransactionTrait;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// リセットトークンの有効期間 (分)
pub const PASSWORD_RESET_EXPIRY_MINUTES: i64 = 60;

/// 認証サービス
///
/// アクセストークンは JWT、リフレッシュトークンは不透明なランダム文字列で、
/// DB には SHA-256 ハッシュだけを保存する。
pub struct AuthService {
    db: DbPool,
    jwt_manager: Arc<JwtManager>,
    password_manager: Arc<PasswordManager>,
    default_reset_redirect: String,
}

fn normalize_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();
    if !EMAIL_REGEX.is_match(&email) {
        return Err(AuthError::InvalidEmail(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(email)
}

impl AuthService {
    pub fn new(
        db: DbPool,
        jwt_manager: Arc<JwtManager>,
        password_manager: Arc<PasswordManager>,
        default_reset_redirect: String,
    ) -> Self {
        Self {
            db,
            jwt_manager,
            password_manager,
            default_reset_redirect,
        }
    }

    pub fn jwt_manager(&self) -> &JwtManager {
        &self.jwt_manager
    }

    /// ユーザー登録。セッションは作らない (サインインは別操作)
    #[instrument(skip(self, password))]
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<UserDto, AuthError> {
        let email = normalize_email(email)?;
        validate_password_length(password)?;

        if UserRepository::find_by_email(&self.db, &email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let password_hash = self.password_manager.hash_password(password)?;
        let user = UserRepository::create(&self.db, email, password_hash)
            .await
            .map_err(|e| {
                if crate::error::AppError::is_unique_violation(&e) {
                    AuthError::EmailAlreadyRegistered
                } else {
                    AuthError::from(e)
                }
            })?;

        info!(user_id = %user.id, email = %user.email, "User registered");
        Ok(user.into())
    }

    /// 資格情報を確認し、セッションを作ってトークンを発行する
    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let email = email.trim().to_lowercase();
        let user = match UserRepository::find_by_email(&self.db, &email).await? {
            Some(user) => user,
            None => {
                warn!(email = %email, "Sign in attempt for unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self
            .password_manager
            .verify_password(password, &user.password_hash)?
        {
            warn!(user_id = %user.id, "Sign in attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let refresh_token = token_utils::generate_opaque_token();
        let session = AuthSessionRepository::create(
            &self.db,
            user.id,
            token_utils::hash_token(&refresh_token),
            self.jwt_manager.refresh_token_expires_at(),
        )
        .await?;
        UserRepository::touch_last_sign_in(&self.db, user.id).await?;

        let user = user_model::Model {
            last_sign_in_at: Some(Utc::now()),
            ..user
        };
        let response = self.issue(user, session.id, refresh_token)?;
        info!(user_id = %response.user.id, session_id = %response.session_id, "User signed in");
        Ok(response)
    }

    /// リフレッシュトークンを付け替えて新しいトークン組を返す
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, AuthError> {
        let session =
            AuthSessionRepository::find_by_token_hash(&self.db, &token_utils::hash_token(refresh_token))
                .await?
                .filter(|s| s.is_active(Utc::now()))
                .ok_or_else(|| {
                    AuthError::InvalidToken("Refresh token is invalid or has expired".to_string())
                })?;

        let user = UserRepository::find_by_id(&self.db, session.user_id)
            .await?
            .ok_or_else(|| AuthError::InvalidToken("User no longer exists".to_string()))?;

        let new_refresh_token = token_utils::generate_opaque_token();
        let session = AuthSessionRepository::rotate(
            &self.db,
            session,
            token_utils::hash_token(&new_refresh_token),
            self.jwt_manager.refresh_token_expires_at(),
        )
        .await?;

        debug!(session_id = %session.id, "Session refreshed");
        self.issue(user, session.id, new_refresh_token)
    }

    /// セッションを失効させる。失効済みでもエラーにしない
    pub async fn sign_out(&self, session_id: Uuid) -> Result<(), AuthError> {
        let rows = AuthSessionRepository::revoke(&self.db, session_id).await?;
        if rows == 0 {
            debug!(session_id = %session_id, "Session was already revoked");
        }
        info!(session_id = %session_id, "User signed out");
        Ok(())
    }

    /// アクセストークンを検証し、セッションが有効なことを確かめる
    pub async fn authenticate(&self, access_token: &str) -> Result<AccessTokenClaims, AuthError> {
        let claims = self.jwt_manager.verify_access_token(access_token)?;
        let session_id = claims.session_id()?;

        let active = AuthSessionRepository::find_by_id(&self.db, session_id)
            .await?
            .is_some_and(|s| s.is_active(Utc::now()));
        if !active {
            return Err(AuthError::InvalidToken("Session has ended".to_string()));
        }
        Ok(claims)
    }

    pub async fn current_user(&self, user_id: Uuid) -> Result<UserDto, AuthError> {
        UserRepository::find_by_id(&self.db, user_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AuthError::InvalidToken("User no longer exists".to_string()))
    }

    /// リセット用のワンタイムトークンを発行し、リンクをログに出す
    ///
    /// 未登録のメールアドレスでも成功を返す。戻り値のリンクは呼び出し側で
    /// 応答に含めないこと。
    #[instrument(skip(self, redirect_to))]
    pub async fn reset_password(
        &self,
        email: &str,
        redirect_to: Option<String>,
    ) -> Result<Option<String>, AuthError> {
        let email = normalize_email(email)?;
        let Some(user) = UserRepository::find_by_email(&self.db, &email).await? else {
            info!("Password reset requested for unknown email");
            return Ok(None);
        };

        let token = token_utils::generate_opaque_token();
        PasswordResetTokenRepository::create(
            &self.db,
            user.id,
            token_utils::hash_token(&token),
            Utc::now() + Duration::minutes(PASSWORD_RESET_EXPIRY_MINUTES),
        )
        .await?;

        let redirect = redirect_to
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| self.default_reset_redirect.clone());
        let link = format!("{}?token={}", redirect, token);
        info!(user_id = %user.id, reset_link = %link, "Password reset link issued");
        Ok(Some(link))
    }

    /// リセットトークンを消費してパスワードを更新し、既存セッションを全て失効させる
    #[instrument(skip(self, token, new_password))]
    pub async fn confirm_password_reset(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<UserDto, AuthError> {
        let password_hash = self.password_manager.hash_password(new_password)?;
        let invalid = || AuthError::InvalidToken("Reset link is invalid or has expired".to_string());

        let txn = self.db.begin().await?;
        let reset = PasswordResetTokenRepository::find_by_token_hash(&txn, &token_utils::hash_token(token))
            .await?
            .filter(|t| t.is_usable(Utc::now()))
            .ok_or_else(invalid)?;

        if PasswordResetTokenRepository::mark_used(&txn, reset.id).await? == 0 {
            return Err(invalid());
        }
        UserRepository::update_password_hash(&txn, reset.user_id, password_hash).await?;
        let revoked = AuthSessionRepository::revoke_all_for_user(&txn, reset.user_id).await?;
        let user = UserRepository::find_by_id(&txn, reset.user_id)
            .await?
            .ok_or_else(invalid)?;
        txn.commit().await?;

        info!(user_id = %user.id, revoked_sessions = revoked, "Password reset completed");
        Ok(user.into())
    }

    fn issue(
        &self,
        user: user_model::Model,
        session_id: Uuid,
        refresh_token: String,
    ) -> Result<AuthResponse, AuthError> {
        let access_token = self
            .jwt_manager
            .generate_access_token(user.id, session_id, &user.email)?;
        let tokens =
            TokenPair::create_with_jwt_manager(access_token, refresh_token, &self.jwt_manager);
        Ok(AuthResponse {
            user: user.into(),
            session_id,
            tokens,
        })
    }
}

impl From<&AuthResponse> for Session {
    fn from(response: &AuthResponse) -> Self {
        Session {
            id: response.session_id,
            user: SessionUser {
                id: response.user.id,
                email: response.user.email.clone(),
            },
            access_token: response.tokens.access_token.clone(),
            refresh_token: response.tokens.refresh_token.clone(),
        }
    }
}

/// 同じプロセス内から [`AuthService`] を使うクライアント
///
/// 一人分のセッションを保持し、状態が変わるたびに [`AuthEvent`] を流す。
pub struct ServiceAuthBackend {
    service: Arc<AuthService>,
    current: RwLock<Option<Session>>,
    events: broadcast::Sender<AuthEvent>,
}

impl ServiceAuthBackend {
    pub fn new(service: Arc<AuthService>) -> Self {
        let (events, _) = broadcast::channel(32);
        Self {
            service,
            current: RwLock::new(None),
            events,
        }
    }

    fn emit(&self, event: AuthEvent) {
        // 購読者がいなければ捨てる
        let _ = self.events.send(event);
    }

    /// 保持しているリフレッシュトークンでトークンを更新する
    pub async fn refresh_session(&self) -> Result<(), AuthError> {
        let refresh_token = self
            .current
            .read()
            .await
            .as_ref()
            .map(|s| s.refresh_token.clone())
            .ok_or_else(|| AuthError::InvalidToken("No active session".to_string()))?;

        let response = self.service.refresh(&refresh_token).await?;
        let session = Session::from(&response);
        *self.current.write().await = Some(session.clone());
        self.emit(AuthEvent::TokenRefreshed(session));
        Ok(())
    }

    /// リセットリンクのトークンで新しいパスワードを設定する
    pub async fn recover_password(&self, token: &str, new_password: &str) -> Result<(), AuthError> {
        self.service
            .confirm_password_reset(token, new_password)
            .await?;
        *self.current.write().await = None;
        self.emit(AuthEvent::PasswordRecovery(None));
        Ok(())
    }
}

#[async_trait]
impl AuthBackend for ServiceAuthBackend {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.current.read().await.clone())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.service.sign_up(email, password).await.map(|_| ())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self.service.sign_in(email, password).await?;
        let session = Session::from(&response);
        *self.current.write().await = Some(session.clone());
        self.emit(AuthEvent::SignedIn(session));
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        // 失効に成功するまで手元のセッションは残す
        let current = self.current.read().await.clone();
        if let Some(session) = current {
            self.service.sign_out(session.id).await?;
        }
        *self.current.write().await = None;
        self.emit(AuthEvent::SignedOut);
        Ok(())
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        self.service.reset_password(email, None).await.map(|_| ())
    }
}
