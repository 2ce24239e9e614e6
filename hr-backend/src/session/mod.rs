// src/session/mod.rs

//! サインイン状態の保持
//!
//! 認証バックエンドの現在のセッションを読み込み、以後はバックエンドが流す
//! [`AuthEvent`] だけで状態を書き換える。サインイン等の操作はバックエンドへ
//! 委譲するのみで、ローカルの状態はイベント経由でしか変わらない。

use crate::domain::user_model::display_name;
use crate::utils::jwt::JwtError;
use crate::utils::password::PasswordError;
use async_trait::async_trait;
use sea_orm::DbErr;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("User already registered")]
    EmailAlreadyRegistered,

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Weak password: {0}")]
    WeakPassword(String),

    #[error("Auth storage error: {0}")]
    Storage(String),
}

impl From<DbErr> for AuthError {
    fn from(err: DbErr) -> Self {
        AuthError::Storage(err.to_string())
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::WeakPassword(msg) => AuthError::WeakPassword(msg),
            other => AuthError::Storage(other.to_string()),
        }
    }
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EncodingError(_) | JwtError::ConfigurationError(_) => {
                AuthError::Storage(err.to_string())
            }
            other => AuthError::InvalidToken(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub user: SessionUser,
    pub access_token: String,
    pub refresh_token: String,
}

/// バックエンドから届く認証状態の変化
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
    TokenRefreshed(Session),
    /// リセットリンクからの復帰
    PasswordRecovery(Option<Session>),
}

impl AuthEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SignedIn(_) => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed(_) => "TOKEN_REFRESHED",
            Self::PasswordRecovery(_) => "PASSWORD_RECOVERY",
        }
    }

    /// イベント適用後のセッション
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::SignedIn(session) | Self::TokenRefreshed(session) => Some(session),
            Self::PasswordRecovery(session) => session.as_ref(),
            Self::SignedOut => None,
        }
    }
}

/// 認証バックエンド
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn get_session(&self) -> Result<Option<Session>, AuthError>;

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;
}

/// 画面から見た認証状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<SessionUser>,
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            user: None,
            session: None,
            loading: true,
        }
    }
}

impl SessionSnapshot {
    fn apply(&mut self, session: Option<Session>) {
        self.user = session.as_ref().map(|s| s.user.clone());
        self.session = session;
        self.loading = false;
    }

    /// メールアドレスの @ より前。未サインインなら "User"
    pub fn username(&self) -> String {
        display_name(self.user.as_ref().map(|u| u.email.as_str()))
    }
}

pub struct SessionContext {
    backend: Arc<dyn AuthBackend>,
    state: Arc<RwLock<SessionSnapshot>>,
    listener: JoinHandle<()>,
}

impl SessionContext {
    /// 現在のセッションを読み込み、イベントの購読を始める
    ///
    /// 読み込み中に届いたイベントも取りこぼさないよう、先に購読してから
    /// セッションを取得する。
    pub async fn initialize(backend: Arc<dyn AuthBackend>) -> Self {
        info!("Initializing session context");
        let mut events = backend.subscribe();
        let state = Arc::new(RwLock::new(SessionSnapshot::default()));

        let initial = match backend.get_session().await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Failed to load initial session");
                None
            }
        };
        state.write().await.apply(initial);

        let listener_state = Arc::clone(&state);
        let listener = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        debug!(event = event.name(), "Auth state changed");
                        listener_state.write().await.apply(event.session().cloned());
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Auth event listener lagged behind");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        Self {
            backend,
            state,
            listener,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.read().await.clone()
    }

    pub async fn user(&self) -> Option<SessionUser> {
        self.state.read().await.user.clone()
    }

    pub async fn session(&self) -> Option<Session> {
        self.state.read().await.session.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn username(&self) -> String {
        self.state.read().await.username()
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        info!(email = %email, "Signing up user");
        self.backend
            .sign_up(email, password)
            .await
            .inspect_err(|e| warn!(error = %e, "Sign up failed"))
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        info!(email = %email, "Signing in user");
        self.backend
            .sign_in(email, password)
            .await
            .inspect_err(|e| warn!(error = %e, "Sign in failed"))
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        info!("Signing out user");
        self.backend
            .sign_out()
            .await
            .inspect_err(|e| warn!(error = %e, "Sign out failed"))
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        info!(email = %email, "Requesting password reset");
        self.backend
            .reset_password(email)
            .await
            .inspect_err(|e| warn!(error = %e, "Password reset failed"))
    }
}

impl Drop for SessionContext {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::Mutex;

    /// メモリ上のバックエンド。パスワードは "secret1" のみ通す
    struct FakeBackend {
        events: broadcast::Sender<AuthEvent>,
        current: Mutex<Option<Session>>,
    }

    impl FakeBackend {
        fn new(current: Option<Session>) -> Arc<Self> {
            let (events, _) = broadcast::channel(16);
            Arc::new(Self {
                events,
                current: Mutex::new(current),
            })
        }
    }

    fn session_for(email: &str) -> Session {
        Session {
            id: Uuid::new_v4(),
            user: SessionUser {
                id: Uuid::new_v4(),
                email: email.to_string(),
            },
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
        }
    }

    #[async_trait]
    impl AuthBackend for FakeBackend {
        async fn get_session(&self) -> Result<Option<Session>, AuthError> {
            Ok(self.current.lock().await.clone())
        }

        fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
            self.events.subscribe()
        }

        async fn sign_up(&self, _email: &str, password: &str) -> Result<(), AuthError> {
            if password.len() < 6 {
                return Err(AuthError::WeakPassword("too short".into()));
            }
            Ok(())
        }

        async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
            if password != "secret1" {
                return Err(AuthError::InvalidCredentials);
            }
            let session = session_for(email);
            *self.current.lock().await = Some(session.clone());
            let _ = self.events.send(AuthEvent::SignedIn(session));
            Ok(())
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            *self.current.lock().await = None;
            let _ = self.events.send(AuthEvent::SignedOut);
            Ok(())
        }

        async fn reset_password(&self, _email: &str) -> Result<(), AuthError> {
            Ok(())
        }
    }

    async fn wait_until<F>(ctx: &SessionContext, predicate: F)
    where
        F: Fn(&SessionSnapshot) -> bool,
    {
        for _ in 0..100 {
            if predicate(&ctx.snapshot().await) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("session state did not reach the expected value");
    }

    #[tokio::test]
    async fn test_initialize_without_session() {
        let ctx = SessionContext::initialize(FakeBackend::new(None)).await;
        let snapshot = ctx.snapshot().await;

        assert!(!snapshot.loading);
        assert!(snapshot.user.is_none());
        assert_eq!(ctx.username().await, "User");
    }

    #[tokio::test]
    async fn test_initialize_with_existing_session() {
        let backend = FakeBackend::new(Some(session_for("taro.yamada@example.com")));
        let ctx = SessionContext::initialize(backend).await;

        assert_eq!(ctx.username().await, "taro.yamada");
        assert!(ctx.session().await.is_some());
    }

    #[tokio::test]
    async fn test_state_follows_events() {
        let ctx = SessionContext::initialize(FakeBackend::new(None)).await;

        ctx.sign_in("hanako@example.com", "secret1").await.unwrap();
        wait_until(&ctx, |s| s.user.is_some()).await;
        assert_eq!(ctx.username().await, "hanako");

        ctx.sign_out().await.unwrap();
        wait_until(&ctx, |s| s.user.is_none()).await;
        assert!(ctx.session().await.is_none());
    }

    #[tokio::test]
    async fn test_failed_sign_in_leaves_state_untouched() {
        let ctx = SessionContext::initialize(FakeBackend::new(None)).await;

        let result = ctx.sign_in("hanako@example.com", "wrong").await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
        assert!(ctx.user().await.is_none());
        assert!(!ctx.is_loading().await);
    }

    #[test]
    fn test_event_session() {
        let session = session_for("a@b.jp");
        assert_eq!(
            AuthEvent::TokenRefreshed(session.clone()).session(),
            Some(&session)
        );
        assert_eq!(AuthEvent::SignedOut.session(), None);
        assert_eq!(AuthEvent::PasswordRecovery(None).name(), "PASSWORD_RECOVERY");
    }
}
