// tests/integration/session_tests.rs

use hr_backend::console::app_shell::{AppShell, View};
use hr_backend::service::auth_service::ServiceAuthBackend;
use hr_backend::session::{AuthBackend, AuthEvent, SessionContext};
use sea_orm::ConnectionTrait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::TryRecvError;

use crate::common::app_helper::setup_app;

async fn wait_for<F, Fut>(mut check: F)
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    for _ in 0..50 {
        if check().await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("condition was not met in time");
}

#[tokio::test]
async fn test_session_context_follows_backend_events() {
    let app = setup_app().await;
    let backend = Arc::new(ServiceAuthBackend::new(app.state.auth_service.clone()));
    let context = SessionContext::initialize(backend.clone()).await;

    assert!(!context.is_loading().await);
    assert!(context.user().await.is_none());

    let mut shell = AppShell::default();
    assert_eq!(shell.resolve(&context.snapshot().await), View::Home);

    context.sign_up("jiro.kato@example.com", "genba123").await.unwrap();
    // サインアップだけではセッションは作られない
    assert!(context.session().await.is_none());

    context.sign_in("jiro.kato@example.com", "genba123").await.unwrap();
    wait_for(|| async { context.user().await.is_some() }).await;
    assert_eq!(context.username().await, "jiro.kato");

    shell.auth_success("jiro.kato");
    assert_eq!(
        shell.resolve(&context.snapshot().await),
        View::Dashboard {
            username: "jiro.kato".to_string()
        }
    );

    context.sign_out().await.unwrap();
    wait_for(|| async { context.user().await.is_none() }).await;
}

#[tokio::test]
async fn test_backend_emits_refresh_event() {
    let app = setup_app().await;
    let backend = ServiceAuthBackend::new(app.state.auth_service.clone());
    let mut events = backend.subscribe();

    backend.sign_up("ichiro@example.com", "genba123").await.unwrap();
    backend.sign_in("ichiro@example.com", "genba123").await.unwrap();
    let first = match events.recv().await.unwrap() {
        AuthEvent::SignedIn(session) => session,
        other => panic!("unexpected event: {}", other.name()),
    };

    backend.refresh_session().await.unwrap();
    match events.recv().await.unwrap() {
        AuthEvent::TokenRefreshed(session) => {
            assert_eq!(session.user.id, first.user.id);
            assert_ne!(session.refresh_token, first.refresh_token);
        }
        other => panic!("unexpected event: {}", other.name()),
    }

    let bad = backend.sign_in("ichiro@example.com", "wrong-pass").await;
    assert!(bad.is_err());
    assert!(backend.get_session().await.unwrap().is_some());
}

#[tokio::test]
async fn test_failed_sign_out_keeps_session_and_emits_nothing() {
    let app = setup_app().await;
    let backend = ServiceAuthBackend::new(app.state.auth_service.clone());
    let mut events = backend.subscribe();

    backend.sign_up("saburo@example.com", "genba123").await.unwrap();
    backend.sign_in("saburo@example.com", "genba123").await.unwrap();
    assert!(matches!(events.recv().await.unwrap(), AuthEvent::SignedIn(_)));

    // セッション表を消して失効処理を失敗させる
    app.db
        .connection
        .execute_unprepared("DROP TABLE auth_sessions")
        .await
        .unwrap();

    assert!(backend.sign_out().await.is_err());
    assert!(backend.get_session().await.unwrap().is_some());
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
}
