// tests/common/app_helper.rs
use super::db::TestDatabase;
use super::request::{json_request, read_json};
use axum::{http::StatusCode, Router};
use hr_backend::api::{create_router, AppState};
use hr_backend::config::AppConfig;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub db: TestDatabase,
}

pub async fn setup_app() -> TestApp {
    let db = TestDatabase::new().await;
    let state = AppState::new(db.connection.clone(), &AppConfig::for_testing())
        .expect("build app state");
    let router = create_router(state.clone());
    TestApp { router, state, db }
}

#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// サインアップしてからサインインする
pub async fn signup_and_signin(app: &Router, email: &str, password: &str) -> TestUser {
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/signup",
            None,
            Some(json!({ "email": email, "password": password, "confirm_password": password })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/signin",
            None,
            Some(json!({ "email": email, "password": password })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    let data = &body["data"];

    TestUser {
        id: Uuid::parse_str(data["user"]["id"].as_str().unwrap()).unwrap(),
        email: data["user"]["email"].as_str().unwrap().to_string(),
        access_token: data["tokens"]["access_token"].as_str().unwrap().to_string(),
        refresh_token: data["tokens"]["refresh_token"].as_str().unwrap().to_string(),
    }
}

/// 既定のユーザーでサインイン済みのアプリ
pub async fn setup_authenticated_app() -> (TestApp, TestUser) {
    let app = setup_app().await;
    let user = signup_and_signin(&app.router, "hanako.sato@example.com", "genba123").await;
    (app, user)
}
