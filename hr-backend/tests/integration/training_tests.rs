// tests/integration/training_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::common::app_helper::setup_authenticated_app;
use crate::common::request::json_request;
use crate::common::test_data::{get_json, id_of, send_json};

#[tokio::test]
async fn test_create_training_with_participants() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();

    let (status, body) = send_json(
        &app.router,
        token,
        "POST",
        "/trainings",
        json!({
            "title": "Safety Briefing",
            "training_date": "2025-08-15",
            "training_time": "14:00",
            "participants": ["Suzuki", "  ", "Sato"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let data = &body["data"];
    assert_eq!(data["duration"], 60);
    assert_eq!(data["training_type"], "Team Training");
    // 主催者はサインイン中のユーザー名
    assert_eq!(data["organizer"], "hanako.sato");
    assert_eq!(data["participants"], json!(["Sato", "Suzuki"]));

    let id = id_of(data);
    let (status, body) = get_json(&app.router, token, &format!("/trainings/{}/participants", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(["Sato", "Suzuki"]));

    let (_, body) = get_json(&app.router, token, "/trainings").await;
    assert_eq!(body["meta"]["count"], 1);

    let res = app
        .router
        .clone()
        .oneshot(json_request("DELETE", &format!("/trainings/{}", id), Some(token), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let (status, _) = get_json(&app.router, token, &format!("/trainings/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_training_requires_title_and_valid_time() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();

    let (status, _) = send_json(
        &app.router,
        token,
        "POST",
        "/trainings",
        json!({ "title": "  ", "training_date": "2025-08-15", "training_time": "09:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &app.router,
        token,
        "POST",
        "/trainings",
        json!({ "title": "Kaizen", "training_date": "2025-08-15", "training_time": "9am" }),
    )
    .await;
    assert!(status.is_client_error());
}
