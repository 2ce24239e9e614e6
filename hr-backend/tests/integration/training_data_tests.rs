// tests/integration/training_data_tests.rs

use axum::http::StatusCode;
use serde_json::json;

use crate::common::app_helper::setup_authenticated_app;
use crate::common::test_data::{get_json, send_json};

#[tokio::test]
async fn test_update_month_twice_keeps_one_row() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();

    let (status, _) = send_json(
        &app.router,
        token,
        "PUT",
        "/training-data/2025/Mar",
        json!({ "planned": 10, "done": 4, "pending": 6 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // 省略したカウンタは前の値のまま
    let (status, body) = send_json(
        &app.router,
        token,
        "PUT",
        "/training-data/2025/Mar",
        json!({ "done": 7 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["planned"], 10);
    assert_eq!(body["data"]["done"], 7);

    let (_, body) = get_json(&app.router, token, "/training-data/2025").await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["month"], "Mar");
    assert_eq!(rows[0]["pending"], 6);
}

#[tokio::test]
async fn test_invalid_month_and_negative_values() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();

    let (status, _) = send_json(
        &app.router,
        token,
        "PUT",
        "/training-data/2025/Smarch",
        json!({ "planned": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &app.router,
        token,
        "PUT",
        "/training-data/2025/Jan",
        json!({ "planned": -1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_year_returns_rows_in_calendar_order() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();

    let (status, body) = send_json(
        &app.router,
        token,
        "PUT",
        "/training-data/2026",
        json!({ "months": [
            { "month": "Dec", "planned": 28, "done": 24, "pending": 4 },
            { "month": "Jan", "planned": 12, "done": 8, "pending": 4 },
            { "month": "Jun", "planned": 20, "done": 16, "pending": 4 }
        ] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let months: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["month"].as_str().unwrap())
        .collect();
    assert_eq!(months, vec!["Jan", "Jun", "Dec"]);

    // 別の年には影響しない
    let (_, body) = get_json(&app.router, token, "/training-data/2025").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}
