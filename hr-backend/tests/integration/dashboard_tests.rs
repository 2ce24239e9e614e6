// tests/integration/dashboard_tests.rs

use axum::http::StatusCode;
use chrono::NaiveDate;
use serde_json::json;

use crate::common::app_helper::setup_authenticated_app;
use crate::common::test_data::{create_department, create_employee, get_json, id_of, send_json};

#[tokio::test]
async fn test_dashboard_overview_sums_departments() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let assembly = id_of(&create_department(&app.router, token, "Assembly").await);
    let bonded = id_of(&create_department(&app.router, token, "Bonded").await);
    create_employee(&app.router, token, assembly, "Sato", "EMP-001").await;
    create_employee(&app.router, token, assembly, "Suzuki", "EMP-002").await;
    create_employee(&app.router, token, bonded, "Tanaka", "EMP-003").await;

    let (status, _) = send_json(
        &app.router,
        token,
        "PUT",
        "/training-data/2025/Mar",
        json!({ "planned": 15, "done": 10, "pending": 5 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(&app.router, token, "/dashboard?year=2025").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["department_count"], 2);
    assert_eq!(body["data"]["total_employees"], 3);
    assert_eq!(body["data"]["training_data"].as_array().unwrap().len(), 1);

    // 研修回数は指定日の月の planned
    let march = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
    let overview = app.state.dashboard_service.overview(2025, march).await.unwrap();
    assert_eq!(overview.training_sessions, 15);
    assert_eq!(overview.current_month, "Mar");

    let april = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    let overview = app.state.dashboard_service.overview(2025, april).await.unwrap();
    assert_eq!(overview.training_sessions, 0);
}
