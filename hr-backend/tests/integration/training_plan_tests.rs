// tests/integration/training_plan_tests.rs

use axum::http::StatusCode;
use hr_backend::api::dto::training_plan_dto::TrainingPlanDto;
use hr_backend::console::training_plan_grid::{PlanError, TrainingPlanGrid};
use serde_json::json;

use crate::common::app_helper::setup_authenticated_app;
use crate::common::test_data::{create_department, get_json, id_of, send_json};

#[tokio::test]
async fn test_actual_month_must_be_planned_first() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let department = id_of(&create_department(&app.router, token, "Assembly").await);

    let (status, body) = send_json(
        &app.router,
        token,
        "POST",
        "/training-plans",
        json!({
            "department_id": department,
            "training_topic": "5S Basics",
            "planned_months": ["Apr-25"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["department_name"], "Assembly");
    let plan_id = id_of(&body["data"]);
    let uri = format!("/training-plans/{}", plan_id);

    let (status, _) = send_json(&app.router, token, "PATCH", &uri, json!({ "actual_months": ["May-25"] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &app.router,
        token,
        "PATCH",
        &uri,
        json!({ "planned_months": ["May-25", "Apr-25"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(&app.router, token, "PATCH", &uri, json!({ "actual_months": ["May-25"] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["planned_months"], json!(["Apr-25", "May-25"]));
    assert_eq!(body["data"]["actual_months"], json!(["May-25"]));

    // 画面側でも同じ規則
    let plan: TrainingPlanDto = serde_json::from_value(body["data"].clone()).unwrap();
    let mut grid = TrainingPlanGrid::new(2025, vec![plan]);
    assert_eq!(
        grid.toggle_actual(plan_id, "Jun-25"),
        Err(PlanError::NotPlanned("Jun-25".into()))
    );
    assert!(grid.toggle_actual(plan_id, "Apr-25").is_ok());
}

#[tokio::test]
async fn test_plan_creation_rejects_bad_labels_and_unknown_department() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let department = id_of(&create_department(&app.router, token, "Assembly").await);

    let (status, _) = send_json(
        &app.router,
        token,
        "POST",
        "/training-plans",
        json!({
            "department_id": department,
            "training_topic": "Safety",
            "planned_months": ["April-2025"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &app.router,
        token,
        "POST",
        "/training-plans",
        json!({
            "department_id": uuid::Uuid::new_v4(),
            "training_topic": "Safety",
            "planned_months": ["Apr-25"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get_json(&app.router, token, "/training-plans").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}
