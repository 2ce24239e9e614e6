// tests/integration/employee_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::app_helper::setup_authenticated_app;
use crate::common::request::json_request;
use crate::common::test_data::{create_department, create_employee, get_json, id_of, send_json};

async fn employee_count(app: &axum::Router, token: &str, department_id: Uuid) -> i64 {
    let (_, body) = get_json(app, token, &format!("/departments/{}", department_id)).await;
    body["data"]["employee_count"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_and_delete_keep_employee_count_in_step() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let department = id_of(&create_department(&app.router, token, "Assembly").await);

    let first = create_employee(&app.router, token, department, "Sato Hanako", "EMP-001").await;
    create_employee(&app.router, token, department, "Suzuki Ichiro", "EMP-002").await;
    assert_eq!(employee_count(&app.router, token, department).await, 2);

    let (status, body) = get_json(&app.router, token, &format!("/departments/{}/employees", department)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let res = app
        .router
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/employees/{}", id_of(&first)),
            Some(token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(employee_count(&app.router, token, department).await, 1);

    let (status, _) = get_json(&app.router, token, &format!("/employees/{}", id_of(&first))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_employee_code_is_rejected() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let assembly = id_of(&create_department(&app.router, token, "Assembly").await);
    let bonded = id_of(&create_department(&app.router, token, "Bonded").await);

    create_employee(&app.router, token, assembly, "Sato Hanako", "EMP-001").await;
    let other = create_employee(&app.router, token, bonded, "Tanaka Jiro", "EMP-002").await;

    // 別部署でも同じコードは使えない
    let (status, _) = send_json(
        &app.router,
        token,
        "POST",
        &format!("/departments/{}/employees", bonded),
        json!({ "name": "Kato", "employee_code": "EMP-001", "position": "Operator" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send_json(
        &app.router,
        token,
        "PATCH",
        &format!("/employees/{}", id_of(&other)),
        json!({ "employee_code": "EMP-001" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // 失敗した登録でカウンタは動かない
    assert_eq!(employee_count(&app.router, token, bonded).await, 1);
}

#[tokio::test]
async fn test_moving_employee_updates_both_counts() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let assembly = id_of(&create_department(&app.router, token, "Assembly").await);
    let bonded = id_of(&create_department(&app.router, token, "Bonded").await);
    let employee = create_employee(&app.router, token, assembly, "Sato Hanako", "EMP-001").await;

    let (status, body) = send_json(
        &app.router,
        token,
        "PATCH",
        &format!("/employees/{}", id_of(&employee)),
        json!({ "department_id": bonded, "position": "Leader" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["department_name"], "Bonded");
    assert_eq!(body["data"]["position"], "Leader");

    assert_eq!(employee_count(&app.router, token, assembly).await, 0);
    assert_eq!(employee_count(&app.router, token, bonded).await, 1);
}

#[tokio::test]
async fn test_employee_in_unknown_department() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();

    let (status, _) = send_json(
        &app.router,
        token,
        "POST",
        &format!("/departments/{}/employees", Uuid::new_v4()),
        json!({ "name": "Kato", "employee_code": "EMP-009", "position": "Operator" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(
        &app.router,
        token,
        &format!("/departments/{}/employees", Uuid::new_v4()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
