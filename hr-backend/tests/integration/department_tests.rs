// tests/integration/department_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::app_helper::setup_authenticated_app;
use crate::common::request::json_request;
use crate::common::test_data::{create_department, get_json, id_of, send_json};

#[tokio::test]
async fn test_department_crud() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();

    let assembly = create_department(&app.router, token, "  Assembly ").await;
    assert_eq!(assembly["name"], "Assembly");
    assert_eq!(assembly["employee_count"], 0);
    create_department(&app.router, token, "Bonded").await;

    let (status, body) = get_json(&app.router, token, "/departments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["count"], 2);

    let id = id_of(&assembly);
    let (status, body) = send_json(
        &app.router,
        token,
        "PATCH",
        &format!("/departments/{}", id),
        json!({ "name": "Final Assembly" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Final Assembly");

    let res = app
        .router
        .clone()
        .oneshot(json_request("DELETE", &format!("/departments/{}", id), Some(token), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let (status, _) = get_json(&app.router, token, &format!("/departments/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_department_validation_and_unknown_ids() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();

    let (status, _) = send_json(&app.router, token, "POST", "/departments", json!({ "name": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&app.router, token, "/departments/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&app.router, token, &format!("/departments/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let res = app
        .router
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/departments/{}", Uuid::new_v4()),
            Some(token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
