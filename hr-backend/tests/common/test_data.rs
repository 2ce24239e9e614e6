// tests/common/test_data.rs
use super::request::{json_request, read_json};
use axum::{http::StatusCode, Router};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

pub fn id_of(value: &Value) -> Uuid {
    Uuid::parse_str(value["id"].as_str().unwrap()).unwrap()
}

pub async fn create_department(app: &Router, token: &str, name: &str) -> Value {
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/departments",
            Some(token),
            Some(json!({ "name": name })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    read_json(res).await["data"].clone()
}

pub async fn create_employee(
    app: &Router,
    token: &str,
    department_id: Uuid,
    name: &str,
    code: &str,
) -> Value {
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/departments/{}/employees", department_id),
            Some(token),
            Some(json!({ "name": name, "employee_code": code, "position": "Operator" })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    read_json(res).await["data"].clone()
}

pub async fn create_skill(app: &Router, token: &str, department_id: Uuid, name: &str) -> Value {
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/departments/{}/skills", department_id),
            Some(token),
            Some(json!({ "name": name })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    read_json(res).await["data"].clone()
}

pub async fn get_json(app: &Router, token: &str, uri: &str) -> (StatusCode, Value) {
    let res = app
        .clone()
        .oneshot(json_request("GET", uri, Some(token), None))
        .await
        .unwrap();
    let status = res.status();
    (status, read_json(res).await)
}

pub async fn send_json(
    app: &Router,
    token: &str,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let res = app
        .clone()
        .oneshot(json_request(method, uri, Some(token), Some(body)))
        .await
        .unwrap();
    let status = res.status();
    (status, read_json(res).await)
}
