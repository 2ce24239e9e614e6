// tests/integration/skill_tests.rs

use axum::http::StatusCode;
use hr_backend::api::dto::employee_dto::EmployeeDto;
use hr_backend::console::skill_matrix::SkillMatrixView;
use hr_backend::domain::skill_level::SkillLevel;
use serde_json::json;
use std::collections::BTreeMap;
use tower::ServiceExt;

use crate::common::app_helper::setup_authenticated_app;
use crate::common::request::json_request;
use crate::common::test_data::{
    create_department, create_employee, create_skill, get_json, id_of, send_json,
};

#[tokio::test]
async fn test_replacing_skills_keeps_only_the_latest_mapping() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let department = id_of(&create_department(&app.router, token, "Assembly").await);
    create_skill(&app.router, token, department, "Welding").await;
    create_skill(&app.router, token, department, "Painting").await;
    let employee = id_of(&create_employee(&app.router, token, department, "Sato", "EMP-001").await);
    let uri = format!("/employees/{}/skills", employee);

    let (status, _) = send_json(&app.router, token, "PUT", &uri, json!({ "skills": { "Welding": "L3" } })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(&app.router, token, "PUT", &uri, json!({ "skills": { "Painting": "L2" } })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["skills"], json!({ "Painting": "L2" }));

    let (_, body) = get_json(&app.router, token, &uri).await;
    assert_eq!(body["data"]["skills"], json!({ "Painting": "L2" }));
    assert_eq!(body["data"]["summary"]["text"], "L2 = 1 out of 1 skills");
}

#[tokio::test]
async fn test_unknown_skill_names_are_dropped() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let department = id_of(&create_department(&app.router, token, "Assembly").await);
    create_skill(&app.router, token, department, "Welding").await;
    let employee = id_of(&create_employee(&app.router, token, department, "Sato", "EMP-001").await);

    let (status, body) = send_json(
        &app.router,
        token,
        "PUT",
        &format!("/employees/{}/skills", employee),
        json!({ "skills": { "Welding": "L4", "Juggling": "L1" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["skills"], json!({ "Welding": "L4" }));
    assert_eq!(body["data"]["summary"]["counts"]["L4"], 1);
    assert_eq!(body["data"]["summary"]["counts"]["L1"], 0);
}

#[tokio::test]
async fn test_employee_without_skills_renders_as_na() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let department = id_of(&create_department(&app.router, token, "Assembly").await);
    create_skill(&app.router, token, department, "Welding").await;
    create_skill(&app.router, token, department, "Painting").await;
    let employee = create_employee(&app.router, token, department, "Sato", "EMP-001").await;
    let employee_id = id_of(&employee);

    let (status, body) = get_json(&app.router, token, &format!("/employees/{}/skills", employee_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["skills"], json!({}));
    assert_eq!(body["data"]["summary"]["text"], "No skills rated");

    let (_, skills) = get_json(&app.router, token, &format!("/departments/{}/skills", department)).await;
    let skill_names: Vec<String> = skills["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect();
    let employee: EmployeeDto = serde_json::from_value(employee).unwrap();

    let mut matrix = SkillMatrixView::new(skill_names.clone(), vec![employee]);
    matrix.load_skills(employee_id, BTreeMap::new());
    for skill in &skill_names {
        assert_eq!(matrix.level(employee_id, skill), SkillLevel::NA);
    }
}

#[tokio::test]
async fn test_skill_catalog_seed_and_duplicates() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let department = id_of(&create_department(&app.router, token, "Bonded").await);
    create_skill(&app.router, token, department, "Wastage Management").await;

    let (status, _) = send_json(
        &app.router,
        token,
        "POST",
        &format!("/departments/{}/skills", department),
        json!({ "name": "Wastage Management" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let seed_uri = format!("/departments/{}/skills/seed", department);
    let (status, body) = send_json(
        &app.router,
        token,
        "POST",
        &seed_uri,
        json!({ "catalog": "bonded" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["catalog"], "bonded");
    assert_eq!(body["data"]["skipped"], 1);
    let inserted = body["data"]["inserted"].as_array().unwrap().len();

    // 二度目は全て登録済み
    let (_, body) = send_json(
        &app.router,
        token,
        "POST",
        &seed_uri,
        json!({ "catalog": "bonded" }),
    )
    .await;
    assert_eq!(body["data"]["inserted"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["skipped"], inserted + 1);
}

#[tokio::test]
async fn test_seed_without_catalog_ignores_department_name() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let department = id_of(&create_department(&app.router, token, "Bonded").await);

    let (status, body) = send_json(
        &app.router,
        token,
        "POST",
        &format!("/departments/{}/skills/seed", department),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["catalog"], "manufacturing");
    assert_eq!(body["data"]["inserted"].as_array().unwrap().len(), 19);
}

#[tokio::test]
async fn test_whitespace_variants_of_a_skill_name_collapse_to_one_row() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let department = id_of(&create_department(&app.router, token, "Assembly").await);
    create_skill(&app.router, token, department, "Welding").await;
    let employee = id_of(&create_employee(&app.router, token, department, "Sato", "EMP-001").await);
    let uri = format!("/employees/{}/skills", employee);

    let (status, _) = send_json(&app.router, token, "PUT", &uri, json!({ "skills": { "Welding": "L3" } })).await;
    assert_eq!(status, StatusCode::OK);

    // キーは BTreeMap 順 (" Welding" < "Welding") に処理され、後勝ち
    let (status, body) = send_json(
        &app.router,
        token,
        "PUT",
        &uri,
        json!({ "skills": { "Welding": "L1", " Welding": "L4" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["skills"], json!({ "Welding": "L1" }));

    let (_, body) = get_json(&app.router, token, &uri).await;
    assert_eq!(body["data"]["skills"], json!({ "Welding": "L1" }));
    assert_eq!(body["data"]["summary"]["text"], "L1 = 1 out of 1 skills");
}

#[tokio::test]
async fn test_deleting_skill_removes_it_from_list() {
    let (app, user) = setup_authenticated_app().await;
    let token = user.access_token.as_str();
    let department = id_of(&create_department(&app.router, token, "Assembly").await);
    let skill = create_skill(&app.router, token, department, "Welding").await;

    let res = app
        .router
        .clone()
        .oneshot(json_request("DELETE", &format!("/skills/{}", id_of(&skill)), Some(token), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let (_, body) = get_json(&app.router, token, &format!("/departments/{}/skills", department)).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}
