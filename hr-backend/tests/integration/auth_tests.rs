// tests/integration/auth_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::common::app_helper::{setup_app, signup_and_signin};
use crate::common::request::{json_request, read_json};

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = setup_app().await;

    let res = app
        .router
        .clone()
        .oneshot(json_request("GET", "/departments", None, None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app
        .router
        .clone()
        .oneshot(json_request("GET", "/departments", Some("not-a-jwt"), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = setup_app().await;

    let res = app
        .router
        .clone()
        .oneshot(json_request("GET", "/health", None, None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(read_json(res).await["status"], "ok");
}

#[tokio::test]
async fn test_signup_rejects_mismatch_short_password_and_duplicates() {
    let app = setup_app().await;

    let res = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/signup",
            None,
            Some(json!({ "email": "a@example.com", "password": "genba123", "confirm_password": "genba124" })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/signup",
            None,
            Some(json!({ "email": "a@example.com", "password": "12345" })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    signup_and_signin(&app.router, "a@example.com", "genba123").await;

    // 大文字小文字違いも同じアドレスとして扱う
    let res = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/signup",
            None,
            Some(json!({ "email": "A@Example.com", "password": "genba123" })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signin_with_wrong_password_is_unauthorized() {
    let app = setup_app().await;
    signup_and_signin(&app.router, "taro@example.com", "genba123").await;

    let res = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/signin",
            None,
            Some(json!({ "email": "taro@example.com", "password": "wrong-pass" })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_refresh_and_signout() {
    let app = setup_app().await;
    let user = signup_and_signin(&app.router, "taro.yamada@example.com", "genba123").await;

    let res = app
        .router
        .clone()
        .oneshot(json_request("GET", "/auth/me", Some(&user.access_token), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["username"], "taro.yamada");
    assert_eq!(body["data"]["id"], user.id.to_string());

    // リフレッシュトークンは使い捨て
    let res = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/refresh",
            None,
            Some(json!({ "refresh_token": user.refresh_token })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let refreshed = read_json(res).await;
    let new_access = refreshed["data"]["tokens"]["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let res = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/refresh",
            None,
            Some(json!({ "refresh_token": user.refresh_token })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app
        .router
        .clone()
        .oneshot(json_request("POST", "/auth/signout", Some(&new_access), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // 失効したセッションのトークンは使えない
    let res = app
        .router
        .clone()
        .oneshot(json_request("GET", "/auth/me", Some(&new_access), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reset_password_flow() {
    let app = setup_app().await;
    let user = signup_and_signin(&app.router, "reset@example.com", "genba123").await;

    // 未登録のアドレスでも同じ応答
    let res = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/reset-password",
            None,
            Some(json!({ "email": "nobody@example.com" })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let link = app
        .state
        .auth_service
        .reset_password("reset@example.com", Some("https://hr.example.com/reset".to_string()))
        .await
        .unwrap()
        .expect("link for registered user");
    assert!(link.starts_with("https://hr.example.com/reset?token="));
    let token = link.split("token=").nth(1).unwrap().to_string();

    let res = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/reset-password/confirm",
            None,
            Some(json!({ "token": token, "new_password": "newpass99" })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // 同じトークンは二度使えない
    let res = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/reset-password/confirm",
            None,
            Some(json!({ "token": token, "new_password": "another99" })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // 既存セッションは失効している
    let res = app
        .router
        .clone()
        .oneshot(json_request("GET", "/auth/me", Some(&user.access_token), None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/signin",
            None,
            Some(json!({ "email": "reset@example.com", "password": "newpass99" })),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
