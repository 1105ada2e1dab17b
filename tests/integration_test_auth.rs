mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_signup_upserts_profile_row() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "달이",
        "email": "moon@example.com",
        "password": "secret-pw",
        "organization": "멍멍대학교",
        "role": "mentee"
    });
    let response = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/signup")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    let user_id = body["user"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["profile"]["name"], "달이");
    assert_eq!(body["profile"]["role"], "mentee");
    assert_eq!(body["profile"]["organization"], "멍멍대학교");

    let (name, role): (String, String) =
        sqlx::query_as("SELECT name, role FROM profiles WHERE id = ?1")
            .bind(&user_id)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(name, "달이");
    assert_eq!(role, "mentee");
}

#[tokio::test]
async fn test_duplicate_signup_gets_friendly_message() {
    let app = TestApp::new().await;
    app.signup("달이", "moon@example.com", "secret-pw", "mentee").await;

    let payload = json!({
        "name": "달이",
        "email": "moon@example.com",
        "password": "secret-pw",
        "role": "mentee"
    });
    let response = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/signup")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(parse_body(response).await["error"], "이미 가입된 이메일입니다.");
}

#[tokio::test]
async fn test_login_failures_are_friendly() {
    let app = TestApp::new().await;
    app.signup("달이", "moon@example.com", "secret-pw", "mentee").await;

    let payload = json!({"email": "moon@example.com", "password": "wrong"});
    let response = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        parse_body(response).await["error"],
        "이메일 또는 비밀번호가 올바르지 않습니다."
    );

    let payload = json!({"email": "", "password": ""});
    let response = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(response).await["error"],
        "이메일과 비밀번호를 모두 입력해 주세요."
    );
}

#[tokio::test]
async fn test_session_endpoint_reflects_login_state() {
    let app = TestApp::new().await;

    // No cookie
    let response = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/auth/session")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    app.signup("달이", "moon@example.com", "secret-pw", "mentee").await;
    let token = app.login("moon@example.com", "secret-pw").await;

    let response = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/auth/session")
            .header(header::COOKIE, format!("access_token={}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["user"]["email"], "moon@example.com");

    // After logout the token no longer resolves.
    let response = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/logout")
            .header(header::COOKIE, format!("access_token={}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/auth/session")
            .header(header::COOKIE, format!("access_token={}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
