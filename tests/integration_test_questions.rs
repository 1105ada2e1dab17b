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
async fn test_questions_are_prepended() {
    let app = TestApp::new().await;
    let token = app.mentor_token().await;

    for content in ["첫 번째 질문", "두 번째 질문"] {
        let response = app.router.clone().oneshot(
            Request::builder().method("POST")
                .uri("/api/v1/sessions/session-2024-08-2/questions")
                .header(header::COOKIE, format!("access_token={}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"authorId": "mentee-1", "content": content}).to_string())).unwrap()
        ).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/sessions/session-2024-08-2")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let session = parse_body(response).await;
    let questions = session["questions"].as_array().unwrap();

    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0]["content"], "두 번째 질문");
    assert_eq!(questions[1]["content"], "첫 번째 질문");
    assert_eq!(questions[2]["id"], "question-3");
    assert_eq!(questions[0]["status"], "pending");
    assert_eq!(questions[0]["votes"], 0);
    assert_eq!(questions[0]["authorId"], "mentee-1");
}

#[tokio::test]
async fn test_answer_forces_answered_status() {
    let app = TestApp::new().await;
    let token = app.mentor_token().await;

    let response = app.router.clone().oneshot(
        Request::builder().method("POST")
            .uri("/api/v1/sessions/session-2024-08-1/questions/question-1/answer")
            .header(header::COOKIE, format!("access_token={}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"content": "Use Zustand for simplicity."}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let question = parse_body(response).await;
    assert_eq!(question["status"], "answered");
    assert_eq!(question["answer"]["content"], "Use Zustand for simplicity.");
    assert_eq!(question["answer"]["authorId"], "mentor-1");
    assert_eq!(question["answer"]["questionId"], "question-1");

    // question-2 keeps its in-progress status
    let response = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/sessions/session-2024-08-1")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let session = parse_body(response).await;
    let questions = session["questions"].as_array().unwrap();
    let other = questions.iter().find(|q| q["id"] == "question-2").unwrap();
    assert_eq!(other["status"], "in-progress");
    assert!(other.get("answer").is_none());
}

#[tokio::test]
async fn test_question_status_transitions() {
    let app = TestApp::new().await;
    let token = app.mentor_token().await;

    let response = app.router.clone().oneshot(
        Request::builder().method("PUT")
            .uri("/api/v1/sessions/session-2024-08-1/questions/question-1/status")
            .header(header::COOKIE, format!("access_token={}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"status": "in-progress"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["status"], "in-progress");

    // Back to pending is allowed; transitions are free-form.
    let response = app.router.clone().oneshot(
        Request::builder().method("PUT")
            .uri("/api/v1/sessions/session-2024-08-1/questions/question-1/status")
            .header(header::COOKIE, format!("access_token={}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"status": "pending"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(parse_body(response).await["status"], "pending");
}

#[tokio::test]
async fn test_unknown_question_or_session_is_404() {
    let app = TestApp::new().await;
    let token = app.mentor_token().await;

    let response = app.router.clone().oneshot(
        Request::builder().method("POST")
            .uri("/api/v1/sessions/session-2024-08-1/questions/question-99/answer")
            .header(header::COOKIE, format!("access_token={}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"content": "답변"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.router.clone().oneshot(
        Request::builder().method("POST")
            .uri("/api/v1/sessions/ghost-session/questions")
            .header(header::COOKIE, format!("access_token={}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"authorId": "mentee-1", "content": "질문"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Empty content is rejected before any lookup.
    let response = app.router.clone().oneshot(
        Request::builder().method("POST")
            .uri("/api/v1/sessions/session-2024-08-1/questions")
            .header(header::COOKIE, format!("access_token={}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"authorId": "mentee-1", "content": "  "}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
