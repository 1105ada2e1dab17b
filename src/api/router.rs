use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{announcement, attendance, auth, health, overview, question, session};
use crate::state::AppState;
use tower_cookies::CookieManagerLayer;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/signup", post(auth::signup))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/session", get(auth::session))

        // Dashboard reads
        .route("/api/v1/overview", get(overview::get_overview))
        .route("/api/v1/mentees", get(overview::list_mentees))

        // Sessions & attendance
        .route("/api/v1/sessions", get(session::list_sessions).post(session::create_session))
        .route("/api/v1/sessions/{session_id}", get(session::get_session))
        .route("/api/v1/sessions/{session_id}/attendance/{mentee_id}", put(attendance::update_attendance))

        // Q&A board
        .route("/api/v1/sessions/{session_id}/questions", post(question::create_question))
        .route("/api/v1/sessions/{session_id}/questions/{question_id}/status", put(question::set_question_status))
        .route("/api/v1/sessions/{session_id}/questions/{question_id}/answer", post(question::answer_question))

        // Announcements
        .route("/api/v1/announcements", get(announcement::list_announcements).post(announcement::create_announcement))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
