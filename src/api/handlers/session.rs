use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateSessionRequest;
use crate::api::extractors::auth::CurrentUser;
use crate::domain::store::{Intent, NewSession};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.store.snapshot();
    Ok(Json(snapshot.sessions.clone()))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.store.snapshot();
    let session = snapshot
        .session(&session_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("session not found: {}", session_id)))?;

    Ok(Json(session))
}

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    _user: CurrentUser,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".into()));
    }
    if payload.location.trim().is_empty() {
        return Err(AppError::Validation("Location must not be empty".into()));
    }
    if payload.description.trim().is_empty() {
        return Err(AppError::Validation("Description must not be empty".into()));
    }
    if payload.end_at <= payload.start_at {
        return Err(AppError::Validation("End time must be after start time".into()));
    }

    let next = state.store.dispatch(Intent::AddSession(NewSession {
        title: payload.title,
        start_at: payload.start_at,
        end_at: payload.end_at,
        location: payload.location,
        description: payload.description,
        focus_tags: payload.focus_tags,
        agenda: payload.agenda,
        resources: payload.resources,
    }))?;

    // New sessions are prepended, so the created one is first.
    let created = next.sessions.first().cloned().ok_or(AppError::Internal)?;

    info!("Created session {}", created.id);
    Ok(Json(created))
}
