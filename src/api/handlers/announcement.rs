use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateAnnouncementRequest;
use crate::api::extractors::auth::CurrentUser;
use crate::domain::store::{Intent, NewAnnouncement};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_announcements(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.store.snapshot();
    Ok(Json(snapshot.announcements.clone()))
}

pub async fn create_announcement(
    State(state): State<Arc<AppState>>,
    _user: CurrentUser,
    Json(payload): Json<CreateAnnouncementRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".into()));
    }
    if payload.content.trim().is_empty() {
        return Err(AppError::Validation("Content must not be empty".into()));
    }

    let next = state.store.dispatch(Intent::AddAnnouncement(NewAnnouncement {
        title: payload.title,
        content: payload.content,
        audience: payload.audience,
        action_url: payload.action_url,
        author_id: payload.author_id,
    }))?;

    let created = next
        .announcements
        .first()
        .cloned()
        .ok_or(AppError::Internal)?;

    info!("Published announcement {}", created.id);
    Ok(Json(created))
}
