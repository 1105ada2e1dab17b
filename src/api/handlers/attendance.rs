use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::UpdateAttendanceRequest;
use crate::api::extractors::auth::CurrentUser;
use crate::domain::store::Intent;
use crate::error::AppError;
use crate::state::AppState;

pub async fn update_attendance(
    State(state): State<Arc<AppState>>,
    _user: CurrentUser,
    Path((session_id, mentee_id)): Path<(String, String)>,
    Json(payload): Json<UpdateAttendanceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let next = state.store.dispatch(Intent::UpdateAttendanceStatus {
        session_id: session_id.clone(),
        mentee_id: mentee_id.clone(),
        status: payload.status,
    })?;

    let record = next
        .session(&session_id)
        .and_then(|s| s.attendance_for(&mentee_id))
        .cloned()
        .ok_or(AppError::Internal)?;

    info!("Updated attendance for mentee {} in session {}", mentee_id, session_id);
    Ok(Json(record))
}
