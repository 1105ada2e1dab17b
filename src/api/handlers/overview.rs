use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::error::AppError;
use crate::state::AppState;

/// Full snapshot of the domain state, the dashboard's initial load.
pub async fn get_overview(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.store.snapshot();
    Ok(Json(snapshot.as_ref().clone()))
}

pub async fn list_mentees(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.store.snapshot();
    Ok(Json(snapshot.mentees.clone()))
}
