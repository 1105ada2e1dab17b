use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{AddAnswerRequest, AddQuestionRequest, SetQuestionStatusRequest};
use crate::api::extractors::auth::CurrentUser;
use crate::domain::store::Intent;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_question(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(session_id): Path<String>,
    Json(payload): Json<AddQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.content.trim().is_empty() {
        return Err(AppError::Validation("Question content must not be empty".into()));
    }

    let author_id = payload.author_id.unwrap_or(user.id);

    let next = state.store.dispatch(Intent::AddQuestion {
        session_id: session_id.clone(),
        author_id,
        content: payload.content,
    })?;

    // Questions are prepended within their session.
    let created = next
        .session(&session_id)
        .and_then(|s| s.questions.first())
        .cloned()
        .ok_or(AppError::Internal)?;

    info!("Added question {} to session {}", created.id, session_id);
    Ok(Json(created))
}

pub async fn set_question_status(
    State(state): State<Arc<AppState>>,
    _user: CurrentUser,
    Path((session_id, question_id)): Path<(String, String)>,
    Json(payload): Json<SetQuestionStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let next = state.store.dispatch(Intent::SetQuestionStatus {
        session_id: session_id.clone(),
        question_id: question_id.clone(),
        status: payload.status,
    })?;

    let question = next
        .session(&session_id)
        .and_then(|s| s.question(&question_id))
        .cloned()
        .ok_or(AppError::Internal)?;

    Ok(Json(question))
}

pub async fn answer_question(
    State(state): State<Arc<AppState>>,
    _user: CurrentUser,
    Path((session_id, question_id)): Path<(String, String)>,
    Json(payload): Json<AddAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.content.trim().is_empty() {
        return Err(AppError::Validation("Answer content must not be empty".into()));
    }

    let next = state.store.dispatch(Intent::AddAnswer {
        session_id: session_id.clone(),
        question_id: question_id.clone(),
        content: payload.content,
    })?;

    let question = next
        .session(&session_id)
        .and_then(|s| s.question(&question_id))
        .cloned()
        .ok_or(AppError::Internal)?;

    info!("Answered question {} in session {}", question_id, session_id);
    Ok(Json(question))
}
