use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::models::announcement::Audience;
use crate::domain::models::question::QuestionStatus;
use crate::domain::models::session::{AttendanceStatus, ResourceLink, SessionAgendaItem};
use crate::domain::models::user::UserRole;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub organization: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub title: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub location: String,
    pub description: String,
    pub focus_tags: Option<Vec<String>>,
    pub agenda: Option<Vec<SessionAgendaItem>>,
    pub resources: Option<Vec<ResourceLink>>,
}

#[derive(Deserialize)]
pub struct UpdateAttendanceRequest {
    pub status: AttendanceStatus,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddQuestionRequest {
    pub author_id: Option<String>,
    pub content: String,
}

#[derive(Deserialize)]
pub struct SetQuestionStatusRequest {
    pub status: QuestionStatus,
}

#[derive(Deserialize)]
pub struct AddAnswerRequest {
    pub content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
    pub audience: Audience,
    pub action_url: Option<String>,
    pub author_id: Option<String>,
}
