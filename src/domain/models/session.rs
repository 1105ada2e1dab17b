use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::question::Question;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Expected,
    CheckedIn,
    Late,
    Absent,
}

/// One per (session, mentee) pair, created alongside the session.
/// Only `status` and `updated_at` ever change afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub session_id: String,
    pub mentee_id: String,
    pub status: AttendanceStatus,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AttendanceRecord {
    /// The serialized id keeps the legacy `{session_id}-{mentee_id}` shape,
    /// but lookups always match on the (session_id, mentee_id) field pair.
    pub fn expected(session_id: &str, mentee_id: &str, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: format!("{}-{}", session_id, mentee_id),
            session_id: session_id.to_string(),
            mentee_id: mentee_id.to_string(),
            status: AttendanceStatus::Expected,
            updated_at,
            note: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionAgendaItem {
    pub time: String,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResourceLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub mentor_id: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub location: String,
    pub description: String,
    pub focus_tags: Vec<String>,
    pub attendee_ids: Vec<String>,
    pub agenda: Vec<SessionAgendaItem>,
    pub resources: Vec<ResourceLink>,
    pub questions: Vec<Question>,
    pub attendance: Vec<AttendanceRecord>,
}

impl Session {
    pub fn attendance_for(&self, mentee_id: &str) -> Option<&AttendanceRecord> {
        self.attendance.iter().find(|r| r.mentee_id == mentee_id)
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}
