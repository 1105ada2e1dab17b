use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::{
    announcement::{Announcement, Audience},
    question::{Answer, Question, QuestionStatus},
    session::{
        AttendanceRecord, AttendanceStatus, ResourceLink, Session, SessionAgendaItem,
    },
    user::UserProfile,
};

/// The full domain state tree. One immutable value; every accepted intent
/// produces a fresh tree and prior snapshots stay valid.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipState {
    pub mentor: UserProfile,
    pub mentees: Vec<UserProfile>,
    pub sessions: Vec<Session>,
    pub announcements: Vec<Announcement>,
}

impl MentorshipState {
    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn mentee(&self, id: &str) -> Option<&UserProfile> {
        self.mentees.iter().find(|m| m.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&UserProfile> {
        if self.mentor.id == id {
            return Some(&self.mentor);
        }
        self.mentee(id)
    }
}

#[derive(Debug, Clone)]
pub struct NewSession {
    pub title: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub location: String,
    pub description: String,
    pub focus_tags: Option<Vec<String>>,
    pub agenda: Option<Vec<SessionAgendaItem>>,
    pub resources: Option<Vec<ResourceLink>>,
}

#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub audience: Audience,
    pub action_url: Option<String>,
    pub author_id: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Intent {
    AddSession(NewSession),
    UpdateAttendanceStatus {
        session_id: String,
        mentee_id: String,
        status: AttendanceStatus,
    },
    SetQuestionStatus {
        session_id: String,
        question_id: String,
        status: QuestionStatus,
    },
    AddAnswer {
        session_id: String,
        question_id: String,
        content: String,
    },
    AddQuestion {
        session_id: String,
        author_id: String,
        content: String,
    },
    AddAnnouncement(NewAnnouncement),
}

/// A rejected intent. The state is left untouched; callers decide whether
/// to surface the miss (the API maps it to 404).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreRejection {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl StoreRejection {
    fn not_found(entity: &'static str, id: &str) -> Self {
        StoreRejection::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Pure transition function: `(state, intent) -> state`. No I/O, no hidden
/// state beyond the fresh-id and wall-clock generators.
pub fn apply(state: &MentorshipState, intent: Intent) -> Result<MentorshipState, StoreRejection> {
    match intent {
        Intent::AddSession(payload) => Ok(add_session(state, payload)),
        Intent::UpdateAttendanceStatus {
            session_id,
            mentee_id,
            status,
        } => update_attendance_status(state, &session_id, &mentee_id, status),
        Intent::SetQuestionStatus {
            session_id,
            question_id,
            status,
        } => set_question_status(state, &session_id, &question_id, status),
        Intent::AddAnswer {
            session_id,
            question_id,
            content,
        } => add_answer(state, &session_id, &question_id, content),
        Intent::AddQuestion {
            session_id,
            author_id,
            content,
        } => add_question(state, &session_id, author_id, content),
        Intent::AddAnnouncement(payload) => Ok(add_announcement(state, payload)),
    }
}

fn add_session(state: &MentorshipState, payload: NewSession) -> MentorshipState {
    let session_id = Uuid::new_v4().to_string();
    let now = Utc::now();

    // Exactly one record per mentee on the roster at creation time.
    let attendance: Vec<AttendanceRecord> = state
        .mentees
        .iter()
        .map(|mentee| AttendanceRecord::expected(&session_id, &mentee.id, now))
        .collect();

    let session = Session {
        id: session_id,
        title: payload.title,
        mentor_id: state.mentor.id.clone(),
        start_at: payload.start_at,
        end_at: payload.end_at,
        location: payload.location,
        description: payload.description,
        focus_tags: payload.focus_tags.unwrap_or_default(),
        attendee_ids: state.mentees.iter().map(|m| m.id.clone()).collect(),
        agenda: payload.agenda.unwrap_or_default(),
        resources: payload.resources.unwrap_or_default(),
        questions: Vec::new(),
        attendance,
    };

    let mut next = state.clone();
    next.sessions.insert(0, session);
    next
}

fn update_attendance_status(
    state: &MentorshipState,
    session_id: &str,
    mentee_id: &str,
    status: AttendanceStatus,
) -> Result<MentorshipState, StoreRejection> {
    let mut next = state.clone();
    let session = next
        .sessions
        .iter_mut()
        .find(|s| s.id == session_id)
        .ok_or_else(|| StoreRejection::not_found("session", session_id))?;

    let record = session
        .attendance
        .iter_mut()
        .find(|r| r.mentee_id == mentee_id)
        .ok_or_else(|| StoreRejection::not_found("attendance record", mentee_id))?;

    record.status = status;
    record.updated_at = Utc::now();
    Ok(next)
}

fn set_question_status(
    state: &MentorshipState,
    session_id: &str,
    question_id: &str,
    status: QuestionStatus,
) -> Result<MentorshipState, StoreRejection> {
    let mut next = state.clone();
    let session = next
        .sessions
        .iter_mut()
        .find(|s| s.id == session_id)
        .ok_or_else(|| StoreRejection::not_found("session", session_id))?;

    let question = session
        .questions
        .iter_mut()
        .find(|q| q.id == question_id)
        .ok_or_else(|| StoreRejection::not_found("question", question_id))?;

    question.status = status;
    Ok(next)
}

fn add_answer(
    state: &MentorshipState,
    session_id: &str,
    question_id: &str,
    content: String,
) -> Result<MentorshipState, StoreRejection> {
    let mentor_id = state.mentor.id.clone();

    let mut next = state.clone();
    let session = next
        .sessions
        .iter_mut()
        .find(|s| s.id == session_id)
        .ok_or_else(|| StoreRejection::not_found("session", session_id))?;

    let question = session
        .questions
        .iter_mut()
        .find(|q| q.id == question_id)
        .ok_or_else(|| StoreRejection::not_found("question", question_id))?;

    // A second answer replaces the first; answering always settles the status.
    question.answer = Some(Answer::new(question.id.clone(), mentor_id, content));
    question.status = QuestionStatus::Answered;
    Ok(next)
}

fn add_question(
    state: &MentorshipState,
    session_id: &str,
    author_id: String,
    content: String,
) -> Result<MentorshipState, StoreRejection> {
    let mut next = state.clone();
    let session = next
        .sessions
        .iter_mut()
        .find(|s| s.id == session_id)
        .ok_or_else(|| StoreRejection::not_found("session", session_id))?;

    let question = Question::new(session.id.clone(), author_id, content);
    session.questions.insert(0, question);
    Ok(next)
}

fn add_announcement(state: &MentorshipState, payload: NewAnnouncement) -> MentorshipState {
    let author_id = payload
        .author_id
        .unwrap_or_else(|| state.mentor.id.clone());

    let announcement = Announcement::new(
        payload.title,
        payload.content,
        payload.audience,
        payload.action_url,
        author_id,
    );

    let mut next = state.clone();
    next.announcements.insert(0, announcement);
    next
}

/// Host for the reducer: explicitly constructed, never a process-wide
/// singleton, so independent instances do not interfere. Writers are
/// serialized by the lock; readers always get a complete snapshot.
pub struct MentorshipStore {
    current: RwLock<Arc<MentorshipState>>,
}

impl MentorshipStore {
    pub fn new(initial: MentorshipState) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    pub fn snapshot(&self) -> Arc<MentorshipState> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn dispatch(&self, intent: Intent) -> Result<Arc<MentorshipState>, StoreRejection> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let next = Arc::new(apply(&guard, intent)?);
        *guard = next.clone();
        Ok(next)
    }
}
