use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionStatus {
    Pending,
    InProgress,
    Answered,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: String,
    pub question_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(question_id: String, author_id: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question_id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub session_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub status: QuestionStatus,
    pub votes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<Answer>,
}

impl Question {
    pub fn new(session_id: String, author_id: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id,
            author_id,
            content,
            created_at: Utc::now(),
            status: QuestionStatus::Pending,
            votes: 0,
            answer: None,
        }
    }
}
