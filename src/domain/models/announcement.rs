use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Mentors,
    Mentees,
    All,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_id: String,
    pub audience: Audience,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}

impl Announcement {
    pub fn new(
        title: String,
        content: String,
        audience: Audience,
        action_url: Option<String>,
        author_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            created_at: Utc::now(),
            author_id,
            audience,
            action_url,
        }
    }
}
