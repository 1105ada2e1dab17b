use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::user::UserRole;

/// Persisted profile row, written on signup and keyed by the auth user id.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub role: String,
    pub organization: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(id: String, name: String, role: UserRole, organization: Option<String>) -> Self {
        Self {
            id,
            name,
            role: role.as_str().to_string(),
            organization,
            updated_at: Utc::now(),
        }
    }
}
