use serde::{Deserialize, Serialize};

/// Identity resolved by the external auth service. Credentials never
/// enter this codebase; we only see the resolved user.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}
