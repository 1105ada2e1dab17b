use serde::Serialize;

use crate::domain::models::auth::AuthUser;
use crate::domain::models::profile::Profile;

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: AuthUser,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub user: AuthUser,
    pub profile: Option<Profile>,
}
