use crate::domain::models::{
    auth::{AuthSession, AuthUser},
    profile::Profile,
    user::UserRole,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn upsert(&self, profile: &Profile) -> Result<Profile, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>, AppError>;
}

/// The external auth service. Rejections carry the provider's raw message
/// (`AppError::AuthProvider`) so the auth service can map them to friendly
/// text; transport failures surface as internal errors.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError>;
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: UserRole,
        organization: Option<&str>,
    ) -> Result<AuthUser, AppError>;
    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AppError>;
    async fn sign_out(&self, access_token: &str) -> Result<(), AppError>;
}
