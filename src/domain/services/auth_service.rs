use std::sync::Arc;

use tracing::error;

use crate::domain::models::{
    auth::{AuthSession, AuthUser},
    profile::Profile,
    user::UserRole,
};
use crate::domain::ports::{AuthProvider, ProfileRepository};
use crate::error::AppError;

pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub organization: Option<String>,
    pub role: UserRole,
}

/// Orchestrates the external auth provider and the profile store. Raw
/// provider rejections never reach the caller; they are rewritten into
/// the user-facing messages the dashboard shows inline.
pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
    profile_repo: Arc<dyn ProfileRepository>,
}

impl AuthService {
    pub fn new(provider: Arc<dyn AuthProvider>, profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self {
            provider,
            profile_repo,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "이메일과 비밀번호를 모두 입력해 주세요.".to_string(),
            ));
        }

        self.provider
            .sign_in(email, password)
            .await
            .map_err(friendly)
    }

    /// Signup also upserts the profile row keyed by the new user id.
    pub async fn signup(&self, input: SignupInput) -> Result<AuthUser, AppError> {
        if input.name.is_empty() || input.email.is_empty() || input.password.is_empty() {
            return Err(AppError::Validation(
                "필수 정보를 모두 입력해 주세요.".to_string(),
            ));
        }

        let user = self
            .provider
            .sign_up(
                &input.email,
                &input.password,
                &input.name,
                input.role,
                input.organization.as_deref(),
            )
            .await
            .map_err(friendly)?;

        let organization = input.organization.filter(|org| !org.is_empty());
        let profile = Profile::new(user.id.clone(), input.name, input.role, organization);

        if let Err(e) = self.profile_repo.upsert(&profile).await {
            error!("Profile upsert failed for user {}: {:?}", user.id, e);
            return Err(AppError::Auth(
                "프로필 생성 중 문제가 발생했습니다. 잠시 후 다시 시도해 주세요.".to_string(),
            ));
        }

        Ok(user)
    }

    pub async fn current_user(&self, access_token: &str) -> Result<Option<AuthUser>, AppError> {
        self.provider.get_user(access_token).await
    }

    pub async fn logout(&self, access_token: &str) -> Result<(), AppError> {
        self.provider.sign_out(access_token).await
    }
}

fn friendly(err: AppError) -> AppError {
    match err {
        AppError::AuthProvider(raw) => AppError::Auth(friendly_message(&raw)),
        other => other,
    }
}

fn friendly_message(raw: &str) -> String {
    if raw.contains("Invalid login credentials") {
        return "이메일 또는 비밀번호가 올바르지 않습니다.".to_string();
    }
    if raw.contains("User already registered") {
        return "이미 가입된 이메일입니다.".to_string();
    }
    if raw.is_empty() {
        return "잠시 후 다시 시도해 주세요.".to_string();
    }
    raw.to_string()
}
