use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::domain::models::auth::{AuthSession, AuthUser};
use crate::domain::models::user::UserRole;
use crate::domain::ports::AuthProvider;
use crate::error::AppError;

/// GoTrue-style REST client for the hosted auth service. The anon key is
/// sent as `apikey` on every call; user-scoped calls add a bearer token.
pub struct HttpAuthProvider {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl HttpAuthProvider {
    pub fn new(base_url: String, anon_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    async fn rejection(response: reqwest::Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|e| e.message())
            .unwrap_or(body);
        error!("Auth service rejected request. Status: {}, Message: {}", status, message);
        AppError::AuthProvider(message)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn message(self) -> Option<String> {
        self.msg.or(self.error_description).or(self.error)
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUser,
}

#[derive(Serialize)]
struct SignupMetadata<'a> {
    name: &'a str,
    role: &'a str,
    organization: Option<&'a str>,
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let res = self.client
            .post(format!("{}/token?grant_type=password", self.base_url))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AppError::AuthUpstream(e.to_string()))?;

        if !res.status().is_success() {
            return Err(Self::rejection(res).await);
        }

        let token: TokenResponse = res
            .json()
            .await
            .map_err(|e| AppError::AuthUpstream(e.to_string()))?;

        Ok(AuthSession {
            access_token: token.access_token,
            user: token.user,
        })
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: UserRole,
        organization: Option<&str>,
    ) -> Result<AuthUser, AppError> {
        let metadata = SignupMetadata {
            name,
            role: role.as_str(),
            organization,
        };

        let res = self.client
            .post(format!("{}/signup", self.base_url))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password, "data": metadata }))
            .send()
            .await
            .map_err(|e| AppError::AuthUpstream(e.to_string()))?;

        if !res.status().is_success() {
            return Err(Self::rejection(res).await);
        }

        res.json::<AuthUser>()
            .await
            .map_err(|e| AppError::AuthUpstream(e.to_string()))
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AppError> {
        let res = self.client
            .get(format!("{}/user", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::AuthUpstream(e.to_string()))?;

        match res.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status if status.is_success() => {
                let user = res
                    .json::<AuthUser>()
                    .await
                    .map_err(|e| AppError::AuthUpstream(e.to_string()))?;
                Ok(Some(user))
            }
            _ => Err(Self::rejection(res).await),
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        let res = self.client
            .post(format!("{}/logout", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::AuthUpstream(e.to_string()))?;

        // An already-expired token is not worth failing a logout over.
        if !res.status().is_success() && res.status() != StatusCode::UNAUTHORIZED {
            return Err(Self::rejection(res).await);
        }

        Ok(())
    }
}
