use mentorship_backend::{
    api::router::create_router,
    config::Config,
    domain::models::auth::{AuthSession, AuthUser},
    domain::models::user::UserRole,
    domain::ports::AuthProvider,
    domain::seed,
    domain::services::auth_service::AuthService,
    domain::store::MentorshipStore,
    error::AppError,
    infra::repositories::sqlite_profile_repo::SqliteProfileRepo,
    state::AppState,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

/// In-memory stand-in for the external auth service. Reproduces the raw
/// rejection strings the real provider sends so the friendly-message
/// mapping is exercised end to end.
pub struct MockAuthProvider {
    accounts: Mutex<HashMap<String, (String, AuthUser)>>,
    tokens: Mutex<HashMap<String, AuthUser>>,
}

impl MockAuthProvider {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            tokens: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let user = {
            let accounts = self.accounts.lock().unwrap();
            match accounts.get(email) {
                Some((stored, user)) if stored == password => user.clone(),
                _ => return Err(AppError::AuthProvider("Invalid login credentials".to_string())),
            }
        };

        let access_token = format!("token-{}", Uuid::new_v4());
        self.tokens
            .lock()
            .unwrap()
            .insert(access_token.clone(), user.clone());

        Ok(AuthSession { access_token, user })
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        _name: &str,
        _role: UserRole,
        _organization: Option<&str>,
    ) -> Result<AuthUser, AppError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(AppError::AuthProvider("User already registered".to_string()));
        }

        let user = AuthUser {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
        };
        accounts.insert(email.to_string(), (password.to_string(), user.clone()));
        Ok(user)
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AppError> {
        Ok(self.tokens.lock().unwrap().get(access_token).cloned())
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        self.tokens.lock().unwrap().remove(access_token);
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            auth_service_url: "http://localhost".to_string(),
            auth_anon_key: "anon-key".to_string(),
        };

        let profile_repo = Arc::new(SqliteProfileRepo::new(pool.clone()));
        let auth_provider = Arc::new(MockAuthProvider::new());
        let auth_service = Arc::new(AuthService::new(auth_provider, profile_repo.clone()));

        let state = Arc::new(AppState {
            config,
            store: Arc::new(MentorshipStore::new(seed::initial_state())),
            profile_repo,
            auth_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str, role: &str) {
        let payload = serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
            "role": role
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/signup")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Signup failed in test helper: status {}", response.status());
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let payload = serde_json::json!({
            "email": email,
            "password": password
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let cookies: Vec<String> = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect();

        let access_token_cookie = cookies.iter()
            .find(|c| c.contains("access_token="))
            .expect("No access_token cookie returned");

        let start = access_token_cookie.find("access_token=").unwrap() + 13;
        let end = access_token_cookie[start..].find(';').unwrap_or(access_token_cookie.len() - start);
        access_token_cookie[start..start + end].to_string()
    }

    /// Registers a fresh mentor account and returns its access token.
    pub async fn mentor_token(&self) -> String {
        let email = format!("mentor-{}@example.com", Uuid::new_v4());
        self.signup("김멘토", &email, "secret-pw", "mentor").await;
        self.login(&email, "secret-pw").await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
