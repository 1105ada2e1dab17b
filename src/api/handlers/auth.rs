use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use time::Duration;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};
use tracing::info;

use crate::api::dtos::requests::{LoginRequest, SignupRequest};
use crate::api::dtos::responses::{AuthResponse, SignupResponse};
use crate::api::extractors::auth::CurrentUser;
use crate::domain::models::user::UserRole;
use crate::domain::services::auth_service::SignupInput;
use crate::error::AppError;
use crate::state::AppState;

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = state
        .auth_service
        .login(payload.email.trim(), &payload.password)
        .await?;

    set_access_cookie(&cookies, &session.access_token);

    info!("User logged in: {}", session.user.id);

    Ok(Json(AuthResponse { user: session.user }))
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let input = SignupInput {
        name: payload.name.trim().to_string(),
        email: payload.email.trim().to_string(),
        password: payload.password,
        organization: payload.organization.map(|org| org.trim().to_string()),
        role: payload.role.unwrap_or(UserRole::Mentee),
    };

    let user = state.auth_service.signup(input).await?;
    let profile = state.profile_repo.find_by_id(&user.id).await?;

    info!("User signed up: {}", user.id);

    Ok(Json(SignupResponse { user, profile }))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    if let Some(cookie) = cookies.get("access_token") {
        let _ = state.auth_service.logout(cookie.value()).await;
    }

    cookies.remove(Cookie::build(("access_token", "")).path("/").into());

    info!("User logged out");

    Ok(StatusCode::OK)
}

pub async fn session(CurrentUser(user): CurrentUser) -> Result<impl IntoResponse, AppError> {
    Ok(Json(AuthResponse { user }))
}

fn set_access_cookie(cookies: &Cookies, access_token: &str) {
    let mut cookie = Cookie::new("access_token", access_token.to_string());
    cookie.set_http_only(true);
    cookie.set_secure(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie.set_max_age(Duration::hours(1));
    cookies.add(cookie);
}
