use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, RegisterRequest, SigninRequest, SignoutResponse},
        extractors::AuthSession,
        password, repo,
        repo::User,
    },
    error::ApiError,
    profile::repo::Profile,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/signin", post(signin))
        .route("/signout", post(signout))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();
    payload.name = payload.name.trim().to_string();

    if payload.name.is_empty() || payload.password.is_empty() {
        warn!("register with missing fields");
        return Err(ApiError::Validation("incorrect form submission"));
    }
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "register with invalid email");
        return Err(ApiError::Validation("invalid email"));
    }

    let hash = password::hash(&payload.password)?;
    let profile = repo::create_user(&state.db, &payload.email, &payload.name, &hash).await?;
    let token = state.sessions.create(profile.id).await?;

    info!(user_id = %profile.id, email = %profile.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: profile,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    Json(mut payload): Json<SigninRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation("incorrect form submission"));
    }

    // Unknown email and bad password answer identically.
    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!("signin with unknown email");
            ApiError::Auth("wrong credentials")
        })?;

    if !password::verify(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "signin with invalid password");
        return Err(ApiError::Auth("wrong credentials"));
    }

    let profile = Profile::find(&state.db, user.id)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("login meta missing for user")))?;

    let token = state.sessions.create(user.id).await?;

    info!(user_id = %user.id, "user signed in");
    Ok(Json(AuthResponse {
        token,
        user: profile,
    }))
}

#[instrument(skip_all)]
pub async fn signout(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<SignoutResponse>, ApiError> {
    state.sessions.revoke(&session.token).await?;
    info!(user_id = %session.user_id, "user signed out");
    Ok(Json(SignoutResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("no@tld"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email("two@@x.com"));
    }
}
