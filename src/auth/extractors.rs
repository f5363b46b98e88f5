use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Resolved session for a protected route: the authenticated user plus the
/// raw token it was resolved from (sign-out needs the token back).
pub struct AuthSession {
    pub user_id: Uuid,
    pub token: String,
}

pub(crate) fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Auth("missing authorization header"))?;

        let token = bearer_token(header).ok_or(ApiError::Auth("invalid auth scheme"))?;

        let user_id = state.sessions.resolve(token).await?.ok_or_else(|| {
            warn!("unknown session token");
            ApiError::Auth("invalid or expired token")
        })?;

        Ok(AuthSession {
            user_id,
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bearer_scheme() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("abc"), None);
    }
}
