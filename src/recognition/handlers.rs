use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::instrument;

use crate::{auth::extractors::AuthSession, error::ApiError, state::AppState};

use super::dto::ImageUrlRequest;

pub fn router() -> Router<AppState> {
    Router::new().route("/imageurl", post(submit_image_url))
}

/// Relays the upstream answer as-is, status included.
#[instrument(skip(state, _session, payload))]
pub async fn submit_image_url(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(payload): Json<ImageUrlRequest>,
) -> Result<Response, ApiError> {
    let input = payload.input.trim();
    if input.is_empty() {
        return Err(ApiError::Validation("image url is required"));
    }

    let (status, body) = state.recognizer.predict(input).await?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}
