use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthSession,
    error::ApiError,
    profile::{
        dto::{EntriesResponse, UpdateProfileRequest},
        repo::Profile,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/profile/:id", get(get_profile).put(update_profile))
}

// Any live session may read or update any profile id; the gate is a pure
// existence check.
#[instrument(skip(state, _session))]
pub async fn get_profile(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<Profile>, ApiError> {
    let profile = Profile::find(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("profile not found"))?;
    Ok(Json(profile))
}

#[instrument(skip(state, _session, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<EntriesResponse>, ApiError> {
    let image = payload
        .image
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let entries = Profile::bump_entries(&state.db, id, image)
        .await?
        .ok_or(ApiError::NotFound("profile not found"))?;

    info!(user_id = %id, entries, "entries updated");
    Ok(Json(EntriesResponse { entries }))
}
