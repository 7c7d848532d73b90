//! Profile API Handlers
//!
//! HTTP handlers for profile reads and bio updates.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{
        app_state::AppState,
        dto::profile_dto::{ProfileResponse, SetBioRequest},
    },
    error::AppError,
};

/// Get a user's profile
///
/// GET /api/v1/profiles/:user_id
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting profile for user: {}", user_id);

    let profile = state.profile_service.get(&user_id).await?;

    Ok(Json(ProfileResponse::from(profile)))
}

/// Set a user's bio (creates the profile when missing)
///
/// PUT /api/v1/profiles/:user_id/bio
pub async fn set_bio(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<SetBioRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;
    debug!("Setting bio for user: {}", user_id);

    let profile = state.profile_service.set_bio(&user_id, &request.bio).await?;

    Ok(Json(ProfileResponse::from(profile)))
}
