//! Follow API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{
        app_state::AppState,
        dto::follow_dto::{FollowListResponse, FollowRequest, FollowResponse},
    },
    error::AppError,
};

/// Create a follow edge
///
/// POST /api/v1/follows
pub async fn create_follow(
    State(state): State<AppState>,
    Json(request): Json<FollowRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;
    debug!(
        "User {} following user {}",
        request.follower_id, request.following_id
    );

    let follow = state
        .follow_service
        .follow(&request.follower_id, &request.following_id)
        .await?;

    state.metrics.record_follow();

    let response = FollowResponse {
        follower_id: follow.follower_id,
        following_id: follow.following_id,
        message: "Follow created".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// List users someone follows
///
/// GET /api/v1/users/:user_id/following
pub async fn list_following(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Listing following for user: {}", user_id);

    let user_ids = state.follow_service.following_ids(&user_id).await?;
    let total = user_ids.len() as u64;

    Ok(Json(FollowListResponse { user_ids, total }))
}

/// List a user's followers
///
/// GET /api/v1/users/:user_id/followers
pub async fn list_followers(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Listing followers for user: {}", user_id);

    let user_ids = state.follow_service.follower_ids(&user_id).await?;
    let total = user_ids.len() as u64;

    Ok(Json(FollowListResponse { user_ids, total }))
}
