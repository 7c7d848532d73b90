//! Post API Handlers
//!
//! HTTP handlers for post creation, reactions and indexed lookup.

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
        dto::message_dto::ReactionRequest,
        dto::post_dto::{CreatePostRequest, PostResponse},
    },
    error::AppError,
};

/// Create a post
///
/// POST /api/v1/posts
pub async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;
    debug!("Creating post for user: {}", request.user_id);

    let post = state
        .post_service
        .create_post(
            &request.user_id,
            &request.display_name,
            &request.content,
            request.attachments.into_iter().map(Into::into).collect(),
        )
        .await?;

    state.metrics.record_post();

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

/// Get a post by ID
///
/// GET /api/v1/posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting post: {}", id);

    let post = state
        .post_service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post not found: {}", id)))?;

    Ok(Json(PostResponse::from(post)))
}

/// React to a post
///
/// POST /api/v1/posts/:id/reactions
pub async fn react_to_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ReactionRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;
    debug!(
        "Recording {:?} reaction on post {} by user {}",
        request.kind, id, request.user_id
    );

    let post = state
        .post_service
        .react(&id, &request.user_id, request.kind)
        .await?;

    state.metrics.record_reaction();

    Ok(Json(PostResponse::from(post)))
}

/// Get a user's Nth most recent post (1-based)
///
/// GET /api/v1/users/:user_id/posts/:index
pub async fn get_user_post_by_index(
    State(state): State<AppState>,
    Path((user_id, index)): Path<(String, usize)>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting post #{} for user: {}", index, user_id);

    let post = state.post_service.get_by_index(&user_id, index).await?;

    Ok(Json(PostResponse::from(post)))
}
