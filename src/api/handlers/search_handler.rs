//! Search API Handlers

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::post_dto::{ListPostsResponse, PostResponse}},
    error::AppError,
};

/// Hashtag search params
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Hashtag, with or without the leading #
    pub tag: String,
}

/// Search posts by hashtag
///
/// GET /api/v1/search?tag=...
pub async fn search_posts(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Searching posts by hashtag: {}", params.tag);

    let posts = state.post_service.search_by_hashtag(&params.tag).await?;
    let total = posts.len() as u64;

    let response = ListPostsResponse {
        posts: posts.into_iter().map(PostResponse::from).collect(),
        total,
        page: 1,
        page_size: state.config.bot.search_limit,
    };

    Ok(Json(response))
}
