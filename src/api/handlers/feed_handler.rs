//! Feed API Handlers
//!
//! Paginated home and user feeds.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::post_dto::{ListPostsResponse, PostResponse}},
    error::AppError,
    services::Pagination,
};

/// Feed query params
#[derive(Debug, Deserialize, Default)]
pub struct FeedParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl FeedParams {
    fn pagination(&self, default_page_size: usize) -> Pagination {
        Pagination::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(default_page_size).clamp(1, 100),
        )
    }
}

/// Home feed: posts from followed users
///
/// GET /api/v1/users/:user_id/feed
pub async fn home_feed(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<FeedParams>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Home feed for user: {}", user_id);

    let pagination = params.pagination(state.config.bot.feed_page_size);
    let page = state.feed_service.home_feed(&user_id, pagination).await?;

    let response = ListPostsResponse {
        posts: page.posts.into_iter().map(PostResponse::from).collect(),
        total: page.total,
        page: page.page,
        page_size: page.page_size,
    };

    Ok(Json(response))
}

/// User feed: one author's posts
///
/// GET /api/v1/users/:user_id/posts
pub async fn user_feed(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<FeedParams>,
) -> Result<impl IntoResponse, AppError> {
    debug!("User feed for user: {}", user_id);

    let pagination = params.pagination(state.config.bot.posts_per_page);
    let page = state.feed_service.user_feed(&user_id, pagination).await?;

    let response = ListPostsResponse {
        posts: page.posts.into_iter().map(PostResponse::from).collect(),
        total: page.total,
        page: page.page,
        page_size: page.page_size,
    };

    Ok(Json(response))
}
