//! Post Routes
//!
//! 定义帖子相关的 API 路由。

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;
use crate::api::handlers::feed_handler::user_feed;
use crate::api::handlers::post_handler::*;

/// 创建帖子路由器
pub fn create_post_router() -> Router<AppState> {
    Router::new()
        // Post CRUD operations
        .route("/posts", post(create_post))
        .route("/posts/:id", get(get_post))
        // Reactions
        .route("/posts/:id/reactions", post(react_to_post))
        // Per-user post listing and indexed lookup
        .route("/users/:user_id/posts", get(user_feed))
        .route("/users/:user_id/posts/:index", get(get_user_post_by_index))
}
