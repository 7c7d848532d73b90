//! Follow Routes
//!
//! 定义关注关系和信息流相关的 API 路由。

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;
use crate::api::handlers::feed_handler::home_feed;
use crate::api::handlers::follow_handler::*;

/// 创建关注路由器
pub fn create_follow_router() -> Router<AppState> {
    Router::new()
        .route("/follows", post(create_follow))
        .route("/users/:user_id/following", get(list_following))
        .route("/users/:user_id/followers", get(list_followers))
        // Home feed is derived from the follow graph
        .route("/users/:user_id/feed", get(home_feed))
}
