//! Profile Routes
//!
//! 定义用户资料相关的 API 路由。

use axum::{
    Router,
    routing::{get, put},
};

use crate::api::app_state::AppState;
use crate::api::handlers::profile_handler::*;

/// 创建资料路由器
pub fn create_profile_router() -> Router<AppState> {
    Router::new()
        .route("/profiles/:user_id", get(get_profile))
        .route("/profiles/:user_id/bio", put(set_bio))
}
