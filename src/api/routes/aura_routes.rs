//! Aura Routes
//!
//! 定义气场查询相关的 API 路由。

use axum::{Router, routing::get};

use crate::api::app_state::AppState;
use crate::api::handlers::aura_handler::*;

/// 创建气场路由器
pub fn create_aura_router() -> Router<AppState> {
    Router::new()
        .route("/aura", get(list_aura))
        .route("/aura/:user_id", get(get_aura))
}
