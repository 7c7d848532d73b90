//! Message Routes
//!
//! 定义消息接入相关的 API 路由。

use axum::{Router, routing::post};

use crate::api::app_state::AppState;
use crate::api::handlers::message_handler::*;

/// 创建消息路由器
pub fn create_message_router() -> Router<AppState> {
    Router::new().route("/messages", post(ingest_message))
}
