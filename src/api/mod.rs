//! API 模块
//!
//! 提供 REST API 支持。

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::app_state::AppState;
use crate::error::AppError;

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::message_routes::create_message_router())
        .merge(routes::aura_routes::create_aura_router())
        .merge(routes::post_routes::create_post_router())
        .merge(routes::profile_routes::create_profile_router())
        .merge(routes::follow_routes::create_follow_router())
        .merge(routes::search_routes::create_search_router());

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

pub async fn initialize_api(app_state: AppState) -> Result<Router, AppError> {
    tracing::info!("Initializing API router...");
    Ok(create_router(app_state))
}
