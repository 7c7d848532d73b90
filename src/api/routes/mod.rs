//! API 路由模块

pub mod aura_routes;
pub mod follow_routes;
pub mod message_routes;
pub mod post_routes;
pub mod profile_routes;
pub mod search_routes;
