//! API 处理器模块

pub mod aura_handler;
pub mod feed_handler;
pub mod follow_handler;
pub mod message_handler;
pub mod post_handler;
pub mod profile_handler;
pub mod search_handler;
