//! 服务模块

pub mod cooldown;
pub mod feed_service;
pub mod follow_service;
pub mod notifier;
pub mod post_service;
pub mod profile_service;

pub use cooldown::{CooldownResult, CooldownTracker};
pub use feed_service::{FeedPage, FeedService, Pagination, create_feed_service};
pub use follow_service::{FollowService, create_follow_service};
pub use notifier::{Notifier, TracingNotifier, create_tracing_notifier};
pub use post_service::{PostService, create_post_service};
pub use profile_service::{ProfileService, create_profile_service};
