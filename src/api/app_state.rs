use std::sync::Arc;

use crate::aura::{AuraAggregator, ScoreEngine, create_aura_aggregator};
use crate::config::AppConfig;
use crate::gateway::Dispatcher;
use crate::observability::AppMetrics;
use crate::services::{
    CooldownTracker, FeedService, FollowService, PostService, ProfileService, create_feed_service,
    create_follow_service, create_post_service, create_profile_service, create_tracing_notifier,
};
use crate::storage::Repositories;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Bot and aura configuration
    pub config: AppConfig,
    /// Repository bundle
    pub repositories: Repositories,
    /// Pure scoring engine
    pub score_engine: ScoreEngine,
    /// Per-user aura aggregation
    pub aura_aggregator: Arc<AuraAggregator>,
    /// Post business logic
    pub post_service: Arc<dyn PostService>,
    /// Profile business logic
    pub profile_service: Arc<dyn ProfileService>,
    /// Follow business logic
    pub follow_service: Arc<dyn FollowService>,
    /// Feed pagination
    pub feed_service: Arc<dyn FeedService>,
    /// Chat command dispatcher
    pub dispatcher: Arc<Dispatcher>,
    /// In-process metrics
    pub metrics: AppMetrics,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("score_engine", &self.score_engine)
            .field("post_service", &"Arc<dyn PostService>")
            .field("profile_service", &"Arc<dyn ProfileService>")
            .field("follow_service", &"Arc<dyn FollowService>")
            .field("feed_service", &"Arc<dyn FeedService>")
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl AppState {
    /// Build application state from configuration and repositories
    pub fn build(config: AppConfig, repositories: Repositories) -> Self {
        let score_engine = ScoreEngine::new(config.aura.clone());
        let aura_aggregator = create_aura_aggregator(repositories.aura.clone());

        let notifier = create_tracing_notifier();
        let cooldown = Arc::new(CooldownTracker::new(config.bot.post_cooldown_secs));

        let post_service = create_post_service(
            repositories.posts.clone(),
            repositories.follows.clone(),
            notifier,
            cooldown,
            config.bot.clone(),
        );
        let profile_service = create_profile_service(repositories.profiles.clone());
        let follow_service =
            create_follow_service(repositories.follows.clone(), repositories.profiles.clone());
        let feed_service =
            create_feed_service(repositories.posts.clone(), repositories.follows.clone());

        let dispatcher = Arc::new(Dispatcher::new(
            config.bot.clone(),
            score_engine.clone(),
            aura_aggregator.clone(),
            post_service.clone(),
            profile_service.clone(),
            follow_service.clone(),
            feed_service.clone(),
        ));

        Self {
            config,
            repositories,
            score_engine,
            aura_aggregator,
            post_service,
            profile_service,
            follow_service,
            feed_service,
            dispatcher,
            metrics: AppMetrics::default(),
        }
    }

    /// Create development state over the in-memory backend
    pub fn development() -> Self {
        Self::build(AppConfig::test(), Repositories::in_memory())
    }
}
