use std::sync::Arc;

use pakshi::api::{self, app_state::AppState};
use pakshi::config::loader::ConfigLoader;
use pakshi::observability::{ObservabilityState, create_observability_router};
use pakshi::storage::StorageFactory;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Pakshi...");

    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;
    info!("Configuration loaded successfully");

    let repositories = StorageFactory::create(&config.database).await?;
    info!("Repositories initialized ({:?} backend)", config.database.backend);

    let app_state = AppState::build(config.clone(), repositories);
    info!("Application state created");

    // 创建可观测性状态并集成路由
    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        app_state.metrics.clone(),
    ));
    let api_router = api::create_router(app_state);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
