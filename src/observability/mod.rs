//! 可观测性模块
//!
//! 提供 Prometheus 格式指标、健康检查和就绪检查。

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

// ===== Simple Metrics (using atomics for zero-dep implementation) =====

/// 简单应用指标
#[derive(Clone, Default, Debug)]
pub struct AppMetrics {
    pub messages_scored_total: Arc<AtomicU64>,
    pub commands_total: Arc<AtomicU64>,
    pub posts_total: Arc<AtomicU64>,
    pub reactions_total: Arc<AtomicU64>,
    pub follows_total: Arc<AtomicU64>,
    pub errors_total: Arc<AtomicU64>,
}

impl AppMetrics {
    /// 记录一次计分消息
    pub fn record_message_scored(&self) {
        self.messages_scored_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录一次命令
    pub fn record_command(&self) {
        self.commands_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录一次发帖
    pub fn record_post(&self) {
        self.posts_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录一次互动
    pub fn record_reaction(&self) {
        self.reactions_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录一次关注
    pub fn record_follow(&self) {
        self.follows_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录错误
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP messages_scored_total Messages folded into aura records
# TYPE messages_scored_total counter
messages_scored_total {}
# HELP commands_total Chat commands handled
# TYPE commands_total counter
commands_total {}
# HELP posts_total Posts created
# TYPE posts_total counter
posts_total {}
# HELP reactions_total Reactions recorded
# TYPE reactions_total counter
reactions_total {}
# HELP follows_total Follow edges created
# TYPE follows_total counter
follows_total {}
# HELP errors_total Total errors
# TYPE errors_total counter
errors_total {}
"#,
            self.messages_scored_total.load(Ordering::SeqCst),
            self.commands_total.load(Ordering::SeqCst),
            self.posts_total.load(Ordering::SeqCst),
            self.reactions_total.load(Ordering::SeqCst),
            self.follows_total.load(Ordering::SeqCst),
            self.errors_total.load(Ordering::SeqCst),
        )
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// 服务状态
    pub status: String,
    /// 版本号
    pub version: String,
    /// 启动时间
    pub started_at: DateTime<Utc>,
    /// 已运行秒数
    pub uptime_seconds: i64,
}

/// 可观测性状态
#[derive(Debug, Clone)]
pub struct ObservabilityState {
    /// 版本号
    pub version: String,
    /// 启动时间
    pub started_at: DateTime<Utc>,
    /// 应用指标
    pub metrics: AppMetrics,
}

impl ObservabilityState {
    /// 创建可观测性状态
    pub fn new(version: String, metrics: AppMetrics) -> Self {
        Self {
            version,
            started_at: Utc::now(),
            metrics,
        }
    }
}

/// GET /health
async fn health(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    let now = Utc::now();
    Json(HealthStatus {
        status: "ok".to_string(),
        version: state.version.clone(),
        started_at: state.started_at,
        uptime_seconds: (now - state.started_at).num_seconds(),
    })
}

/// GET /ready
async fn ready() -> impl IntoResponse {
    Json(serde_json::json!({ "ready": true }))
}

/// GET /metrics
async fn metrics(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    state.metrics.gather()
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/metrics", get(metrics))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_gather_includes_counters() {
        let metrics = AppMetrics::default();
        metrics.record_message_scored();
        metrics.record_message_scored();
        metrics.record_post();

        let output = metrics.gather();
        assert!(output.contains("messages_scored_total 2"));
        assert!(output.contains("posts_total 1"));
        assert!(output.contains("errors_total 0"));
    }
}
