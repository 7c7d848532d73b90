//! Notifier Port
//!
//! Direct-message delivery to users lives in the platform layer; the
//! services only talk to this trait. Delivery failures are the caller's
//! choice to ignore; a missed DM never fails the underlying operation.

use async_trait::async_trait;

use crate::error::Result;

/// Notification delivery port
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a direct message to a user
    async fn notify(&self, user_id: &str, message: &str) -> Result<()>;
}

/// Notifier that logs instead of delivering
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, user_id: &str, message: &str) -> Result<()> {
        tracing::info!(user_id, message, "notification");
        Ok(())
    }
}

/// Create the default logging notifier
pub fn create_tracing_notifier() -> std::sync::Arc<dyn Notifier> {
    std::sync::Arc::new(TracingNotifier)
}
