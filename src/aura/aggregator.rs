//! Aura Aggregator Service
//!
//! Folds per-message scores into each user's running average. The fold is a
//! read-modify-write against the user's record; a per-user async lock keeps
//! concurrent folds for the same user from seeing a stale count, while folds
//! for different users proceed independently.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::aura_record::AuraRecord;
use crate::models::aura_repository::AuraRepository;

/// Aura Aggregator Service
#[derive(Clone)]
pub struct AuraAggregator {
    repo: Arc<dyn AuraRepository>,
    user_locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl AuraAggregator {
    /// Create a new AuraAggregator
    pub fn new(repo: Arc<dyn AuraRepository>) -> Self {
        Self {
            repo,
            user_locks: Arc::new(DashMap::new()),
        }
    }

    /// Fold a new message score into the user's running average
    ///
    /// Creates the record on the user's first message; otherwise applies the
    /// incremental mean and overwrites the display name. Storage errors
    /// propagate to the caller unchanged, no retry here.
    pub async fn fold(
        &self,
        user_id: &str,
        display_name: &str,
        new_score: i32,
    ) -> Result<AuraRecord> {
        let lock = self
            .user_locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        let record = match self.repo.get_by_user_id(user_id).await? {
            Some(mut record) => {
                record.fold(display_name, new_score);
                record
            }
            None => AuraRecord::new(user_id, display_name, new_score),
        };

        tracing::debug!(
            user_id,
            aura_points = record.aura_points,
            message_count = record.message_count,
            "folded message score"
        );

        self.repo.upsert(&record).await
    }

    /// Get a user's aura record
    ///
    /// Returns None for unknown users, never a zero-initialized record.
    pub async fn get(&self, user_id: &str) -> Result<Option<AuraRecord>> {
        self.repo.get_by_user_id(user_id).await
    }

    /// List records ordered by aura points
    pub async fn list(&self, limit: usize, start: usize) -> Result<Vec<AuraRecord>> {
        self.repo.list(limit, start).await
    }
}

/// Create an AuraAggregator backed by the given repository
pub fn create_aura_aggregator(repo: Arc<dyn AuraRepository>) -> Arc<AuraAggregator> {
    Arc::new(AuraAggregator::new(repo))
}
