//! Posting Cooldown
//!
//! Explicit per-user cooldown tracker. Owned by AppState and injected into
//! the services that need it, never a process-wide singleton.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

/// Cooldown check result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownResult {
    /// Action is allowed
    Allowed,
    /// Action is on cooldown
    Limited {
        /// Seconds until the action is allowed again
        retry_after: u64,
    },
}

/// Per-user cooldown tracker
pub struct CooldownTracker {
    window: Duration,
    last_action: DashMap<String, DateTime<Utc>>,
}

impl CooldownTracker {
    /// Create a tracker with the given window
    pub fn new(window_secs: u64) -> Self {
        Self {
            window: Duration::seconds(window_secs as i64),
            last_action: DashMap::new(),
        }
    }

    /// Check the user's cooldown and start a new window when allowed
    pub fn try_acquire(&self, user_id: &str) -> CooldownResult {
        let now = Utc::now();

        if let Some(last) = self.last_action.get(user_id) {
            let expires = *last + self.window;
            if now < expires {
                let retry_after = (expires - now).num_seconds().max(0) as u64;
                return CooldownResult::Limited { retry_after };
            }
        }

        self.last_action.insert(user_id.to_string(), now);
        CooldownResult::Allowed
    }

    /// Clear a user's window (administrative/test helper)
    pub fn reset(&self, user_id: &str) {
        self.last_action.remove(user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_action_allowed() {
        let tracker = CooldownTracker::new(60);
        assert_eq!(tracker.try_acquire("u"), CooldownResult::Allowed);
    }

    #[test]
    fn test_second_action_limited_within_window() {
        let tracker = CooldownTracker::new(60);
        tracker.try_acquire("u");
        assert!(matches!(
            tracker.try_acquire("u"),
            CooldownResult::Limited { .. }
        ));
    }

    #[test]
    fn test_users_tracked_independently() {
        let tracker = CooldownTracker::new(60);
        tracker.try_acquire("a");
        assert_eq!(tracker.try_acquire("b"), CooldownResult::Allowed);
    }

    #[test]
    fn test_zero_window_never_limits() {
        let tracker = CooldownTracker::new(0);
        tracker.try_acquire("u");
        assert_eq!(tracker.try_acquire("u"), CooldownResult::Allowed);
    }

    #[test]
    fn test_reset_clears_window() {
        let tracker = CooldownTracker::new(60);
        tracker.try_acquire("u");
        tracker.reset("u");
        assert_eq!(tracker.try_acquire("u"), CooldownResult::Allowed);
    }
}
