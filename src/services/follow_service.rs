//! 关注服务
//!
//! 维护关注关系和双方资料上的关注计数。

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::follow::Follow;
use crate::models::follow_repository::FollowRepository;
use crate::models::profile_repository::ProfileRepository;

/// 关注服务 trait
#[async_trait]
pub trait FollowService: Send + Sync {
    /// 关注用户
    async fn follow(&self, follower_id: &str, following_id: &str) -> Result<Follow>;

    /// 某用户关注的用户 ID 列表
    async fn following_ids(&self, user_id: &str) -> Result<Vec<String>>;

    /// 关注某用户的用户 ID 列表
    async fn follower_ids(&self, user_id: &str) -> Result<Vec<String>>;
}

/// 关注服务实现
pub struct FollowServiceImpl {
    follows: Arc<dyn FollowRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl FollowServiceImpl {
    /// 创建新的服务实例
    pub fn new(follows: Arc<dyn FollowRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { follows, profiles }
    }
}

#[async_trait]
impl FollowService for FollowServiceImpl {
    async fn follow(&self, follower_id: &str, following_id: &str) -> Result<Follow> {
        let follow = Follow::new(follower_id, following_id);

        if follow.is_self_follow() {
            return Err(AppError::Validation(
                "You cannot follow yourself".to_string(),
            ));
        }

        if self.follows.exists(follower_id, following_id).await? {
            return Err(AppError::Conflict(
                "You already follow this user".to_string(),
            ));
        }

        let created = self.follows.create(&follow).await?;

        // 被关注者粉丝数 +1，关注者关注数 +1（资料不存在时以默认值创建）
        self.profiles.adjust_counts(following_id, 1, 0).await?;
        self.profiles.adjust_counts(follower_id, 0, 1).await?;

        tracing::info!(follower_id, following_id, "follow created");
        Ok(created)
    }

    async fn following_ids(&self, user_id: &str) -> Result<Vec<String>> {
        Ok(self
            .follows
            .list_following(user_id)
            .await?
            .into_iter()
            .map(|f| f.following_id)
            .collect())
    }

    async fn follower_ids(&self, user_id: &str) -> Result<Vec<String>> {
        Ok(self
            .follows
            .list_followers(user_id)
            .await?
            .into_iter()
            .map(|f| f.follower_id)
            .collect())
    }
}

/// 创建关注服务
pub fn create_follow_service(
    follows: Arc<dyn FollowRepository>,
    profiles: Arc<dyn ProfileRepository>,
) -> Arc<dyn FollowService> {
    Arc::new(FollowServiceImpl::new(follows, profiles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::{MemoryFollowRepository, MemoryProfileRepository};

    fn service() -> (FollowServiceImpl, Arc<MemoryProfileRepository>) {
        let profiles = Arc::new(MemoryProfileRepository::new());
        let service =
            FollowServiceImpl::new(Arc::new(MemoryFollowRepository::new()), profiles.clone());
        (service, profiles)
    }

    #[tokio::test]
    async fn test_follow_updates_both_profiles() {
        let (service, profiles) = service();
        service.follow("a", "b").await.unwrap();

        let a = profiles.get_by_user_id("a").await.unwrap().unwrap();
        let b = profiles.get_by_user_id("b").await.unwrap().unwrap();
        assert_eq!(a.following_count, 1);
        assert_eq!(a.follower_count, 0);
        assert_eq!(b.follower_count, 1);
        assert_eq!(b.following_count, 0);
    }

    #[tokio::test]
    async fn test_self_follow_rejected() {
        let (service, _) = service();
        assert!(matches!(
            service.follow("a", "a").await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_duplicate_follow_rejected() {
        let (service, _) = service();
        service.follow("a", "b").await.unwrap();
        assert!(matches!(
            service.follow("a", "b").await.unwrap_err(),
            AppError::Conflict(_)
        ));
    }

    #[tokio::test]
    async fn test_following_and_follower_ids() {
        let (service, _) = service();
        service.follow("a", "b").await.unwrap();
        service.follow("a", "c").await.unwrap();
        service.follow("d", "b").await.unwrap();

        let mut following = service.following_ids("a").await.unwrap();
        following.sort();
        assert_eq!(following, vec!["b", "c"]);

        let mut followers = service.follower_ids("b").await.unwrap();
        followers.sort();
        assert_eq!(followers, vec!["a", "d"]);
    }
}
