//! 关注关系仓储

use async_trait::async_trait;

use crate::error::Result;
use crate::models::follow::Follow;

/// 关注关系仓储 trait
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// 创建关注关系
    async fn create(&self, follow: &Follow) -> Result<Follow>;

    /// 关注关系是否存在
    async fn exists(&self, follower_id: &str, following_id: &str) -> Result<bool>;

    /// 某用户关注的所有人
    async fn list_following(&self, follower_id: &str) -> Result<Vec<Follow>>;

    /// 关注某用户的所有人
    async fn list_followers(&self, following_id: &str) -> Result<Vec<Follow>>;
}

/// SurrealDB 仓储实现
#[cfg(feature = "surrealdb")]
pub use surreal_impl::FollowRepositoryImpl;

#[cfg(feature = "surrealdb")]
mod surreal_impl {
    use std::marker::PhantomData;

    use async_trait::async_trait;

    use super::FollowRepository;
    use crate::error::{AppError, Result};
    use crate::models::follow::Follow;
    use crate::storage::surrealdb::SurrealPool;

    #[derive(Clone)]
    pub struct FollowRepositoryImpl {
        pool: SurrealPool,
        _marker: PhantomData<Follow>,
    }

    impl FollowRepositoryImpl {
        pub fn new(pool: SurrealPool) -> Self {
            Self {
                pool,
                _marker: PhantomData,
            }
        }
    }

    #[async_trait]
    impl FollowRepository for FollowRepositoryImpl {
        async fn create(&self, follow: &Follow) -> Result<Follow> {
            let db = self.pool.inner().await;
            let created: Option<Follow> = db
                .create(("follow", follow.key()))
                .content(follow.clone())
                .await?;

            created.ok_or_else(|| {
                AppError::Database(format!("Failed to create follow: {}", follow.key()))
            })
        }

        async fn exists(&self, follower_id: &str, following_id: &str) -> Result<bool> {
            let db = self.pool.inner().await;
            let key = Follow::new(follower_id, following_id).key();
            let result: Option<Follow> = db.select(("follow", key)).await?;
            Ok(result.is_some())
        }

        async fn list_following(&self, follower_id: &str) -> Result<Vec<Follow>> {
            let db = self.pool.inner().await;
            let query = "SELECT * FROM follow WHERE follower_id = $follower_id";
            let result: Vec<Follow> = db
                .query(query)
                .bind(("follower_id", follower_id.to_string()))
                .await?
                .take(0)?;
            Ok(result)
        }

        async fn list_followers(&self, following_id: &str) -> Result<Vec<Follow>> {
            let db = self.pool.inner().await;
            let query = "SELECT * FROM follow WHERE following_id = $following_id";
            let result: Vec<Follow> = db
                .query(query)
                .bind(("following_id", following_id.to_string()))
                .await?
                .take(0)?;
            Ok(result)
        }
    }
}
