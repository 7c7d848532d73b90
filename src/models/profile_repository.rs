//! 用户资料仓储
//!
//! 提供 Profile 数据持久化服务。

use async_trait::async_trait;

use crate::error::Result;
use crate::models::profile::Profile;

/// 用户资料仓储 trait
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// 根据用户 ID 获取资料
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<Profile>>;

    /// 写入资料（存在则覆盖）
    async fn upsert(&self, profile: &Profile) -> Result<Profile>;

    /// 调整关注计数（记录不存在时以默认值创建）
    async fn adjust_counts(
        &self,
        user_id: &str,
        follower_delta: i64,
        following_delta: i64,
    ) -> Result<Profile>;

    /// 统计数量
    async fn count(&self) -> Result<u64>;
}

/// 对计数应用增量（饱和到 0）
pub(crate) fn apply_delta(count: u64, delta: i64) -> u64 {
    if delta >= 0 {
        count.saturating_add(delta as u64)
    } else {
        count.saturating_sub(delta.unsigned_abs())
    }
}

/// SurrealDB 仓储实现
#[cfg(feature = "surrealdb")]
pub use surreal_impl::ProfileRepositoryImpl;

#[cfg(feature = "surrealdb")]
mod surreal_impl {
    use std::marker::PhantomData;

    use async_trait::async_trait;

    use super::{ProfileRepository, apply_delta};
    use crate::error::{AppError, Result};
    use crate::models::profile::Profile;
    use crate::storage::surrealdb::SurrealPool;

    #[derive(Clone)]
    pub struct ProfileRepositoryImpl {
        pool: SurrealPool,
        _marker: PhantomData<Profile>,
    }

    impl ProfileRepositoryImpl {
        pub fn new(pool: SurrealPool) -> Self {
            Self {
                pool,
                _marker: PhantomData,
            }
        }
    }

    #[async_trait]
    impl ProfileRepository for ProfileRepositoryImpl {
        async fn get_by_user_id(&self, user_id: &str) -> Result<Option<Profile>> {
            let db = self.pool.inner().await;
            let result: Option<Profile> = db.select(("profile", user_id)).await?;
            Ok(result)
        }

        async fn upsert(&self, profile: &Profile) -> Result<Profile> {
            let db = self.pool.inner().await;
            let stored: Option<Profile> = db
                .upsert(("profile", profile.user_id.as_str()))
                .content(profile.clone())
                .await?;

            stored.ok_or_else(|| {
                AppError::Database(format!("Failed to upsert profile: {}", profile.user_id))
            })
        }

        async fn adjust_counts(
            &self,
            user_id: &str,
            follower_delta: i64,
            following_delta: i64,
        ) -> Result<Profile> {
            let mut profile = self
                .get_by_user_id(user_id)
                .await?
                .unwrap_or_else(|| Profile::new(user_id));

            profile.follower_count = apply_delta(profile.follower_count, follower_delta);
            profile.following_count = apply_delta(profile.following_count, following_delta);
            profile.updated_at = chrono::Utc::now();

            self.upsert(&profile).await
        }

        async fn count(&self) -> Result<u64> {
            let db = self.pool.inner().await;
            let result: Vec<serde_json::Value> = db
                .query("SELECT count() FROM profile GROUP ALL")
                .await?
                .take(0)?;
            Ok(result
                .first()
                .and_then(|v| v.get("count"))
                .and_then(|c| c.as_u64())
                .unwrap_or(0))
        }
    }
}
