//! 气场记录仓储
//!
//! 提供 AuraRecord 数据持久化服务。

use async_trait::async_trait;

use crate::error::Result;
use crate::models::aura_record::AuraRecord;

/// 气场记录仓储 trait
#[async_trait]
pub trait AuraRepository: Send + Sync {
    /// 根据用户 ID 获取记录
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<AuraRecord>>;

    /// 写入记录（存在则覆盖）
    async fn upsert(&self, record: &AuraRecord) -> Result<AuraRecord>;

    /// 列出记录
    async fn list(&self, limit: usize, start: usize) -> Result<Vec<AuraRecord>>;

    /// 统计数量
    async fn count(&self) -> Result<u64>;
}

/// SurrealDB 仓储实现
#[cfg(feature = "surrealdb")]
pub use surreal_impl::AuraRepositoryImpl;

#[cfg(feature = "surrealdb")]
mod surreal_impl {
    use std::marker::PhantomData;

    use async_trait::async_trait;

    use super::AuraRepository;
    use crate::error::{AppError, Result};
    use crate::models::aura_record::AuraRecord;
    use crate::storage::surrealdb::SurrealPool;

    #[derive(Clone)]
    pub struct AuraRepositoryImpl {
        pool: SurrealPool,
        _marker: PhantomData<AuraRecord>,
    }

    impl AuraRepositoryImpl {
        pub fn new(pool: SurrealPool) -> Self {
            Self {
                pool,
                _marker: PhantomData,
            }
        }
    }

    #[async_trait]
    impl AuraRepository for AuraRepositoryImpl {
        async fn get_by_user_id(&self, user_id: &str) -> Result<Option<AuraRecord>> {
            let db = self.pool.inner().await;
            let result: Option<AuraRecord> = db.select(("user", user_id)).await?;
            Ok(result)
        }

        async fn upsert(&self, record: &AuraRecord) -> Result<AuraRecord> {
            let db = self.pool.inner().await;
            let stored: Option<AuraRecord> = db
                .upsert(("user", record.user_id.as_str()))
                .content(record.clone())
                .await?;

            stored.ok_or_else(|| {
                AppError::Database(format!("Failed to upsert aura record: {}", record.user_id))
            })
        }

        async fn list(&self, limit: usize, start: usize) -> Result<Vec<AuraRecord>> {
            let db = self.pool.inner().await;
            let query = "
                SELECT * FROM user
                ORDER BY aura_points DESC
                LIMIT $limit START $start
            ";
            let result: Vec<AuraRecord> = db
                .query(query)
                .bind(("limit", limit))
                .bind(("start", start))
                .await?
                .take(0)?;
            Ok(result)
        }

        async fn count(&self) -> Result<u64> {
            let db = self.pool.inner().await;
            let result: Vec<serde_json::Value> = db
                .query("SELECT count() FROM user GROUP ALL")
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
