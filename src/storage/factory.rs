//! 存储工厂模块
//!
//! 根据配置创建相应的仓储集合。

use std::sync::Arc;

use crate::config::config::{DatabaseBackend, DatabaseConfig};
use crate::error::Result;
use crate::models::aura_repository::AuraRepository;
use crate::models::follow_repository::FollowRepository;
use crate::models::post_repository::PostRepository;
use crate::models::profile_repository::ProfileRepository;
use crate::storage::memory::{
    MemoryAuraRepository, MemoryFollowRepository, MemoryPostRepository, MemoryProfileRepository,
};

#[cfg(feature = "surrealdb")]
use crate::storage::surrealdb::SurrealPool;

/// 仓储集合
#[derive(Clone)]
pub struct Repositories {
    /// 气场记录仓储
    pub aura: Arc<dyn AuraRepository>,
    /// 帖子仓储
    pub posts: Arc<dyn PostRepository>,
    /// 用户资料仓储
    pub profiles: Arc<dyn ProfileRepository>,
    /// 关注关系仓储
    pub follows: Arc<dyn FollowRepository>,
}

impl Repositories {
    /// 创建内存仓储集合
    pub fn in_memory() -> Self {
        Self {
            aura: Arc::new(MemoryAuraRepository::new()),
            posts: Arc::new(MemoryPostRepository::new()),
            profiles: Arc::new(MemoryProfileRepository::new()),
            follows: Arc::new(MemoryFollowRepository::new()),
        }
    }
}

/// 存储工厂
pub struct StorageFactory;

impl StorageFactory {
    /// 根据配置创建仓储集合
    #[cfg(feature = "surrealdb")]
    pub async fn create(config: &DatabaseConfig) -> Result<Repositories> {
        use crate::models::aura_repository::AuraRepositoryImpl;
        use crate::models::follow_repository::FollowRepositoryImpl;
        use crate::models::post_repository::PostRepositoryImpl;
        use crate::models::profile_repository::ProfileRepositoryImpl;

        match config.backend {
            DatabaseBackend::Surrealdb => {
                let pool = SurrealPool::new(config.clone())
                    .await
                    .map_err(|e| crate::error::AppError::Database(e.to_string()))?;
                Ok(Repositories {
                    aura: Arc::new(AuraRepositoryImpl::new(pool.clone())),
                    posts: Arc::new(PostRepositoryImpl::new(pool.clone())),
                    profiles: Arc::new(ProfileRepositoryImpl::new(pool.clone())),
                    follows: Arc::new(FollowRepositoryImpl::new(pool)),
                })
            }
            DatabaseBackend::Memory => Ok(Repositories::in_memory()),
        }
    }

    #[cfg(not(feature = "surrealdb"))]
    pub async fn create(config: &DatabaseConfig) -> Result<Repositories> {
        match config.backend {
            DatabaseBackend::Surrealdb => Err(crate::error::AppError::Config(
                "SurrealDB feature is not enabled. Enable 'surrealdb' feature or use the memory backend.".into(),
            )),
            DatabaseBackend::Memory => Ok(Repositories::in_memory()),
        }
    }
}
