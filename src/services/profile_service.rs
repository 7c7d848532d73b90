//! 用户资料服务

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::profile::Profile;
use crate::models::profile_repository::ProfileRepository;

/// 用户资料服务 trait
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// 设置简介（资料不存在时创建）
    async fn set_bio(&self, user_id: &str, bio: &str) -> Result<Profile>;

    /// 获取资料
    async fn get(&self, user_id: &str) -> Result<Profile>;
}

/// 用户资料服务实现
pub struct ProfileServiceImpl {
    profiles: Arc<dyn ProfileRepository>,
}

impl ProfileServiceImpl {
    /// 创建新的服务实例
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl ProfileService for ProfileServiceImpl {
    async fn set_bio(&self, user_id: &str, bio: &str) -> Result<Profile> {
        let mut profile = self
            .profiles
            .get_by_user_id(user_id)
            .await?
            .unwrap_or_else(|| Profile::new(user_id));

        profile.set_bio(bio);
        let stored = self.profiles.upsert(&profile).await?;
        tracing::debug!(user_id, "profile bio updated");
        Ok(stored)
    }

    async fn get(&self, user_id: &str) -> Result<Profile> {
        self.profiles
            .get_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile not found: {}", user_id)))
    }
}

/// 创建用户资料服务
pub fn create_profile_service(profiles: Arc<dyn ProfileRepository>) -> Arc<dyn ProfileService> {
    Arc::new(ProfileServiceImpl::new(profiles))
}
