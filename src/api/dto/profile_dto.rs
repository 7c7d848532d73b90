//! 用户资料 DTO
//!
//! 用于资料 API 的请求和响应序列化。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::profile::Profile;

/// 设置简介请求
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetBioRequest {
    /// 个人简介
    #[validate(length(max = 190))]
    pub bio: String,
}

/// 用户资料响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// 用户 ID
    pub user_id: String,

    /// 个人简介
    pub bio: String,

    /// 粉丝数
    pub follower_count: u64,

    /// 关注数
    pub following_count: u64,

    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        ProfileResponse {
            user_id: profile.user_id,
            bio: profile.bio,
            follower_count: profile.follower_count,
            following_count: profile.following_count,
            updated_at: profile.updated_at,
        }
    }
}
