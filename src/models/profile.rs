//! 用户资料数据模型
//!
//! 存储用户的个人简介和关注计数。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 默认简介
pub const DEFAULT_BIO: &str = "No bio set.";

/// 用户资料
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// 用户 ID（唯一键）
    pub user_id: String,

    /// 个人简介
    pub bio: String,

    /// 粉丝数
    pub follower_count: u64,

    /// 关注数
    pub following_count: u64,

    /// 创建时间
    pub created_at: DateTime<Utc>,

    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// 创建默认资料
    pub fn new(user_id: &str) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.to_string(),
            bio: DEFAULT_BIO.to_string(),
            follower_count: 0,
            following_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// 更新简介
    pub fn set_bio(&mut self, bio: &str) {
        self.bio = if bio.trim().is_empty() {
            DEFAULT_BIO.to_string()
        } else {
            bio.to_string()
        };
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let profile = Profile::new("user_123");
        assert_eq!(profile.user_id, "user_123");
        assert_eq!(profile.bio, DEFAULT_BIO);
        assert_eq!(profile.follower_count, 0);
        assert_eq!(profile.following_count, 0);
    }

    #[test]
    fn test_set_bio() {
        let mut profile = Profile::new("user_123");
        profile.set_bio("I love coding!");
        assert_eq!(profile.bio, "I love coding!");

        // 空白简介回退到默认值
        profile.set_bio("   ");
        assert_eq!(profile.bio, DEFAULT_BIO);
    }
}
