//! 关注关系数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 关注关系（有序对，最多一条）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    /// 关注者用户 ID
    pub follower_id: String,

    /// 被关注者用户 ID
    pub following_id: String,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// 创建关注关系
    pub fn new(follower_id: &str, following_id: &str) -> Self {
        Self {
            follower_id: follower_id.to_string(),
            following_id: following_id.to_string(),
            created_at: Utc::now(),
        }
    }

    /// 是否为自我关注
    pub fn is_self_follow(&self) -> bool {
        self.follower_id == self.following_id
    }

    /// 存储键：有序对唯一
    pub fn key(&self) -> String {
        format!("{}_{}", self.follower_id, self.following_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_creation() {
        let follow = Follow::new("a", "b");
        assert_eq!(follow.follower_id, "a");
        assert_eq!(follow.following_id, "b");
        assert!(!follow.is_self_follow());
        assert_eq!(follow.key(), "a_b");
    }

    #[test]
    fn test_self_follow_detected() {
        assert!(Follow::new("a", "a").is_self_follow());
    }
}
