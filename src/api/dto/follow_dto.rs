//! 关注关系 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 关注请求
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FollowRequest {
    /// 关注者用户 ID
    #[validate(length(min = 1, max = 64))]
    pub follower_id: String,

    /// 被关注者用户 ID
    #[validate(length(min = 1, max = 64))]
    pub following_id: String,
}

/// 关注响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowResponse {
    /// 关注者用户 ID
    pub follower_id: String,

    /// 被关注者用户 ID
    pub following_id: String,

    /// 提示消息
    pub message: String,
}

/// 关注列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowListResponse {
    /// 用户 ID 列表
    pub user_ids: Vec<String>,
    /// 数量
    pub total: u64,
}
