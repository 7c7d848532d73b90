//! 帖子 DTO
//!
//! 用于帖子 API 的请求和响应序列化。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::post::{Attachment, Post};

/// 附件 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentDto {
    /// 附件 URL
    pub url: String,
    /// MIME 类型
    pub content_type: String,
    /// 附件大小（字节）
    pub size: u64,
}

impl From<AttachmentDto> for Attachment {
    fn from(dto: AttachmentDto) -> Self {
        Attachment {
            url: dto.url,
            content_type: dto.content_type,
            size: dto.size,
        }
    }
}

impl From<Attachment> for AttachmentDto {
    fn from(att: Attachment) -> Self {
        AttachmentDto {
            url: att.url,
            content_type: att.content_type,
            size: att.size,
        }
    }
}

/// 创建帖子请求
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// 作者用户 ID
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,

    /// 作者显示名称
    #[validate(length(min = 1, max = 128))]
    pub display_name: String,

    /// 帖子内容
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub content: String,

    /// 附件列表
    #[serde(default)]
    pub attachments: Vec<AttachmentDto>,
}

/// 帖子响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    /// 帖子唯一标识
    pub id: String,

    /// 作者用户 ID
    pub user_id: String,

    /// 帖子内容
    pub content: String,

    /// 话题标签
    pub hashtags: Vec<String>,

    /// 附件列表
    pub attachments: Vec<AttachmentDto>,

    /// 点赞数
    pub likes: u64,

    /// 点踩数
    pub dislikes: u64,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        PostResponse {
            id: post.id,
            user_id: post.user_id,
            content: post.content,
            hashtags: post.hashtags,
            attachments: post.attachments.into_iter().map(Into::into).collect(),
            likes: post.likes,
            dislikes: post.dislikes,
            created_at: post.created_at,
        }
    }
}

/// 帖子列表响应（检索/信息流共用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPostsResponse {
    /// 帖子列表
    pub posts: Vec<PostResponse>,
    /// 总数
    pub total: u64,
    /// 页码
    pub page: usize,
    /// 每页数量
    pub page_size: usize,
}
