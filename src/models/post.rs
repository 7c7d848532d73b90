//! 帖子数据模型
//!
//! 存储帖子内容、话题标签、附件和点赞/点踩状态。

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 帖子附件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// 附件 URL
    pub url: String,
    /// MIME 类型
    pub content_type: String,
    /// 附件大小（字节）
    pub size: u64,
}

/// 互动类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    /// 点赞
    Like,
    /// 点踩
    Dislike,
}

/// 帖子
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// 帖子唯一标识
    pub id: String,

    /// 作者用户 ID
    pub user_id: String,

    /// 帖子内容
    pub content: String,

    /// 话题标签（不含 # 前缀）
    pub hashtags: Vec<String>,

    /// 附件列表
    pub attachments: Vec<Attachment>,

    /// 点赞数
    pub likes: u64,

    /// 点赞用户
    pub likers: Vec<String>,

    /// 点踩数
    pub dislikes: u64,

    /// 点踩用户
    pub dislikers: Vec<String>,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 话题标签模式：# 后接非空白非 # 字符
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#[^\s#]+").expect("hashtag regex"));

impl Post {
    /// 创建新帖子，话题标签从内容中提取
    pub fn new(user_id: &str, content: &str, attachments: Vec<Attachment>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            content: content.to_string(),
            hashtags: Self::extract_hashtags(content),
            attachments,
            likes: 0,
            likers: Vec::new(),
            dislikes: 0,
            dislikers: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// 提取内容中的话题标签（去掉 # 前缀）
    pub fn extract_hashtags(content: &str) -> Vec<String> {
        HASHTAG_RE
            .find_iter(content)
            .map(|m| m.as_str()[1..].to_string())
            .collect()
    }

    /// 是否为作者本人
    pub fn is_author(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// 记录一次互动
    ///
    /// 同一用户对同一帖子的每种互动最多记一次；重复互动返回 false。
    pub fn apply_reaction(&mut self, user_id: &str, kind: ReactionKind) -> bool {
        match kind {
            ReactionKind::Like => {
                if self.likers.iter().any(|u| u == user_id) {
                    return false;
                }
                self.likes += 1;
                self.likers.push(user_id.to_string());
                true
            }
            ReactionKind::Dislike => {
                if self.dislikers.iter().any(|u| u == user_id) {
                    return false;
                }
                self.dislikes += 1;
                self.dislikers.push(user_id.to_string());
                true
            }
        }
    }

    /// 是否带有指定话题标签
    pub fn has_hashtag(&self, tag: &str) -> bool {
        self.hashtags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_creation_extracts_hashtags() {
        let post = Post::new("user_123", "Hello #world and #rust!", Vec::new());
        assert_eq!(post.user_id, "user_123");
        assert_eq!(post.hashtags, vec!["world", "rust!"]);
        assert!(!post.id.is_empty());
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn test_hashtag_extraction_stops_at_whitespace_and_hash() {
        assert_eq!(
            Post::extract_hashtags("#a#b #c d"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert!(Post::extract_hashtags("no tags here").is_empty());
    }

    #[test]
    fn test_reaction_recorded_once_per_user_per_kind() {
        let mut post = Post::new("author", "content", Vec::new());

        assert!(post.apply_reaction("fan", ReactionKind::Like));
        assert!(!post.apply_reaction("fan", ReactionKind::Like));
        assert_eq!(post.likes, 1);

        // 同一用户仍可点踩（按互动类型独立记录）
        assert!(post.apply_reaction("fan", ReactionKind::Dislike));
        assert_eq!(post.dislikes, 1);
    }

    #[test]
    fn test_is_author() {
        let post = Post::new("author", "content", Vec::new());
        assert!(post.is_author("author"));
        assert!(!post.is_author("other"));
    }
}
