//! 帖子服务
//!
//! 提供发帖、互动和话题检索的业务逻辑。

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::BotConfig;
use crate::error::{AppError, Result};
use crate::models::follow_repository::FollowRepository;
use crate::models::post::{Attachment, Post, ReactionKind};
use crate::models::post_repository::PostRepository;
use crate::services::cooldown::{CooldownResult, CooldownTracker};
use crate::services::notifier::Notifier;

/// 帖子服务 trait
#[async_trait]
pub trait PostService: Send + Sync {
    /// 创建帖子
    async fn create_post(
        &self,
        user_id: &str,
        display_name: &str,
        content: &str,
        attachments: Vec<Attachment>,
    ) -> Result<Post>;

    /// 记录一次互动
    async fn react(&self, post_id: &str, user_id: &str, kind: ReactionKind) -> Result<Post>;

    /// 根据 ID 获取帖子
    async fn get_by_id(&self, post_id: &str) -> Result<Option<Post>>;

    /// 按序号获取某用户的帖子（1 为最新）
    async fn get_by_index(&self, user_id: &str, index: usize) -> Result<Post>;

    /// 按话题标签检索帖子
    async fn search_by_hashtag(&self, tag: &str) -> Result<Vec<Post>>;
}

/// 帖子服务实现
pub struct PostServiceImpl {
    posts: Arc<dyn PostRepository>,
    follows: Arc<dyn FollowRepository>,
    notifier: Arc<dyn Notifier>,
    cooldown: Arc<CooldownTracker>,
    config: BotConfig,
}

impl PostServiceImpl {
    /// 创建新的服务实例
    pub fn new(
        posts: Arc<dyn PostRepository>,
        follows: Arc<dyn FollowRepository>,
        notifier: Arc<dyn Notifier>,
        cooldown: Arc<CooldownTracker>,
        config: BotConfig,
    ) -> Self {
        Self {
            posts,
            follows,
            notifier,
            cooldown,
            config,
        }
    }

    /// 过滤出类型和大小均合规的附件（不合规的丢弃，不报错）
    fn filter_attachments(&self, attachments: Vec<Attachment>) -> Vec<Attachment> {
        attachments
            .into_iter()
            .filter(|att| {
                let type_ok = self.config.allowed_image_types.contains(&att.content_type)
                    || self.config.allowed_video_types.contains(&att.content_type);
                type_ok && att.size <= self.config.max_attachment_size
            })
            .collect()
    }

    /// 通知作者的所有粉丝（投递失败只记录，不影响发帖）
    async fn notify_followers(&self, post: &Post, display_name: &str) {
        let followers = match self.follows.list_followers(&post.user_id).await {
            Ok(followers) => followers,
            Err(e) => {
                tracing::warn!(user_id = %post.user_id, error = %e, "failed to list followers");
                return;
            }
        };

        let suffix = if post.attachments.is_empty() {
            ""
        } else {
            " (with attachments)"
        };
        let message = format!("{} just posted: {}{}", display_name, post.content, suffix);

        for follower in followers {
            if let Err(e) = self.notifier.notify(&follower.follower_id, &message).await {
                tracing::warn!(
                    follower_id = %follower.follower_id,
                    error = %e,
                    "could not notify follower"
                );
            }
        }
    }
}

#[async_trait]
impl PostService for PostServiceImpl {
    async fn create_post(
        &self,
        user_id: &str,
        display_name: &str,
        content: &str,
        attachments: Vec<Attachment>,
    ) -> Result<Post> {
        if let CooldownResult::Limited { retry_after } = self.cooldown.try_acquire(user_id) {
            tracing::debug!(user_id, retry_after, "post rejected by cooldown");
            return Err(AppError::RateLimited);
        }

        let attachments = self.filter_attachments(attachments);
        if content.trim().is_empty() && attachments.is_empty() {
            return Err(AppError::Validation(
                "Post needs a message or valid image/video attachments".to_string(),
            ));
        }

        let post = Post::new(user_id, content, attachments);
        let created = self.posts.create(&post).await?;
        tracing::info!(post_id = %created.id, user_id, "post created");

        self.notify_followers(&created, display_name).await;

        Ok(created)
    }

    async fn react(&self, post_id: &str, user_id: &str, kind: ReactionKind) -> Result<Post> {
        let mut post = self
            .posts
            .get_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post not found: {}", post_id)))?;

        if post.is_author(user_id) {
            return Err(AppError::Validation(
                "Authors cannot react to their own posts".to_string(),
            ));
        }

        if !post.apply_reaction(user_id, kind) {
            return Err(AppError::Conflict(
                "Reaction already recorded for this user".to_string(),
            ));
        }

        let updated = self
            .posts
            .update(post_id, &post)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post not found: {}", post_id)))?;

        let action = match kind {
            ReactionKind::Like => "liked",
            ReactionKind::Dislike => "disliked",
        };
        let message = format!("{} {} your post: {}", user_id, action, updated.content);
        if let Err(e) = self.notifier.notify(&updated.user_id, &message).await {
            tracing::warn!(author_id = %updated.user_id, error = %e, "could not notify author");
        }

        Ok(updated)
    }

    async fn get_by_id(&self, post_id: &str) -> Result<Option<Post>> {
        self.posts.get_by_id(post_id).await
    }

    async fn get_by_index(&self, user_id: &str, index: usize) -> Result<Post> {
        if index == 0 {
            return Err(AppError::Validation(
                "Post number must be 1 or greater".to_string(),
            ));
        }

        let total = self.posts.count_by_author(user_id).await? as usize;
        if total == 0 {
            return Err(AppError::NotFound(format!("{} has no posts", user_id)));
        }
        if index > total {
            return Err(AppError::Validation(format!(
                "User only has {} post(s)",
                total
            )));
        }

        let posts = self.posts.list_by_author(user_id, 1, index - 1).await?;
        posts
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Post #{} not found", index)))
    }

    async fn search_by_hashtag(&self, tag: &str) -> Result<Vec<Post>> {
        let tag = tag.trim_start_matches('#');
        if tag.is_empty() {
            return Err(AppError::Validation(
                "Hashtag cannot be empty".to_string(),
            ));
        }
        self.posts
            .search_by_hashtag(tag, self.config.search_limit)
            .await
    }
}

/// 创建帖子服务
pub fn create_post_service(
    posts: Arc<dyn PostRepository>,
    follows: Arc<dyn FollowRepository>,
    notifier: Arc<dyn Notifier>,
    cooldown: Arc<CooldownTracker>,
    config: BotConfig,
) -> Arc<dyn PostService> {
    Arc::new(PostServiceImpl::new(
        posts, follows, notifier, cooldown, config,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::follow::Follow;
    use crate::services::notifier::TracingNotifier;
    use crate::storage::memory::{MemoryFollowRepository, MemoryPostRepository};

    fn service_with_window(window_secs: u64) -> PostServiceImpl {
        PostServiceImpl::new(
            Arc::new(MemoryPostRepository::new()),
            Arc::new(MemoryFollowRepository::new()),
            Arc::new(TracingNotifier),
            Arc::new(CooldownTracker::new(window_secs)),
            BotConfig::default(),
        )
    }

    fn service() -> PostServiceImpl {
        service_with_window(0)
    }

    fn image(size: u64) -> Attachment {
        Attachment {
            url: "https://cdn.example/a.png".to_string(),
            content_type: "image/png".to_string(),
            size,
        }
    }

    #[tokio::test]
    async fn test_create_post_extracts_hashtags() {
        let service = service();
        let post = service
            .create_post("u1", "User One", "Hello #world", Vec::new())
            .await
            .unwrap();
        assert_eq!(post.hashtags, vec!["world"]);
    }

    #[tokio::test]
    async fn test_create_post_rejects_empty() {
        let service = service();
        let err = service
            .create_post("u1", "User One", "   ", Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_oversized_attachments_filtered_out() {
        let service = service();
        // 超限附件被丢弃，纯附件帖因此变为空帖
        let err = service
            .create_post("u1", "User One", "", vec![image(9 * 1024 * 1024)])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let post = service
            .create_post("u1", "User One", "", vec![image(1024)])
            .await
            .unwrap();
        assert_eq!(post.attachments.len(), 1);
    }

    #[tokio::test]
    async fn test_cooldown_limits_second_post() {
        let service = service_with_window(60);
        service
            .create_post("u1", "User One", "first", Vec::new())
            .await
            .unwrap();
        let err = service
            .create_post("u1", "User One", "second", Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RateLimited));
    }

    #[tokio::test]
    async fn test_react_flow() {
        let service = service();
        let post = service
            .create_post("author", "Author", "content", Vec::new())
            .await
            .unwrap();

        // 作者不能给自己互动
        let err = service
            .react(&post.id, "author", ReactionKind::Like)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let updated = service.react(&post.id, "fan", ReactionKind::Like).await.unwrap();
        assert_eq!(updated.likes, 1);

        // 重复互动
        let err = service
            .react(&post.id, "fan", ReactionKind::Like)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_get_by_index_bounds() {
        let service = service();
        service
            .create_post("u1", "User One", "only post", Vec::new())
            .await
            .unwrap();

        let post = service.get_by_index("u1", 1).await.unwrap();
        assert_eq!(post.content, "only post");

        assert!(matches!(
            service.get_by_index("u1", 0).await.unwrap_err(),
            AppError::Validation(_)
        ));
        assert!(matches!(
            service.get_by_index("u1", 2).await.unwrap_err(),
            AppError::Validation(_)
        ));
        assert!(matches!(
            service.get_by_index("nobody", 1).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_search_strips_hash_prefix() {
        let service = service();
        service
            .create_post("u1", "User One", "tagged #rust", Vec::new())
            .await
            .unwrap();

        let found = service.search_by_hashtag("#rust").await.unwrap();
        assert_eq!(found.len(), 1);

        assert!(matches!(
            service.search_by_hashtag("#").await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_notify_followers_does_not_fail_post() {
        let follows = Arc::new(MemoryFollowRepository::new());
        follows.create(&Follow::new("fan", "author")).await.unwrap();

        let service = PostServiceImpl::new(
            Arc::new(MemoryPostRepository::new()),
            follows,
            Arc::new(TracingNotifier),
            Arc::new(CooldownTracker::new(0)),
            BotConfig::default(),
        );

        let post = service
            .create_post("author", "Author", "hello followers", Vec::new())
            .await
            .unwrap();
        assert_eq!(post.content, "hello followers");
    }
}
