//! 信息流服务
//!
//! 提供关注流和用户流的分页读取。

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::follow_repository::FollowRepository;
use crate::models::post::Post;
use crate::models::post_repository::PostRepository;

/// 分页参数
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// 页码（从 1 开始）
    pub page: usize,
    /// 每页数量
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 1,
        }
    }
}

impl Pagination {
    /// 创建新分页参数
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// 计算偏移量
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1)) * self.page_size
    }

    /// 检查分页参数是否有效
    pub fn is_valid(&self) -> bool {
        self.page > 0 && self.page_size > 0
    }
}

/// 信息流分页结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPage {
    /// 当前页帖子
    pub posts: Vec<Post>,
    /// 页码
    pub page: usize,
    /// 每页数量
    pub page_size: usize,
    /// 帖子总数
    pub total: u64,
}

/// 信息流服务 trait
#[async_trait]
pub trait FeedService: Send + Sync {
    /// 关注流：当前用户关注的所有作者的帖子，按时间倒序
    async fn home_feed(&self, user_id: &str, pagination: Pagination) -> Result<FeedPage>;

    /// 用户流：某个作者的帖子，按时间倒序
    async fn user_feed(&self, target_id: &str, pagination: Pagination) -> Result<FeedPage>;
}

/// 信息流服务实现
pub struct FeedServiceImpl {
    posts: Arc<dyn PostRepository>,
    follows: Arc<dyn FollowRepository>,
}

impl FeedServiceImpl {
    /// 创建新的服务实例
    pub fn new(posts: Arc<dyn PostRepository>, follows: Arc<dyn FollowRepository>) -> Self {
        Self { posts, follows }
    }
}

#[async_trait]
impl FeedService for FeedServiceImpl {
    async fn home_feed(&self, user_id: &str, pagination: Pagination) -> Result<FeedPage> {
        if !pagination.is_valid() {
            return Err(AppError::Validation("Invalid pagination".to_string()));
        }

        let authors: Vec<String> = self
            .follows
            .list_following(user_id)
            .await?
            .into_iter()
            .map(|f| f.following_id)
            .collect();

        if authors.is_empty() {
            return Ok(FeedPage {
                posts: Vec::new(),
                page: pagination.page,
                page_size: pagination.page_size,
                total: 0,
            });
        }

        let total = self.posts.count_by_authors(&authors).await?;
        let posts = self
            .posts
            .list_by_authors(&authors, pagination.page_size, pagination.offset())
            .await?;

        Ok(FeedPage {
            posts,
            page: pagination.page,
            page_size: pagination.page_size,
            total,
        })
    }

    async fn user_feed(&self, target_id: &str, pagination: Pagination) -> Result<FeedPage> {
        if !pagination.is_valid() {
            return Err(AppError::Validation("Invalid pagination".to_string()));
        }

        let total = self.posts.count_by_author(target_id).await?;
        let posts = self
            .posts
            .list_by_author(target_id, pagination.page_size, pagination.offset())
            .await?;

        Ok(FeedPage {
            posts,
            page: pagination.page,
            page_size: pagination.page_size,
            total,
        })
    }
}

/// 创建信息流服务
pub fn create_feed_service(
    posts: Arc<dyn PostRepository>,
    follows: Arc<dyn FollowRepository>,
) -> Arc<dyn FeedService> {
    Arc::new(FeedServiceImpl::new(posts, follows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::follow::Follow;
    use crate::storage::memory::{MemoryFollowRepository, MemoryPostRepository};

    async fn seeded() -> FeedServiceImpl {
        let posts = Arc::new(MemoryPostRepository::new());
        let follows = Arc::new(MemoryFollowRepository::new());

        follows.create(&Follow::new("reader", "alice")).await.unwrap();
        follows.create(&Follow::new("reader", "bob")).await.unwrap();

        for (author, content) in [
            ("alice", "post one"),
            ("bob", "post two"),
            ("carol", "not followed"),
        ] {
            posts
                .create(&Post::new(author, content, Vec::new()))
                .await
                .unwrap();
        }

        FeedServiceImpl::new(posts, follows)
    }

    #[tokio::test]
    async fn test_home_feed_only_followed_authors() {
        let service = seeded().await;
        let page = service
            .home_feed("reader", Pagination::new(1, 10))
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert!(page.posts.iter().all(|p| p.user_id != "carol"));
    }

    #[tokio::test]
    async fn test_home_feed_empty_without_follows() {
        let service = seeded().await;
        let page = service
            .home_feed("loner", Pagination::default())
            .await
            .unwrap();
        assert_eq!(page.total, 0);
        assert!(page.posts.is_empty());
    }

    #[tokio::test]
    async fn test_home_feed_paginates_one_per_page() {
        let service = seeded().await;
        let first = service
            .home_feed("reader", Pagination::new(1, 1))
            .await
            .unwrap();
        let second = service
            .home_feed("reader", Pagination::new(2, 1))
            .await
            .unwrap();
        assert_eq!(first.posts.len(), 1);
        assert_eq!(second.posts.len(), 1);
        assert_ne!(first.posts[0].id, second.posts[0].id);
    }

    #[tokio::test]
    async fn test_user_feed_counts_single_author() {
        let service = seeded().await;
        let page = service
            .user_feed("alice", Pagination::new(1, 10))
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.posts[0].user_id, "alice");
    }

    #[tokio::test]
    async fn test_invalid_pagination_rejected() {
        let service = seeded().await;
        assert!(matches!(
            service
                .home_feed("reader", Pagination::new(0, 1))
                .await
                .unwrap_err(),
            AppError::Validation(_)
        ));
    }
}
