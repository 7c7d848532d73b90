//! 帖子仓储
//!
//! 提供帖子数据持久化服务，支持按作者、作者集合和话题标签检索。

use async_trait::async_trait;

use crate::error::Result;
use crate::models::post::Post;

/// 帖子仓储 trait
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// 创建帖子
    async fn create(&self, post: &Post) -> Result<Post>;

    /// 根据 ID 获取帖子
    async fn get_by_id(&self, id: &str) -> Result<Option<Post>>;

    /// 更新帖子（互动计数）
    async fn update(&self, id: &str, post: &Post) -> Result<Option<Post>>;

    /// 按作者列出帖子（按时间倒序）
    async fn list_by_author(&self, user_id: &str, limit: usize, start: usize) -> Result<Vec<Post>>;

    /// 按作者统计帖子数
    async fn count_by_author(&self, user_id: &str) -> Result<u64>;

    /// 按作者集合列出帖子（信息流，按时间倒序）
    async fn list_by_authors(
        &self,
        user_ids: &[String],
        limit: usize,
        start: usize,
    ) -> Result<Vec<Post>>;

    /// 按作者集合统计帖子数
    async fn count_by_authors(&self, user_ids: &[String]) -> Result<u64>;

    /// 按话题标签检索帖子
    async fn search_by_hashtag(&self, tag: &str, limit: usize) -> Result<Vec<Post>>;
}

/// SurrealDB 仓储实现
#[cfg(feature = "surrealdb")]
pub use surreal_impl::PostRepositoryImpl;

#[cfg(feature = "surrealdb")]
mod surreal_impl {
    use std::marker::PhantomData;

    use async_trait::async_trait;

    use super::PostRepository;
    use crate::error::{AppError, Result};
    use crate::models::post::Post;
    use crate::storage::surrealdb::SurrealPool;

    #[derive(Clone)]
    pub struct PostRepositoryImpl {
        pool: SurrealPool,
        _marker: PhantomData<Post>,
    }

    impl PostRepositoryImpl {
        pub fn new(pool: SurrealPool) -> Self {
            Self {
                pool,
                _marker: PhantomData,
            }
        }
    }

    #[async_trait]
    impl PostRepository for PostRepositoryImpl {
        async fn create(&self, post: &Post) -> Result<Post> {
            let db = self.pool.inner().await;
            let created: Option<Post> = db
                .create(("post", post.id.as_str()))
                .content(post.clone())
                .await?;

            created
                .ok_or_else(|| AppError::Database(format!("Failed to create post: {}", post.id)))
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Post>> {
            let db = self.pool.inner().await;
            let result: Option<Post> = db.select(("post", id)).await?;
            Ok(result)
        }

        async fn update(&self, id: &str, post: &Post) -> Result<Option<Post>> {
            let db = self.pool.inner().await;
            let updated: Option<Post> = db.update(("post", id)).content(post.clone()).await?;
            Ok(updated)
        }

        async fn list_by_author(
            &self,
            user_id: &str,
            limit: usize,
            start: usize,
        ) -> Result<Vec<Post>> {
            let db = self.pool.inner().await;
            let query = "
                SELECT * FROM post
                WHERE user_id = $user_id
                ORDER BY created_at DESC
                LIMIT $limit START $start
            ";
            let result: Vec<Post> = db
                .query(query)
                .bind(("user_id", user_id.to_string()))
                .bind(("limit", limit))
                .bind(("start", start))
                .await?
                .take(0)?;
            Ok(result)
        }

        async fn count_by_author(&self, user_id: &str) -> Result<u64> {
            let db = self.pool.inner().await;
            let query = "
                SELECT count() FROM post
                WHERE user_id = $user_id
                GROUP ALL
            ";
            let result: Vec<serde_json::Value> = db
                .query(query)
                .bind(("user_id", user_id.to_string()))
                .await?
                .take(0)?;
            Ok(result
                .first()
                .and_then(|v| v.get("count"))
                .and_then(|c| c.as_u64())
                .unwrap_or(0))
        }

        async fn list_by_authors(
            &self,
            user_ids: &[String],
            limit: usize,
            start: usize,
        ) -> Result<Vec<Post>> {
            let db = self.pool.inner().await;
            let query = "
                SELECT * FROM post
                WHERE user_id IN $user_ids
                ORDER BY created_at DESC
                LIMIT $limit START $start
            ";
            let result: Vec<Post> = db
                .query(query)
                .bind(("user_ids", user_ids.to_vec()))
                .bind(("limit", limit))
                .bind(("start", start))
                .await?
                .take(0)?;
            Ok(result)
        }

        async fn count_by_authors(&self, user_ids: &[String]) -> Result<u64> {
            let db = self.pool.inner().await;
            let query = "
                SELECT count() FROM post
                WHERE user_id IN $user_ids
                GROUP ALL
            ";
            let result: Vec<serde_json::Value> = db
                .query(query)
                .bind(("user_ids", user_ids.to_vec()))
                .await?
                .take(0)?;
            Ok(result
                .first()
                .and_then(|v| v.get("count"))
                .and_then(|c| c.as_u64())
                .unwrap_or(0))
        }

        async fn search_by_hashtag(&self, tag: &str, limit: usize) -> Result<Vec<Post>> {
            let db = self.pool.inner().await;
            let query = "
                SELECT * FROM post
                WHERE hashtags CONTAINS $tag
                ORDER BY created_at DESC
                LIMIT $limit
            ";
            let result: Vec<Post> = db
                .query(query)
                .bind(("tag", tag.to_string()))
                .bind(("limit", limit))
                .await?
                .take(0)?;
            Ok(result)
        }
    }
}
