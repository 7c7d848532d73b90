//! 内存存储后端
//!
//! DashMap 实现的仓储集合，供测试和本地开发使用，
//! 与 SurrealDB 实现共享同一组仓储 trait。

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::Result;
use crate::models::aura_record::AuraRecord;
use crate::models::aura_repository::AuraRepository;
use crate::models::follow::Follow;
use crate::models::follow_repository::FollowRepository;
use crate::models::post::Post;
use crate::models::post_repository::PostRepository;
use crate::models::profile::Profile;
use crate::models::profile_repository::{ProfileRepository, apply_delta};

/// 内存气场记录仓储
#[derive(Default)]
pub struct MemoryAuraRepository {
    records: DashMap<String, AuraRecord>,
}

impl MemoryAuraRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuraRepository for MemoryAuraRepository {
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<AuraRecord>> {
        Ok(self.records.get(user_id).map(|r| r.value().clone()))
    }

    async fn upsert(&self, record: &AuraRecord) -> Result<AuraRecord> {
        self.records
            .insert(record.user_id.clone(), record.clone());
        Ok(record.clone())
    }

    async fn list(&self, limit: usize, start: usize) -> Result<Vec<AuraRecord>> {
        let mut records: Vec<AuraRecord> =
            self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_by(|a, b| b.aura_points.cmp(&a.aura_points));
        Ok(records.into_iter().skip(start).take(limit).collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.records.len() as u64)
    }
}

/// 内存帖子仓储
#[derive(Default)]
pub struct MemoryPostRepository {
    posts: DashMap<String, Post>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按时间倒序收集符合条件的帖子
    fn collect_sorted<F>(&self, predicate: F) -> Vec<Post>
    where
        F: Fn(&Post) -> bool,
    {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| predicate(p.value()))
            .map(|p| p.value().clone())
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn create(&self, post: &Post) -> Result<Post> {
        self.posts.insert(post.id.clone(), post.clone());
        Ok(post.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Post>> {
        Ok(self.posts.get(id).map(|p| p.value().clone()))
    }

    async fn update(&self, id: &str, post: &Post) -> Result<Option<Post>> {
        if !self.posts.contains_key(id) {
            return Ok(None);
        }
        self.posts.insert(id.to_string(), post.clone());
        Ok(Some(post.clone()))
    }

    async fn list_by_author(&self, user_id: &str, limit: usize, start: usize) -> Result<Vec<Post>> {
        Ok(self
            .collect_sorted(|p| p.user_id == user_id)
            .into_iter()
            .skip(start)
            .take(limit)
            .collect())
    }

    async fn count_by_author(&self, user_id: &str) -> Result<u64> {
        Ok(self.posts.iter().filter(|p| p.user_id == user_id).count() as u64)
    }

    async fn list_by_authors(
        &self,
        user_ids: &[String],
        limit: usize,
        start: usize,
    ) -> Result<Vec<Post>> {
        Ok(self
            .collect_sorted(|p| user_ids.contains(&p.user_id))
            .into_iter()
            .skip(start)
            .take(limit)
            .collect())
    }

    async fn count_by_authors(&self, user_ids: &[String]) -> Result<u64> {
        Ok(self
            .posts
            .iter()
            .filter(|p| user_ids.contains(&p.user_id))
            .count() as u64)
    }

    async fn search_by_hashtag(&self, tag: &str, limit: usize) -> Result<Vec<Post>> {
        Ok(self
            .collect_sorted(|p| p.has_hashtag(tag))
            .into_iter()
            .take(limit)
            .collect())
    }
}

/// 内存用户资料仓储
#[derive(Default)]
pub struct MemoryProfileRepository {
    profiles: DashMap<String, Profile>,
}

impl MemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.get(user_id).map(|p| p.value().clone()))
    }

    async fn upsert(&self, profile: &Profile) -> Result<Profile> {
        self.profiles
            .insert(profile.user_id.clone(), profile.clone());
        Ok(profile.clone())
    }

    async fn adjust_counts(
        &self,
        user_id: &str,
        follower_delta: i64,
        following_delta: i64,
    ) -> Result<Profile> {
        let mut entry = self
            .profiles
            .entry(user_id.to_string())
            .or_insert_with(|| Profile::new(user_id));
        entry.follower_count = apply_delta(entry.follower_count, follower_delta);
        entry.following_count = apply_delta(entry.following_count, following_delta);
        entry.updated_at = chrono::Utc::now();
        Ok(entry.clone())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.profiles.len() as u64)
    }
}

/// 内存关注关系仓储
#[derive(Default)]
pub struct MemoryFollowRepository {
    follows: DashMap<String, Follow>,
}

impl MemoryFollowRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FollowRepository for MemoryFollowRepository {
    async fn create(&self, follow: &Follow) -> Result<Follow> {
        self.follows.insert(follow.key(), follow.clone());
        Ok(follow.clone())
    }

    async fn exists(&self, follower_id: &str, following_id: &str) -> Result<bool> {
        let key = Follow::new(follower_id, following_id).key();
        Ok(self.follows.contains_key(&key))
    }

    async fn list_following(&self, follower_id: &str) -> Result<Vec<Follow>> {
        Ok(self
            .follows
            .iter()
            .filter(|f| f.follower_id == follower_id)
            .map(|f| f.value().clone())
            .collect())
    }

    async fn list_followers(&self, following_id: &str) -> Result<Vec<Follow>> {
        Ok(self
            .follows
            .iter()
            .filter(|f| f.following_id == following_id)
            .map(|f| f.value().clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_aura_repository_roundtrip() {
        let repo = MemoryAuraRepository::new();
        assert!(repo.get_by_user_id("u1").await.unwrap().is_none());

        let record = AuraRecord::new("u1", "User One", 42);
        repo.upsert(&record).await.unwrap();

        let loaded = repo.get_by_user_id("u1").await.unwrap().unwrap();
        assert_eq!(loaded.aura_points, 42);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_post_repository_hashtag_search() {
        let repo = MemoryPostRepository::new();
        repo.create(&Post::new("u1", "hello #world", Vec::new()))
            .await
            .unwrap();
        repo.create(&Post::new("u2", "no tags", Vec::new()))
            .await
            .unwrap();

        let found = repo.search_by_hashtag("world", 10).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].user_id, "u1");
    }

    #[tokio::test]
    async fn test_profile_adjust_counts_upserts_defaults() {
        let repo = MemoryProfileRepository::new();
        let profile = repo.adjust_counts("u1", 1, 0).await.unwrap();
        assert_eq!(profile.follower_count, 1);
        assert_eq!(profile.bio, crate::models::profile::DEFAULT_BIO);
    }

    #[tokio::test]
    async fn test_follow_repository_exists() {
        let repo = MemoryFollowRepository::new();
        assert!(!repo.exists("a", "b").await.unwrap());
        repo.create(&Follow::new("a", "b")).await.unwrap();
        assert!(repo.exists("a", "b").await.unwrap());
        assert_eq!(repo.list_following("a").await.unwrap().len(), 1);
        assert_eq!(repo.list_followers("b").await.unwrap().len(), 1);
    }
}
