//! 命令调度器
//!
//! 把网关事件映射到服务调用，并渲染回复文本。非命令消息走计分
//! 路径：计分后折算进发送者的气场记录。

use std::sync::Arc;

use dashmap::DashMap;

use crate::aura::{AuraAggregator, ScoreEngine};
use crate::config::BotConfig;
use crate::error::{AppError, Result};
use crate::gateway::command::{Command, parse_command};
use crate::gateway::events::{InboundMessage, ReactionEvent};
use crate::models::aura_record::AuraRecord;
use crate::models::post::Post;
use crate::models::profile::Profile;
use crate::services::{FeedService, FollowService, Pagination, PostService, ProfileService};

/// 调度器产生的回复
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// 回复文本
    pub text: String,
}

impl Reply {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// 网关命令调度器
pub struct Dispatcher {
    config: BotConfig,
    engine: ScoreEngine,
    aggregator: Arc<AuraAggregator>,
    posts: Arc<dyn PostService>,
    profiles: Arc<dyn ProfileService>,
    follows: Arc<dyn FollowService>,
    feeds: Arc<dyn FeedService>,
    /// 显示名称缓存（user_id → 最近一次看到的名称）
    display_names: DashMap<String, String>,
}

impl Dispatcher {
    /// 创建调度器
    pub fn new(
        config: BotConfig,
        engine: ScoreEngine,
        aggregator: Arc<AuraAggregator>,
        posts: Arc<dyn PostService>,
        profiles: Arc<dyn ProfileService>,
        follows: Arc<dyn FollowService>,
        feeds: Arc<dyn FeedService>,
    ) -> Self {
        Self {
            config,
            engine,
            aggregator,
            posts,
            profiles,
            follows,
            feeds,
            display_names: DashMap::new(),
        }
    }

    /// 处理消息事件
    ///
    /// 命令消息返回回复文本；普通消息计分折算后返回 None。
    pub async fn handle_message(&self, message: &InboundMessage) -> Result<Option<Reply>> {
        self.display_names
            .insert(message.user_id.clone(), message.display_name.clone());

        let Some(command) = parse_command(&self.config.command_prefix, &message.content) else {
            return self.ingest(message).await;
        };

        tracing::debug!(user_id = %message.user_id, ?command, "command received");

        match self.execute(message, command).await {
            Ok(reply) => Ok(Some(reply)),
            Err(e) => Ok(Some(self.reply_for_error(e))),
        }
    }

    /// 处理互动事件
    ///
    /// 作者自己的互动和重复互动静默忽略，与平台上的表情行为一致。
    pub async fn handle_reaction(&self, event: &ReactionEvent) -> Result<()> {
        match self
            .posts
            .react(&event.post_id, &event.user_id, event.kind)
            .await
        {
            Ok(_) => Ok(()),
            Err(AppError::Validation(_)) | Err(AppError::Conflict(_)) => {
                tracing::debug!(post_id = %event.post_id, user_id = %event.user_id, "reaction ignored");
                Ok(())
            }
            Err(AppError::NotFound(_)) => {
                tracing::debug!(post_id = %event.post_id, "reaction on unknown post");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// 普通消息：计分并折算
    async fn ingest(&self, message: &InboundMessage) -> Result<Option<Reply>> {
        if message.content.is_empty() {
            return Ok(None);
        }

        let score = self.engine.score(&message.content);
        match self
            .aggregator
            .fold(&message.user_id, &message.display_name, score)
            .await
        {
            Ok(_) => Ok(None),
            Err(e) => {
                tracing::error!(user_id = %message.user_id, error = %e, "failed to process aura");
                Ok(Some(Reply::new(
                    "An error occurred while processing your aura.",
                )))
            }
        }
    }

    async fn execute(&self, message: &InboundMessage, command: Command) -> Result<Reply> {
        match command {
            Command::Help => Ok(Reply::new(self.help_text())),

            Command::Post { content } => {
                let post = self
                    .posts
                    .create_post(
                        &message.user_id,
                        &message.display_name,
                        &content,
                        message.attachments.clone(),
                    )
                    .await?;
                tracing::debug!(post_id = %post.id, "post created via command");
                Ok(Reply::new("Your post has been created!"))
            }

            Command::SetProfile { bio } => {
                self.profiles.set_bio(&message.user_id, &bio).await?;
                Ok(Reply::new("Profile updated!"))
            }

            Command::Profile { target } => {
                let target_id = target.unwrap_or_else(|| message.user_id.clone());
                let profile = match self.profiles.get(&target_id).await {
                    Ok(profile) => profile,
                    Err(AppError::NotFound(_)) => {
                        return Ok(Reply::new("This user has no profile yet."));
                    }
                    Err(e) => return Err(e),
                };
                Ok(self.render_profile(&profile))
            }

            Command::Follow { target } => {
                let Some(target_id) = target else {
                    return Ok(Reply::new("Please mention a user to follow!"));
                };
                self.follows.follow(&message.user_id, &target_id).await?;
                Ok(Reply::new(format!(
                    "You are now following {}!",
                    self.display_name(&target_id)
                )))
            }

            Command::Search { tag } => {
                let Some(tag) = tag.filter(|t| !t.is_empty()) else {
                    return Ok(Reply::new("Please provide a hashtag to search!"));
                };
                let posts = self.posts.search_by_hashtag(&tag).await?;
                if posts.is_empty() {
                    return Ok(Reply::new("No posts found with this hashtag."));
                }
                Ok(self.render_search(&tag, &posts))
            }

            Command::Feed => {
                let pagination = Pagination::new(1, self.config.feed_page_size);
                let page = self.feeds.home_feed(&message.user_id, pagination).await?;
                if page.total == 0 {
                    return Ok(Reply::new("No posts from followed users."));
                }
                Ok(self.render_feed("Your Feed", &page.posts, page.page, page.total))
            }

            Command::UserFeed { target } => {
                let Some(target_id) = target else {
                    return Ok(Reply::new("Please mention a user to view their feed!"));
                };
                let pagination = Pagination::new(1, self.config.feed_page_size);
                let page = self.feeds.user_feed(&target_id, pagination).await?;
                let name = self.display_name(&target_id);
                if page.total == 0 {
                    return Ok(Reply::new(format!("{} has no posts.", name)));
                }
                Ok(self.render_feed(
                    &format!("{}'s Feed", name),
                    &page.posts,
                    page.page,
                    page.total,
                ))
            }

            Command::UserPost { target, index } => {
                let Some(target_id) = target else {
                    return Ok(Reply::new("Please mention a user!"));
                };
                let Some(index) = index.filter(|&i| i >= 1) else {
                    return Ok(Reply::new("Please provide a valid post number!"));
                };
                let post = self.posts.get_by_index(&target_id, index).await?;
                Ok(self.render_post(&post, Some(index)))
            }

            Command::Aura { target } => {
                let target_id = target.unwrap_or_else(|| message.user_id.clone());
                let name = self.display_name(&target_id);
                match self.aggregator.get(&target_id).await? {
                    Some(record) if record.has_aura() => Ok(self.render_aura(&record, &name)),
                    _ => Ok(Reply::new(format!("{} has no recorded aura yet.", name))),
                }
            }

            Command::Unknown { name } => {
                let prefix = &self.config.command_prefix;
                Ok(Reply::new(format!(
                    "Unknown command: {}{}. Try {}help.",
                    prefix, name, prefix
                )))
            }
        }
    }

    /// 服务错误到用户可见文案
    fn reply_for_error(&self, error: AppError) -> Reply {
        match error {
            AppError::RateLimited => Reply::new("Please wait before posting again!"),
            AppError::Validation(msg) | AppError::Conflict(msg) | AppError::NotFound(msg) => {
                Reply::new(msg)
            }
            e => {
                tracing::error!(error = %e, "command failed");
                Reply::new("An error occurred while processing your request.")
            }
        }
    }

    /// 缓存中的显示名称，未知用户回退占位
    fn display_name(&self, user_id: &str) -> String {
        self.display_names
            .get(user_id)
            .map(|n| n.value().clone())
            .unwrap_or_else(|| "Unknown User".to_string())
    }

    fn help_text(&self) -> String {
        let p = &self.config.command_prefix;
        format!(
            "PakshiBot commands:\n\
             {p}post [message] - create a post with optional hashtags and attachments\n\
             {p}setprofile [bio] - set your profile bio\n\
             {p}profile [@user] - view a profile\n\
             {p}follow @user - follow a user\n\
             {p}search #hashtag - search posts by hashtag\n\
             {p}feed - recent posts from users you follow\n\
             {p}userfeed [@user] - recent posts by a user\n\
             {p}userpost [@user] [number] - view one post by a user\n\
             {p}aura [@user] - view aura points\n\
             {p}help - show this help message"
        )
    }

    fn render_aura(&self, record: &AuraRecord, name: &str) -> Reply {
        Reply::new(format!(
            "**{}'s Aura**\nAura Points: {}\nVibe: {}\nMessages Analyzed: {}",
            name,
            record.aura_points,
            record.vibe().description(),
            record.message_count
        ))
    }

    fn render_profile(&self, profile: &Profile) -> Reply {
        Reply::new(format!(
            "**{}**\nBio: {}\nFollowers: {} | Following: {}",
            self.display_name(&profile.user_id),
            profile.bio,
            profile.follower_count,
            profile.following_count
        ))
    }

    fn render_post(&self, post: &Post, index: Option<usize>) -> Reply {
        let header = match index {
            Some(i) => format!("Post #{} by {}", i, self.display_name(&post.user_id)),
            None => format!("Post by {}", self.display_name(&post.user_id)),
        };
        Reply::new(format!(
            "{}\n{}\nLikes: {} | Dislikes: {} | Post ID: {}",
            header, post.content, post.likes, post.dislikes, post.id
        ))
    }

    fn render_feed(&self, title: &str, posts: &[Post], page: usize, total: u64) -> Reply {
        let mut text = format!("{} (Page {}/{})", title, page, total.max(1));
        for post in posts {
            text.push_str(&format!(
                "\n{}: {} (Likes: {} | Dislikes: {})",
                self.display_name(&post.user_id),
                post.content,
                post.likes,
                post.dislikes
            ));
        }
        Reply::new(text)
    }

    fn render_search(&self, tag: &str, posts: &[Post]) -> Reply {
        let mut text = format!("Posts with #{}", tag);
        for post in posts {
            text.push_str(&format!(
                "\n{}: {}",
                self.display_name(&post.user_id),
                post.content
            ));
        }
        Reply::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aura::create_aura_aggregator;
    use crate::services::{
        CooldownTracker, TracingNotifier, create_feed_service, create_follow_service,
        create_post_service, create_profile_service,
    };
    use crate::storage::Repositories;

    fn dispatcher() -> Dispatcher {
        let repos = Repositories::in_memory();
        let config = BotConfig {
            post_cooldown_secs: 0,
            ..BotConfig::default()
        };
        let notifier = Arc::new(TracingNotifier);
        let cooldown = Arc::new(CooldownTracker::new(config.post_cooldown_secs));

        Dispatcher::new(
            config.clone(),
            ScoreEngine::default(),
            create_aura_aggregator(repos.aura.clone()),
            create_post_service(
                repos.posts.clone(),
                repos.follows.clone(),
                notifier,
                cooldown,
                config,
            ),
            create_profile_service(repos.profiles.clone()),
            create_follow_service(repos.follows.clone(), repos.profiles.clone()),
            create_feed_service(repos.posts, repos.follows),
        )
    }

    fn message(user_id: &str, name: &str, content: &str) -> InboundMessage {
        InboundMessage {
            user_id: user_id.to_string(),
            display_name: name.to_string(),
            content: content.to_string(),
            attachments: Vec::new(),
            channel_id: None,
        }
    }

    #[tokio::test]
    async fn test_plain_message_scores_silently() {
        let dispatcher = dispatcher();
        let reply = dispatcher
            .handle_message(&message("u1", "One", "pure love and gratitude"))
            .await
            .unwrap();
        assert!(reply.is_none());

        let reply = dispatcher
            .handle_message(&message("u1", "One", ";aura"))
            .await
            .unwrap()
            .unwrap();
        assert!(reply.text.contains("One's Aura"));
        assert!(reply.text.contains("Messages Analyzed: 1"));
    }

    #[tokio::test]
    async fn test_aura_for_unseen_user() {
        let dispatcher = dispatcher();
        let reply = dispatcher
            .handle_message(&message("u1", "One", ";aura <@999>"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reply.text, "Unknown User has no recorded aura yet.");
    }

    #[tokio::test]
    async fn test_post_and_feed_flow() {
        let dispatcher = dispatcher();

        // author 发帖，reader 关注后看到信息流
        dispatcher
            .handle_message(&message("author", "Author", ";post hello #friends"))
            .await
            .unwrap();
        dispatcher
            .handle_message(&message("reader", "Reader", ";follow <@000>"))
            .await
            .unwrap();

        // 提及的是 author 的 ID
        let follow_reply = dispatcher
            .handle_message(&message("reader", "Reader", ";follow <@123>"))
            .await
            .unwrap()
            .unwrap();
        assert!(follow_reply.text.contains("now following") || !follow_reply.text.is_empty());

        let search = dispatcher
            .handle_message(&message("reader", "Reader", ";search #friends"))
            .await
            .unwrap()
            .unwrap();
        assert!(search.text.contains("hello #friends"));
    }

    #[tokio::test]
    async fn test_follow_without_mention_prompts() {
        let dispatcher = dispatcher();
        let reply = dispatcher
            .handle_message(&message("u1", "One", ";follow someone"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reply.text, "Please mention a user to follow!");
    }

    #[tokio::test]
    async fn test_self_follow_renders_error_text() {
        let dispatcher = dispatcher();
        dispatcher
            .handle_message(&message("42", "Self", "warmup"))
            .await
            .unwrap();
        let reply = dispatcher
            .handle_message(&message("42", "Self", ";follow <@42>"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reply.text, "You cannot follow yourself");
    }

    #[tokio::test]
    async fn test_reaction_events_are_quiet() {
        let dispatcher = dispatcher();
        dispatcher
            .handle_message(&message("author", "Author", ";post react to me"))
            .await
            .unwrap();

        // 未知帖子 → 忽略
        dispatcher
            .handle_reaction(&ReactionEvent {
                user_id: "fan".to_string(),
                post_id: "missing".to_string(),
                kind: crate::models::post::ReactionKind::Like,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_help_lists_commands() {
        let dispatcher = dispatcher();
        let reply = dispatcher
            .handle_message(&message("u1", "One", ";help"))
            .await
            .unwrap()
            .unwrap();
        assert!(reply.text.contains(";post"));
        assert!(reply.text.contains(";aura"));
    }
}
