use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 数据库后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    /// SurrealDB 文档存储
    #[default]
    Surrealdb,
    /// 内存存储（测试/开发）
    Memory,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 后端类型
    pub backend: DatabaseBackend,
    /// SurrealDB 连接地址
    pub url: String,
    /// 命名空间
    pub namespace: String,
    /// 数据库名称
    pub database: String,
    /// 用户名
    pub username: String,
    /// 密码
    pub password: String,
    /// 连接超时（秒）
    pub connection_timeout: u64,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 请求超时（秒）
    pub request_timeout: u64,
    /// 最大请求体大小（字节）
    pub max_request_size: usize,
}

/// 机器人配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// 命令前缀
    pub command_prefix: String,
    /// 发帖冷却时间（秒）
    pub post_cooldown_secs: u64,
    /// 话题搜索返回上限
    pub search_limit: usize,
    /// 信息流每页帖子数
    pub feed_page_size: usize,
    /// 用户帖子列表每页数量
    pub posts_per_page: usize,
    /// 附件大小上限（字节）
    pub max_attachment_size: u64,
    /// 允许的图片类型
    pub allowed_image_types: Vec<String>,
    /// 允许的视频类型
    pub allowed_video_types: Vec<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            command_prefix: ";".into(),
            post_cooldown_secs: 60,
            search_limit: 10,
            feed_page_size: 1,
            posts_per_page: 10,
            max_attachment_size: 8 * 1024 * 1024,
            allowed_image_types: vec![
                "image/png".into(),
                "image/jpeg".into(),
                "image/gif".into(),
            ],
            allowed_video_types: vec!["video/mp4".into(), "video/webm".into()],
        }
    }
}

/// 关键词匹配模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// 子串包含匹配（原始行为）
    #[default]
    Containment,
    /// 词边界匹配
    Word,
}

/// 气场计分配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuraConfig {
    /// 情感分值放大系数
    pub sentiment_weight: i32,
    /// 关键词命中分值
    pub keyword_weight: i32,
    /// 分值边界（对称区间 [-bound, bound]）
    pub clamp_bound: i32,
    /// 关键词匹配模式
    pub match_mode: MatchMode,
}

impl Default for AuraConfig {
    fn default() -> Self {
        Self {
            sentiment_weight: 10,
            keyword_weight: 15,
            clamp_bound: 100,
            match_mode: MatchMode::Containment,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
    /// 日志文件路径
    pub log_dir: Option<PathBuf>,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 数据库配置
    pub database: DatabaseConfig,
    /// 服务器配置
    pub server: ServerConfig,
    /// 机器人配置
    pub bot: BotConfig,
    /// 气场计分配置
    pub aura: AuraConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            database: DatabaseConfig {
                backend: DatabaseBackend::Surrealdb,
                url: "ws://localhost:8000".into(),
                namespace: "pakshi".into(),
                database: "social".into(),
                username: "root".into(),
                password: "root".into(),
                connection_timeout: 30,
            },
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8080,
                request_timeout: 30,
                max_request_size: 10 * 1024 * 1024,
            },
            bot: BotConfig::default(),
            aura: AuraConfig::default(),
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
                log_dir: None,
            },
            app_name: "pakshi".into(),
            environment: "development".into(),
        }
    }

    /// 创建测试环境配置（内存后端）
    pub fn test() -> Self {
        let mut config = Self::development();
        config.database.backend = DatabaseBackend::Memory;
        config.environment = "test".into();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_defaults() {
        let config = AppConfig::development();
        assert_eq!(config.bot.command_prefix, ";");
        assert_eq!(config.bot.post_cooldown_secs, 60);
        assert_eq!(config.aura.keyword_weight, 15);
        assert_eq!(config.aura.clamp_bound, 100);
        assert_eq!(config.aura.match_mode, MatchMode::Containment);
    }

    #[test]
    fn test_test_config_uses_memory_backend() {
        let config = AppConfig::test();
        assert_eq!(config.database.backend, DatabaseBackend::Memory);
    }
}
