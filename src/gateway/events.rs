//! 网关事件类型

use serde::{Deserialize, Serialize};

use crate::models::post::{Attachment, ReactionKind};

/// 平台送达的消息事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// 发送者用户 ID
    pub user_id: String,

    /// 发送者显示名称
    pub display_name: String,

    /// 消息内容
    pub content: String,

    /// 消息附件
    #[serde(default)]
    pub attachments: Vec<Attachment>,

    /// 频道 ID
    #[serde(default)]
    pub channel_id: Option<String>,
}

/// 平台送达的互动事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionEvent {
    /// 互动用户 ID
    pub user_id: String,

    /// 目标帖子 ID
    pub post_id: String,

    /// 互动类型
    pub kind: ReactionKind,
}
