//! 消息接入 DTO
//!
//! 平台网关把消息和互动事件投递到这两个请求类型。

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::aura_dto::AuraResponse;
use crate::api::dto::post_dto::AttachmentDto;
use crate::models::post::ReactionKind;

/// 消息接入请求
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IngestMessageRequest {
    /// 发送者用户 ID
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,

    /// 发送者显示名称
    #[validate(length(min = 1, max = 128))]
    pub display_name: String,

    /// 消息内容
    pub content: String,

    /// 消息附件
    #[serde(default)]
    pub attachments: Vec<AttachmentDto>,
}

/// 消息接入响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestMessageResponse {
    /// 本条消息的分值
    pub score: i32,

    /// 折算后的气场记录；命令消息不计分时为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aura: Option<AuraResponse>,

    /// 命令回复文本
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

/// 互动事件请求
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReactionRequest {
    /// 互动用户 ID
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,

    /// 互动类型
    pub kind: ReactionKind,
}
