//! 气场 DTO
//!
//! 用于气场查询 API 的响应序列化。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::aura_record::{AuraRecord, VibeBand};

/// 气场记录响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuraResponse {
    /// 用户 ID
    pub user_id: String,

    /// 显示名称
    pub display_name: String,

    /// 气场分值
    pub aura_points: i32,

    /// 已统计消息数
    pub message_count: u64,

    /// 气场区间
    pub vibe: VibeBand,

    /// 区间展示文案
    pub vibe_description: String,

    /// 最近一次更新时间
    pub last_updated: DateTime<Utc>,
}

impl From<AuraRecord> for AuraResponse {
    fn from(record: AuraRecord) -> Self {
        let vibe = record.vibe();
        Self {
            user_id: record.user_id,
            display_name: record.display_name,
            aura_points: record.aura_points,
            message_count: record.message_count,
            vibe,
            vibe_description: vibe.description().to_string(),
            last_updated: record.last_updated,
        }
    }
}

/// 气场排行响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAuraResponse {
    /// 气场记录列表
    pub records: Vec<AuraResponse>,
    /// 总数
    pub total: u64,
}

/// 排行查询参数
#[derive(Debug, Deserialize, Default)]
pub struct ListAuraParams {
    pub limit: Option<usize>,
    pub start: Option<usize>,
}
