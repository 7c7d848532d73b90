//! 用户气场记录数据模型
//!
//! 存储每个用户的滚动平均分值和已统计的消息数。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户气场记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuraRecord {
    /// 平台用户 ID（唯一键）
    pub user_id: String,

    /// 最近一次看到的显示名称（每次更新覆盖，不承载身份）
    pub display_name: String,

    /// 当前气场分值，[-100, 100] 内的加权平均
    pub aura_points: i32,

    /// 已折算进平均值的消息数
    pub message_count: u64,

    /// 创建时间
    pub created_at: DateTime<Utc>,

    /// 最近一次更新时间
    pub last_updated: DateTime<Utc>,
}

impl AuraRecord {
    /// 用首条消息的分值创建记录
    pub fn new(user_id: &str, display_name: &str, initial_score: i32) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.to_string(),
            display_name: display_name.to_string(),
            aura_points: initial_score,
            message_count: 1,
            created_at: now,
            last_updated: now,
        }
    }

    /// 将一条新消息的分值折算进滚动平均
    ///
    /// `aura = round((aura * n + new_score) / (n + 1))`，四舍五入远离零。
    /// 每步都在舍入后回存，因此聚合值是「逐步舍入后的均值」而非原始
    /// 输入的精确均值，与历史行为保持一致。
    pub fn fold(&mut self, display_name: &str, new_score: i32) {
        let n = self.message_count;
        let total = self.aura_points as i64 * n as i64 + new_score as i64;
        self.aura_points = round_half_away(total, (n + 1) as i64);
        self.message_count = n + 1;
        self.display_name = display_name.to_string();
        self.last_updated = Utc::now();
    }

    /// 是否已有可展示的气场（防御性初始化的记录 message_count 可能为 0）
    pub fn has_aura(&self) -> bool {
        self.message_count > 0
    }

    /// 当前分值所处的气场区间
    pub fn vibe(&self) -> VibeBand {
        match self.aura_points {
            p if p > 50 => VibeBand::RadiantPositive,
            p if p > 0 => VibeBand::MildlyPositive,
            0 => VibeBand::Neutral,
            p if p > -50 => VibeBand::MildlyNegative,
            _ => VibeBand::RadiantNegative,
        }
    }
}

/// 气场区间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VibeBand {
    /// 强正向
    RadiantPositive,
    /// 温和正向
    MildlyPositive,
    /// 中性
    Neutral,
    /// 温和负向
    MildlyNegative,
    /// 强负向
    RadiantNegative,
}

impl VibeBand {
    /// 展示文案
    pub fn description(&self) -> &'static str {
        match self {
            VibeBand::RadiantPositive => "Radiates positive energy (joy, love, compassion)",
            VibeBand::MildlyPositive => "Mildly positive energy (uplifting, kind)",
            VibeBand::Neutral => "Neutral energy (balanced, no strong vibe)",
            VibeBand::MildlyNegative => "Mildly negative energy (unsettled, low vibe)",
            VibeBand::RadiantNegative => "Radiates negative energy (toxic, dark)",
        }
    }
}

/// 整数除法，四舍五入远离零
fn round_half_away(numerator: i64, denominator: i64) -> i32 {
    debug_assert!(denominator > 0);
    let doubled = 2 * numerator;
    let rounded = if numerator >= 0 {
        (doubled + denominator) / (2 * denominator)
    } else {
        (doubled - denominator) / (2 * denominator)
    };
    rounded as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fold_identity() {
        let record = AuraRecord::new("user_123", "Pakshi", 42);
        assert_eq!(record.aura_points, 42);
        assert_eq!(record.message_count, 1);
    }

    #[test]
    fn test_second_fold_averages() {
        let mut record = AuraRecord::new("user_123", "Pakshi", 42);
        record.fold("Pakshi", 0);
        // round((42 * 1 + 0) / 2) = 21
        assert_eq!(record.aura_points, 21);
        assert_eq!(record.message_count, 2);
    }

    #[test]
    fn test_fold_rounds_half_away_from_zero() {
        let mut record = AuraRecord::new("u", "U", 3);
        record.fold("U", 0);
        // 1.5 → 2
        assert_eq!(record.aura_points, 2);

        let mut record = AuraRecord::new("u", "U", -3);
        record.fold("U", 0);
        // -1.5 → -2
        assert_eq!(record.aura_points, -2);
    }

    #[test]
    fn test_fold_stays_within_bounds() {
        let mut record = AuraRecord::new("u", "U", 100);
        for score in [-100, 100, 37, -61, 0, 100, -100] {
            record.fold("U", score);
            assert!((-100..=100).contains(&record.aura_points));
        }
        assert_eq!(record.message_count, 8);
    }

    #[test]
    fn test_fold_drifts_from_exact_mean() {
        // 逐步舍入的聚合与精确均值并不总是一致
        let scores = [1, 0, 0];
        let mut record = AuraRecord::new("u", "U", scores[0]);
        for &s in &scores[1..] {
            record.fold("U", s);
        }
        // 精确均值 1/3 ≈ 0.33 → 0；逐步舍入: round(1/2)=1, round((1*2+0)/3)=1
        assert_eq!(record.aura_points, 1);
        let exact = (scores.iter().sum::<i32>() as f64 / scores.len() as f64).round() as i32;
        assert_ne!(record.aura_points, exact);
    }

    #[test]
    fn test_fold_updates_display_name() {
        let mut record = AuraRecord::new("u", "OldName", 10);
        record.fold("NewName", 10);
        assert_eq!(record.display_name, "NewName");
    }

    #[test]
    fn test_fold_on_zero_count_record_behaves_like_first_message() {
        // 外部防御性初始化的记录：count 0
        let mut record = AuraRecord::new("u", "U", 0);
        record.message_count = 0;
        record.aura_points = 0;
        record.fold("U", 42);
        assert_eq!(record.aura_points, 42);
        assert_eq!(record.message_count, 1);
    }

    #[test]
    fn test_vibe_bands() {
        let mut record = AuraRecord::new("u", "U", 80);
        assert_eq!(record.vibe(), VibeBand::RadiantPositive);
        record.aura_points = 30;
        assert_eq!(record.vibe(), VibeBand::MildlyPositive);
        record.aura_points = 0;
        assert_eq!(record.vibe(), VibeBand::Neutral);
        record.aura_points = -30;
        assert_eq!(record.vibe(), VibeBand::MildlyNegative);
        record.aura_points = -80;
        assert_eq!(record.vibe(), VibeBand::RadiantNegative);
    }
}
