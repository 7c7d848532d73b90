//! 气场计分引擎
//!
//! 将任意消息文本转换为有界整数分值：情感基分加关键词命中分，
//! 最终限制在对称区间内。纯函数，无 I/O，任意输入都不失败。

use crate::config::AuraConfig;

use super::lexicon::{Polarity, aura_lexicon, normalize};
use super::sentiment::sentiment_score;

/// 计分引擎
///
/// 计算过程：
/// 1. 空白输入 → 0
/// 2. NFC 规范化 + 小写折叠
/// 3. 情感子分值 × sentiment_weight
/// 4. 正负关键词按「是否出现」各计 ±keyword_weight
/// 5. 限制在 [-clamp_bound, clamp_bound]
///
/// 全程整数运算，该路径不产生舍入。
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    config: AuraConfig,
}

impl ScoreEngine {
    /// 创建计分引擎
    pub fn new(config: AuraConfig) -> Self {
        Self { config }
    }

    /// 对消息文本计分
    pub fn score(&self, text: &str) -> i32 {
        if text.trim().is_empty() {
            return 0;
        }

        let normalized = normalize(text);
        let lexicon = aura_lexicon();

        let base = sentiment_score(&normalized) * self.config.sentiment_weight;

        let positive =
            lexicon.match_count(&normalized, Polarity::Positive, self.config.match_mode) as i32;
        let negative =
            lexicon.match_count(&normalized, Polarity::Negative, self.config.match_mode) as i32;

        let raw = base + self.config.keyword_weight * (positive - negative);

        raw.clamp(-self.config.clamp_bound, self.config.clamp_bound)
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(AuraConfig::default())
    }
}
