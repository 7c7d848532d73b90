//! 气场关键词词表
//!
//! 静态的（词，极性，语域）表，进程启动时构建一次规范化视图，
//! 之后只读共享，计分调用间无需加锁。

use once_cell::sync::Lazy;
use unicode_normalization::UnicodeNormalization;

use crate::config::MatchMode;

/// 关键词极性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// 语域标签（仅作文档用途，不参与匹配）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// 灵性词汇
    Spiritual,
    /// 网络俚语
    Slang,
}

/// 正向关键词（词，语域）
const POSITIVE_WORDS: &[(&str, Register)] = &[
    ("joy", Register::Spiritual),
    ("love", Register::Spiritual),
    ("compassion", Register::Spiritual),
    ("kindness", Register::Spiritual),
    ("peace", Register::Spiritual),
    ("gratitude", Register::Spiritual),
    ("healing", Register::Spiritual),
    ("light", Register::Spiritual),
    ("blessing", Register::Spiritual),
    ("hope", Register::Spiritual),
    ("serenity", Register::Spiritual),
    ("divine", Register::Spiritual),
    ("harmony", Register::Spiritual),
    ("wisdom", Register::Spiritual),
    ("empathy", Register::Spiritual),
    ("grace", Register::Spiritual),
    ("radiance", Register::Spiritual),
    ("tranquility", Register::Spiritual),
    ("unity", Register::Spiritual),
    ("forgiveness", Register::Spiritual),
    ("inspiration", Register::Spiritual),
    ("clarity", Register::Spiritual),
    ("purity", Register::Spiritual),
    ("zen", Register::Spiritual),
    ("soulful", Register::Spiritual),
    ("uplifting", Register::Spiritual),
    ("sacred", Register::Spiritual),
    ("bliss", Register::Spiritual),
    ("devotion", Register::Spiritual),
    ("awe", Register::Spiritual),
    ("slay", Register::Slang),
    ("vibes", Register::Slang),
    ("iconic", Register::Slang),
    ("real", Register::Slang),
    ("authentic", Register::Slang),
    ("queen", Register::Slang),
    ("king", Register::Slang),
    ("stan", Register::Slang),
    ("inspo", Register::Slang),
    ("bussin", Register::Slang),
    ("fire", Register::Slang),
    ("lit", Register::Slang),
    ("goat", Register::Slang),
    ("legend", Register::Slang),
    ("vibe", Register::Slang),
    ("glow", Register::Slang),
    ("energy", Register::Slang),
    ("main-character", Register::Slang),
    ("pop-off", Register::Slang),
    ("bet", Register::Slang),
    ("fam", Register::Slang),
    ("hype", Register::Slang),
    ("drip", Register::Slang),
    ("snack", Register::Slang),
    ("yass", Register::Slang),
    ("secure-the-bag", Register::Slang),
    ("on-fleek", Register::Slang),
    ("extra", Register::Slang),
    ("thriving", Register::Slang),
    ("w", Register::Slang),
];

/// 负向关键词（词，语域）
const NEGATIVE_WORDS: &[(&str, Register)] = &[
    ("hate", Register::Spiritual),
    ("anger", Register::Spiritual),
    ("fear", Register::Spiritual),
    ("sadness", Register::Spiritual),
    ("toxic", Register::Spiritual),
    ("dark", Register::Spiritual),
    ("curse", Register::Spiritual),
    ("jealousy", Register::Spiritual),
    ("resentment", Register::Spiritual),
    ("pain", Register::Spiritual),
    ("malice", Register::Spiritual),
    ("dread", Register::Spiritual),
    ("spite", Register::Spiritual),
    ("grudge", Register::Spiritual),
    ("sorrow", Register::Spiritual),
    ("despair", Register::Spiritual),
    ("negativity", Register::Spiritual),
    ("bitterness", Register::Spiritual),
    ("torment", Register::Spiritual),
    ("envy", Register::Spiritual),
    ("chaos", Register::Spiritual),
    ("disharmony", Register::Spiritual),
    ("anguish", Register::Spiritual),
    ("vile", Register::Spiritual),
    ("gloom", Register::Spiritual),
    ("misery", Register::Spiritual),
    ("wrath", Register::Spiritual),
    ("deceit", Register::Spiritual),
    ("suffering", Register::Spiritual),
    ("doom", Register::Spiritual),
    ("cringe", Register::Slang),
    ("fake", Register::Slang),
    ("shady", Register::Slang),
    ("sus", Register::Slang),
    ("drama", Register::Slang),
    ("messy", Register::Slang),
    ("mid", Register::Slang),
    ("clout-chaser", Register::Slang),
    ("flop", Register::Slang),
    ("basic", Register::Slang),
    ("salty", Register::Slang),
    ("pressed", Register::Slang),
    ("lame", Register::Slang),
    ("ratio", Register::Slang),
    ("cap", Register::Slang),
    ("no-cap", Register::Slang),
    ("ghosted", Register::Slang),
    ("canceled", Register::Slang),
    ("tea-spiller", Register::Slang),
    ("try-hard", Register::Slang),
    ("extra-in-a-bad-way", Register::Slang),
    ("lowkey-toxic", Register::Slang),
    ("vibe-killer", Register::Slang),
    ("problematic", Register::Slang),
    ("red-flag", Register::Slang),
    ("ick", Register::Slang),
    ("overrated", Register::Slang),
    ("done", Register::Slang),
];

/// 将文本规范化为 NFC 组合形式并转为小写，供匹配使用
pub fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// 词表条目（已规范化）
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    /// 规范化后的词
    pub word: String,
    /// 语域标签
    pub register: Register,
}

/// 规范化后的气场词表
#[derive(Debug)]
pub struct AuraLexicon {
    positive: Vec<LexiconEntry>,
    negative: Vec<LexiconEntry>,
}

impl AuraLexicon {
    /// 从静态词表构建规范化视图
    fn build() -> Self {
        let build_set = |entries: &[(&str, Register)]| {
            entries
                .iter()
                .map(|(word, register)| LexiconEntry {
                    word: normalize(word),
                    register: *register,
                })
                .collect::<Vec<_>>()
        };

        let lexicon = Self {
            positive: build_set(POSITIVE_WORDS),
            negative: build_set(NEGATIVE_WORDS),
        };

        // 一个词最多出现在一个极性集合中，匹配按集合独立计数
        debug_assert!(
            !lexicon
                .positive
                .iter()
                .any(|p| lexicon.negative.iter().any(|n| n.word == p.word)),
            "word present in both polarity sets"
        );

        lexicon
    }

    /// 指定极性的条目
    pub fn entries(&self, polarity: Polarity) -> &[LexiconEntry] {
        match polarity {
            Polarity::Positive => &self.positive,
            Polarity::Negative => &self.negative,
        }
    }

    /// 统计命中条目数
    ///
    /// 每个条目按「是否出现」计 0 或 1，不按出现次数累计。
    /// 入参必须已经过 [`normalize`] 处理。
    pub fn match_count(&self, normalized_text: &str, polarity: Polarity, mode: MatchMode) -> usize {
        self.entries(polarity)
            .iter()
            .filter(|entry| match mode {
                MatchMode::Containment => normalized_text.contains(&entry.word),
                MatchMode::Word => contains_word(normalized_text, &entry.word),
            })
            .count()
    }
}

/// 词边界匹配：命中处前后均不是字母或数字
fn contains_word(text: &str, word: &str) -> bool {
    let mut search_from = 0;
    while let Some(pos) = text[search_from..].find(word) {
        let start = search_from + pos;
        let end = start + word.len();

        let boundary_before = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let boundary_after = text[end..].chars().next().map_or(true, |c| !c.is_alphanumeric());

        if boundary_before && boundary_after {
            return true;
        }

        search_from = end;
    }
    false
}

/// 进程级词表实例
static LEXICON: Lazy<AuraLexicon> = Lazy::new(AuraLexicon::build);

/// 获取进程级词表
pub fn aura_lexicon() -> &'static AuraLexicon {
    &LEXICON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_builds_without_polarity_overlap() {
        let lexicon = aura_lexicon();
        assert_eq!(lexicon.entries(Polarity::Positive).len(), 60);
        assert_eq!(lexicon.entries(Polarity::Negative).len(), 58);
    }

    #[test]
    fn test_containment_counts_presence_not_occurrences() {
        let lexicon = aura_lexicon();
        let text = normalize("I love this, so much love");
        // "love" 命中 1 次（按是否出现计数）
        let count = lexicon.match_count(&text, Polarity::Positive, MatchMode::Containment);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_containment_matches_inside_longer_words() {
        let lexicon = aura_lexicon();
        // "glove" 包含 "love"，原始的子串匹配行为
        let text = normalize("a glove");
        assert_eq!(
            lexicon.match_count(&text, Polarity::Positive, MatchMode::Containment),
            1
        );
    }

    #[test]
    fn test_word_mode_requires_boundaries() {
        let lexicon = aura_lexicon();
        let inside = normalize("a glove");
        assert_eq!(lexicon.match_count(&inside, Polarity::Positive, MatchMode::Word), 0);

        let standalone = normalize("pure love!");
        assert_eq!(
            lexicon.match_count(&standalone, Polarity::Positive, MatchMode::Word),
            1
        );
    }

    #[test]
    fn test_match_is_case_insensitive_after_normalize() {
        let lexicon = aura_lexicon();
        let upper = normalize("LOVE");
        let lower = normalize("love");
        assert_eq!(
            lexicon.match_count(&upper, Polarity::Positive, MatchMode::Containment),
            lexicon.match_count(&lower, Polarity::Positive, MatchMode::Containment),
        );
    }

    #[test]
    fn test_normalize_composes_to_nfc() {
        // "e" + U+0301 组合为 "é"
        let decomposed = "cafe\u{0301}";
        assert_eq!(normalize(decomposed), "café");
    }
}
