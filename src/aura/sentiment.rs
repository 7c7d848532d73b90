//! Base Sentiment Sub-scorer
//!
//! Token-level polarity scoring against a general valence lexicon,
//! independent of the aura keyword table. Negations flip the sign of the
//! following scored token, intensifiers push its magnitude one step further.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::lexicon::normalize;

/// General polarity lexicon, AFINN-style integer valences in roughly [-5, 5].
const VALENCES: &[(&str, i32)] = &[
    // positive
    ("adore", 3),
    ("amazing", 4),
    ("awesome", 4),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("brilliant", 4),
    ("calm", 2),
    ("celebrate", 3),
    ("charming", 3),
    ("cheerful", 2),
    ("cool", 1),
    ("delight", 3),
    ("delighted", 3),
    ("enjoy", 2),
    ("excellent", 3),
    ("excited", 3),
    ("fantastic", 4),
    ("favorite", 2),
    ("fun", 4),
    ("glad", 3),
    ("good", 3),
    ("great", 3),
    ("happy", 3),
    ("incredible", 4),
    ("interesting", 2),
    ("kind", 2),
    ("like", 2),
    ("love", 3),
    ("loved", 3),
    ("lovely", 3),
    ("lucky", 3),
    ("nice", 3),
    ("outstanding", 5),
    ("perfect", 3),
    ("pleasant", 3),
    ("proud", 2),
    ("smile", 2),
    ("strong", 2),
    ("superb", 5),
    ("sweet", 2),
    ("thank", 2),
    ("thanks", 2),
    ("thrilled", 5),
    ("win", 4),
    ("wonderful", 4),
    ("wow", 4),
    // negative
    ("afraid", -2),
    ("angry", -3),
    ("annoying", -2),
    ("anxious", -2),
    ("awful", -3),
    ("bad", -3),
    ("boring", -3),
    ("broken", -1),
    ("cruel", -3),
    ("cry", -1),
    ("depressed", -2),
    ("disappointed", -2),
    ("disgusting", -3),
    ("dreadful", -3),
    ("evil", -3),
    ("fail", -2),
    ("failed", -2),
    ("fear", -2),
    ("gloomy", -2),
    ("gross", -2),
    ("hate", -3),
    ("hated", -3),
    ("horrible", -3),
    ("hurt", -2),
    ("lose", -3),
    ("lost", -3),
    ("mad", -3),
    ("mess", -2),
    ("miserable", -3),
    ("nasty", -3),
    ("pathetic", -2),
    ("poor", -2),
    ("sad", -2),
    ("scared", -2),
    ("sick", -2),
    ("sorry", -1),
    ("stupid", -2),
    ("terrible", -3),
    ("tired", -2),
    ("ugly", -3),
    ("unhappy", -2),
    ("upset", -2),
    ("weak", -2),
    ("worse", -3),
    ("worst", -3),
    ("wrong", -2),
];

/// Tokens that flip the sign of the following scored token.
const NEGATORS: &[&str] = &[
    "no", "not", "never", "none", "nobody", "nothing", "neither", "nor", "cannot", "can't",
    "don't", "doesn't", "didn't", "won't", "wouldn't", "isn't", "aren't", "wasn't", "weren't",
    "shouldn't", "couldn't", "ain't",
];

/// Tokens that push the following scored token one step further from zero.
const INTENSIFIERS: &[&str] = &[
    "very", "really", "so", "extremely", "super", "totally", "absolutely", "incredibly",
];

static VALENCE_MAP: Lazy<HashMap<&'static str, i32>> =
    Lazy::new(|| VALENCES.iter().copied().collect());

/// Score a text by summing token valences.
///
/// Case-folds and normalizes internally, so callers may pass raw input.
/// The sum is unbounded; the caller applies weighting and clamping.
pub fn sentiment_score(text: &str) -> i32 {
    let normalized = normalize(text);
    let tokens: Vec<&str> = normalized
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .collect();

    let mut score = 0;
    for (i, token) in tokens.iter().enumerate() {
        let Some(&valence) = VALENCE_MAP.get(token) else {
            continue;
        };

        let adjusted = match i.checked_sub(1).map(|p| tokens[p]) {
            Some(prev) if NEGATORS.contains(&prev) => -valence,
            Some(prev) if INTENSIFIERS.contains(&prev) => valence + valence.signum(),
            _ => valence,
        };

        score += adjusted;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_neutral_text_scores_zero() {
        assert_eq!(sentiment_score("the meeting is at three"), 0);
    }

    #[rstest]
    #[case("good", 3)]
    #[case("bad", -3)]
    #[case("good good", 6)]
    #[case("GOOD", 3)]
    fn test_token_valences(#[case] text: &str, #[case] expected: i32) {
        assert_eq!(sentiment_score(text), expected);
    }

    #[test]
    fn test_negation_flips_sign() {
        assert_eq!(sentiment_score("not good"), -3);
        assert_eq!(sentiment_score("not bad"), 3);
    }

    #[test]
    fn test_intensifier_raises_magnitude() {
        assert_eq!(sentiment_score("very good"), 4);
        assert_eq!(sentiment_score("really bad"), -4);
    }

    #[test]
    fn test_mixed_sentence_sums() {
        // good (3) + not bad (3)
        assert_eq!(sentiment_score("good, not bad"), 6);
    }

    #[test]
    fn test_apostrophe_tokens_negate() {
        assert_eq!(sentiment_score("don't like"), -2);
    }

    #[test]
    fn test_unscored_scripts_fall_through() {
        assert_eq!(sentiment_score("こんにちは 你好"), 0);
    }
}
