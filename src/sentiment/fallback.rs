//! Deterministic lexicon-based sentiment heuristic.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::sentiment::{labels, round2, SentimentSummary, FALLBACK_METHOD};

/// Positive lexicon for the fallback heuristic.
static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["bom", "ótimo", "excelente", "maravilhoso", "feliz", "positivo"]
        .into_iter()
        .collect()
});

/// Negative lexicon for the fallback heuristic.
static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["ruim", "péssimo", "horrível", "triste", "negativo"]
        .into_iter()
        .collect()
});

/// Classifies text by counting exact lexicon matches.
///
/// The split here is intentionally looser than the tokenizer's: words are
/// separated on whitespace only, with no punctuation stripping and no
/// minimum length, so `"bom."` does not match but `"bom"` does. With no
/// matches, or an exact tie, the result is Neutro at 50.0; otherwise the
/// winning side's share of all matches becomes the confidence.
pub fn fallback_sentiment(text: &str) -> SentimentSummary {
    let lowered = text.to_lowercase();

    let mut positive = 0usize;
    let mut negative = 0usize;
    for word in lowered.split_whitespace() {
        if POSITIVE_WORDS.contains(word) {
            positive += 1;
        }
        if NEGATIVE_WORDS.contains(word) {
            negative += 1;
        }
    }

    let total = positive + negative;
    let (sentiment, confidence) = if total == 0 || positive == negative {
        (labels::NEUTRAL, 50.0)
    } else if positive > negative {
        (
            labels::POSITIVE,
            round2(positive as f64 / total as f64 * 100.0),
        )
    } else {
        (
            labels::NEGATIVE,
            round2(negative as f64 / total as f64 * 100.0),
        )
    };

    SentimentSummary::Fallback {
        sentiment: sentiment.to_string(),
        confidence,
        method: FALLBACK_METHOD,
    }
}
