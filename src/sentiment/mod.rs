//! Sentiment classification: a remote multi-label model with a local
//! lexicon-based fallback.

mod classifier;
mod fallback;

pub use classifier::SentimentClassifier;
pub use fallback::fallback_sentiment;

use indexmap::IndexMap;
use serde::Serialize;

/// The local (Portuguese) sentiment label set.
pub mod labels {
    /// Strongest negative label.
    pub const VERY_NEGATIVE: &str = "Muito Negativo";
    /// Negative label.
    pub const NEGATIVE: &str = "Negativo";
    /// Neutral label.
    pub const NEUTRAL: &str = "Neutro";
    /// Positive label.
    pub const POSITIVE: &str = "Positivo";
    /// Strongest positive label.
    pub const VERY_POSITIVE: &str = "Muito Positivo";
}

/// Source indicator reported when the remote model produced the result.
pub const REMOTE_SOURCE: &str = "Hugging Face";

/// Source indicator reported when the local heuristic produced the result.
pub const FALLBACK_METHOD: &str = "Fallback simples";

/// Label → percentage score distribution, kept in remote-response order.
pub type ScoreDistribution = IndexMap<String, f64>;

/// Outcome of one sentiment classification.
///
/// An explicit sum over the two sources: either the remote model answered
/// and a full score distribution is available, or the local heuristic ran
/// and no distribution exists. Callers must treat a missing distribution as
/// "unavailable", never as "all zero".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SentimentSummary {
    /// The remote model answered.
    Remote {
        /// Dominant sentiment label.
        sentiment: String,
        /// Percentage confidence of the dominant label.
        confidence: f64,
        /// Full label → percentage distribution, in response order.
        all_scores: ScoreDistribution,
        /// Wire-format source indicator ([`REMOTE_SOURCE`]).
        api_used: &'static str,
    },
    /// The local heuristic ran because the remote model was unavailable.
    Fallback {
        /// Dominant sentiment label.
        sentiment: String,
        /// Percentage confidence of the dominant label.
        confidence: f64,
        /// Wire-format source indicator ([`FALLBACK_METHOD`]).
        method: &'static str,
    },
}

impl SentimentSummary {
    /// The dominant sentiment label.
    pub fn sentiment(&self) -> &str {
        match self {
            SentimentSummary::Remote { sentiment, .. } => sentiment,
            SentimentSummary::Fallback { sentiment, .. } => sentiment,
        }
    }

    /// Percentage confidence of the dominant label.
    pub fn confidence(&self) -> f64 {
        match self {
            SentimentSummary::Remote { confidence, .. } => *confidence,
            SentimentSummary::Fallback { confidence, .. } => *confidence,
        }
    }

    /// The full score distribution, when the remote model provided one.
    pub fn distribution(&self) -> Option<&ScoreDistribution> {
        match self {
            SentimentSummary::Remote { all_scores, .. } => Some(all_scores),
            SentimentSummary::Fallback { .. } => None,
        }
    }

    /// Returns true if the local heuristic produced this result.
    pub fn is_fallback(&self) -> bool {
        matches!(self, SentimentSummary::Fallback { .. })
    }
}

/// Translates a remote model label into the local label set.
///
/// Labels outside the five-entry table pass through unchanged, so an
/// unknown label never fails the whole classification.
pub(crate) fn translate_label(label: &str) -> &str {
    match label {
        "Very Negative" => labels::VERY_NEGATIVE,
        "Negative" => labels::NEGATIVE,
        "Neutral" => labels::NEUTRAL,
        "Positive" => labels::POSITIVE,
        "Very Positive" => labels::VERY_POSITIVE,
        other => other,
    }
}

/// Converts a raw [0,1] model score into a percentage with two decimals.
///
/// Multiplies by 10000, rounds to the nearest integer, divides by 100.
/// This exact sequence avoids floating-point display artifacts and is part
/// of the wire format.
pub(crate) fn to_percentage(score: f64) -> f64 {
    (score * 10000.0).round() / 100.0
}

/// Rounds a percentage value to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
