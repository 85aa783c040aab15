//! Remote sentiment classification with fallback orchestration.

use std::time::Duration;

use log::warn;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::SentimentConfig;
use crate::error::{AnalysisError, Result};
use crate::sentiment::{
    fallback_sentiment, labels, to_percentage, translate_label, ScoreDistribution,
    SentimentSummary, REMOTE_SOURCE,
};

/// Request body for the remote inference endpoint.
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// One (label, score) pair from the remote model; score is in [0,1].
#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Classifies text via a remote multi-label sentiment model, downgrading to
/// the local heuristic when the model is unavailable.
pub struct SentimentClassifier {
    client: Client,
    config: SentimentConfig,
}

impl SentimentClassifier {
    /// Creates a classifier with the given configuration.
    pub fn new(config: SentimentConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalysisError::Internal(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Creates a classifier with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(SentimentConfig::default())
    }

    /// Classifies the sentiment of `text`.
    ///
    /// Makes a single bounded attempt against the remote model; any failure
    /// (network, timeout, non-2xx status, malformed or empty body) downgrades
    /// to [`fallback_sentiment`]. This method never fails.
    pub async fn classify(&self, text: &str) -> SentimentSummary {
        match self.classify_remote(text).await {
            Ok(summary) => summary,
            Err(err) => {
                warn!("{err}; using fallback heuristic");
                fallback_sentiment(text)
            }
        }
    }

    /// Runs the remote leg of classification.
    async fn classify_remote(&self, text: &str) -> Result<SentimentSummary> {
        let truncated = truncate_chars(text, self.config.max_input_chars);

        let mut request = self
            .client
            .post(&self.config.endpoint)
            .json(&InferenceRequest { inputs: truncated });
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AnalysisError::RemoteClassifier(e.to_string()))?
            .error_for_status()
            .map_err(|e| AnalysisError::RemoteClassifier(e.to_string()))?;

        // The model answers with a batch: one score list per input.
        let batches: Vec<Vec<LabelScore>> = response
            .json()
            .await
            .map_err(|e| AnalysisError::RemoteClassifier(e.to_string()))?;

        let scores = batches
            .into_iter()
            .next()
            .filter(|scores| !scores.is_empty())
            .ok_or_else(|| {
                AnalysisError::RemoteClassifier("response contained no scores".to_string())
            })?;

        Ok(summarize(scores))
    }
}

/// Truncates text to at most `max` characters, on a character boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Normalizes a non-empty remote score list into a summary.
///
/// Labels are translated into the local set and scores converted to
/// percentages, keeping response order. The dominant label is the maximum
/// percentage; on an exact tie the first-encountered entry wins.
fn summarize(scores: Vec<LabelScore>) -> SentimentSummary {
    let mut distribution = ScoreDistribution::new();
    for LabelScore { label, score } in scores {
        distribution.insert(translate_label(&label).to_string(), to_percentage(score));
    }

    let mut dominant: Option<(&String, f64)> = None;
    for (label, &pct) in &distribution {
        match dominant {
            Some((_, best)) if pct <= best => {}
            _ => dominant = Some((label, pct)),
        }
    }

    // `scores` is non-empty, so a dominant entry always exists.
    let (sentiment, confidence) = match dominant {
        Some((label, pct)) => (label.clone(), pct),
        None => (labels::NEUTRAL.to_string(), 50.0),
    };

    SentimentSummary::Remote {
        sentiment,
        confidence,
        all_scores: distribution,
        api_used: REMOTE_SOURCE,
    }
}
