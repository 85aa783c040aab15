//! Analysis orchestration: validation, the word pipeline, sentiment, and
//! publication to the single-slot cache.

mod cache;

pub use cache::{AnalysisCache, AnalysisSnapshot, TermSearch};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::error::{AnalysisError, Result};
use crate::frequency::{count_words, top_words, RankedWord};
use crate::sentiment::{SentimentClassifier, SentimentSummary};
use crate::text::{remove_stopwords, Tokenizer};

/// Full outcome of one text analysis, in wire format.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Token count before stopword filtering.
    pub total_words: usize,
    /// Most frequent tokens after stopword filtering.
    pub top_5_words: Vec<RankedWord>,
    /// Sentiment classification of the original text.
    pub sentiment_summary: SentimentSummary,
    /// When the analysis ran.
    pub analyzed_at: DateTime<Utc>,
}

/// Composes the tokenizer, stopword filter, frequency ranker, and sentiment
/// classifier into one request/response cycle.
pub struct Analyzer {
    tokenizer: Tokenizer,
    classifier: SentimentClassifier,
    cache: Arc<AnalysisCache>,
    max_text_chars: usize,
    top_limit: usize,
}

impl Analyzer {
    /// Creates an analyzer sharing the given cache.
    pub fn new(config: &Config, cache: Arc<AnalysisCache>) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new(config.text.clone()),
            classifier: SentimentClassifier::new(config.sentiment.clone())?,
            cache,
            max_text_chars: config.text.max_text_chars,
            top_limit: config.text.top_limit,
        })
    }

    /// Analyzes a text: word statistics plus sentiment.
    ///
    /// `total_words` counts every token the tokenizer produced; the ranking
    /// runs only on tokens that survived stopword filtering. Sentiment sees
    /// the original untouched text, punctuation included. On success the
    /// analysis is published to the cache for later term lookups.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        if text.trim().is_empty() {
            return Err(AnalysisError::InvalidInput);
        }
        let length = text.chars().count();
        if length > self.max_text_chars {
            return Err(AnalysisError::PayloadTooLarge {
                length,
                max: self.max_text_chars,
            });
        }

        let all_tokens = self.tokenizer.tokenize(text);
        let total_words = all_tokens.len();

        let filtered = remove_stopwords(all_tokens.clone());
        let table = count_words(filtered);
        let top_5_words = top_words(&table, self.top_limit);

        let sentiment_summary = self.classifier.classify(text).await;

        let analyzed_at = Utc::now();
        self.cache.store(AnalysisSnapshot {
            text: text.to_lowercase(),
            tokens: all_tokens,
            analyzed_at,
        });

        Ok(AnalysisReport {
            total_words,
            top_5_words,
            sentiment_summary,
            analyzed_at,
        })
    }
}
