//! # Sentinela - Text Analysis & Sentiment API
//!
//! Sentinela is an HTTP service that accepts free text, tokenizes it, ranks
//! word frequencies, and classifies sentiment by delegating to a remote
//! inference model with a deterministic local fallback.
//!
//! ## Overview
//!
//! One analysis request flows through two independent branches:
//!
//! - the word pipeline: tokenize → stopword-filter → frequency-count →
//!   top-5 rank, with the pre-filter token count reported as `total_words`;
//! - sentiment classification over the original untouched text, against a
//!   remote multi-label model, downgrading to a lexicon heuristic when the
//!   model is unavailable.
//!
//! The most recent analysis is kept in a single-slot cache to answer term
//! lookups; each new analysis overwrites it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sentinela::{AnalysisCache, Analyzer, Config};
//! use std::sync::Arc;
//!
//! let cache = Arc::new(AnalysisCache::new());
//! let analyzer = Analyzer::new(&Config::default(), Arc::clone(&cache))?;
//!
//! let report = analyzer.analyze("um texto bom, muito bom").await?;
//! println!("{} words, sentiment {}", report.total_words,
//!     report.sentiment_summary.sentiment());
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Tokenization and stopword filtering
//! - [`frequency`] - Frequency counting and top-N ranking
//! - [`sentiment`] - Remote classification with local fallback
//! - [`analysis`] - Orchestration and the single-slot cache
//! - [`server`] - Axum routes and wire-format mapping

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod frequency;
pub mod sentiment;
pub mod server;
pub mod text;

// Re-export commonly used types
pub use analysis::{AnalysisCache, AnalysisReport, AnalysisSnapshot, Analyzer, TermSearch};
pub use config::{Config, SentimentConfig, ServerConfig, TextConfig};
pub use error::{AnalysisError, Result};
pub use frequency::{count_words, top_words, FrequencyTable, RankedWord};
pub use sentiment::{fallback_sentiment, SentimentClassifier, SentimentSummary};
pub use server::{create_router, AppState};
pub use text::{is_stopword, remove_stopwords, Tokenizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
