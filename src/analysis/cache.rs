//! Single-slot cache of the most recent analysis.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The data published by one successful analysis.
#[derive(Debug, Clone)]
pub struct AnalysisSnapshot {
    /// The lowercased original text.
    pub text: String,
    /// All tokens from the analysis, before stopword filtering.
    pub tokens: Vec<String>,
    /// When the analysis ran.
    pub analyzed_at: DateTime<Utc>,
}

/// Holds only the most recent [`AnalysisSnapshot`].
///
/// Every new analysis overwrites the slot; concurrent writers race under
/// last-write-wins semantics. The cache is a best-effort convenience for
/// term lookups, not a correctness-critical store, so no versioning or
/// merging is attempted.
#[derive(Debug, Default)]
pub struct AnalysisCache {
    slot: RwLock<Option<AnalysisSnapshot>>,
}

impl AnalysisCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the slot with a new snapshot.
    pub fn store(&self, snapshot: AnalysisSnapshot) {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(snapshot);
    }

    /// Counts exact-token occurrences of `term` in the cached analysis.
    ///
    /// The term is lowercased before matching, mirroring token
    /// normalization. An empty cache reports the term as not found with a
    /// null analysis date.
    pub fn search(&self, term: &str) -> TermSearch {
        let slot = self.slot.read().unwrap_or_else(|e| e.into_inner());
        match slot.as_ref() {
            Some(snapshot) => {
                let needle = term.to_lowercase();
                let occurrences = snapshot
                    .tokens
                    .iter()
                    .filter(|token| **token == needle)
                    .count();
                TermSearch {
                    term_found: occurrences > 0,
                    occurrences,
                    last_analysis_date: Some(snapshot.analyzed_at),
                }
            }
            None => TermSearch {
                term_found: false,
                occurrences: 0,
                last_analysis_date: None,
            },
        }
    }
}

/// Result of a term lookup against the cached analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermSearch {
    /// Whether the term occurred at least once.
    pub term_found: bool,
    /// Number of exact token matches.
    pub occurrences: usize,
    /// Timestamp of the analysis that was searched, if any.
    pub last_analysis_date: Option<DateTime<Utc>>,
}
