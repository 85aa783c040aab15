//! Word frequency counting and top-N ranking.

use indexmap::IndexMap;
use serde::Serialize;

/// Token → occurrence count mapping, iterated in insertion order.
///
/// Insertion order is load-bearing: [`top_words`] breaks count ties by
/// first insertion, and an unordered map would make the ranking
/// nondeterministic.
pub type FrequencyTable = IndexMap<String, usize>;

/// A word paired with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedWord {
    /// The ranked word.
    pub word: String,
    /// How many times the word occurred.
    pub count: usize,
}

/// Builds a frequency table from a token sequence. O(n) in token count.
pub fn count_words<I>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = String>,
{
    let mut table = FrequencyTable::new();
    for token in tokens {
        *table.entry(token).or_insert(0) += 1;
    }
    table
}

/// Returns up to `limit` entries sorted by count descending.
///
/// The sort is stable: when two words share a count, the one inserted into
/// the table first ranks first. Tables with fewer than `limit` distinct
/// words yield all of them; the result is never padded.
pub fn top_words(table: &FrequencyTable, limit: usize) -> Vec<RankedWord> {
    let mut entries: Vec<(&String, &usize)> = table.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));
    entries
        .into_iter()
        .take(limit)
        .map(|(word, &count)| RankedWord {
            word: word.clone(),
            count,
        })
        .collect()
}
