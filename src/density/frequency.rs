//! Frequency table of related-keyword candidates.

use ahash::AHashMap;

use crate::analysis::token::Token;
use crate::density::percentage;
use crate::density::result::RelatedKeyword;

/// Token counts that remember first-occurrence order.
///
/// Ranking sorts by count with a stable sort, so tokens with equal counts
/// come out in the order they first appeared in the document.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: AHashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a token sequence.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.text);
        }
        table
    }

    /// Count one occurrence of `term`.
    pub fn add(&mut self, term: String) {
        match self.index.get(&term) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(term.clone(), self.entries.len());
                self.entries.push((term, 1));
            }
        }
    }

    /// Occurrences of `term`.
    pub fn count(&self, term: &str) -> usize {
        self.index
            .get(term)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `limit` most frequent terms, each with its density relative to
    /// `total_words`.
    pub fn top(&self, limit: usize, total_words: usize) -> Vec<RelatedKeyword> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(limit)
            .map(|(term, count)| RelatedKeyword {
                keyword: term.clone(),
                count: *count,
                density: percentage(*count, total_words),
            })
            .collect()
    }
}
