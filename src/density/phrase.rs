//! Counting occurrences of a target phrase.
//!
//! Both the document and the phrase are expected in normalized form (see
//! [`TextNormalizer`](crate::analysis::normalizer::TextNormalizer)), so the
//! phrase words are separated by single spaces.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::density::config::PhraseCounting;

/// Breakdown of how a phrase was counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhraseMatches {
    /// Non-overlapping substring matches of the whole phrase.
    pub exact: usize,

    /// Credit from individual phrase words (multi-word phrases only).
    pub distributed: usize,
}

impl PhraseMatches {
    /// Total occurrence count.
    pub fn total(&self) -> usize {
        self.exact + self.distributed
    }
}

/// Counts target phrase occurrences in a normalized document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseCounter {
    counting: PhraseCounting,
}

impl PhraseCounter {
    /// Create a counter using the given counting method.
    pub fn new(counting: PhraseCounting) -> Self {
        PhraseCounter { counting }
    }

    /// Count `phrase` in `text`, using `tokens` (the tokens of `text`) for the
    /// per-word credit.
    ///
    /// An empty phrase never matches.
    pub fn count(&self, text: &str, tokens: &[Token], phrase: &str) -> PhraseMatches {
        if phrase.is_empty() {
            return PhraseMatches::default();
        }

        let exact = text.matches(phrase).count();

        let distributed = match self.counting {
            PhraseCounting::ExactOnly => 0,
            PhraseCounting::Combined => {
                let words: Vec<&str> = phrase.split_whitespace().collect();
                if words.len() > 1 {
                    words
                        .iter()
                        .map(|word| {
                            let word_matches =
                                tokens.iter().filter(|token| token.text == *word).count();
                            word_matches / words.len()
                        })
                        .sum()
                } else {
                    0
                }
            }
        };

        PhraseMatches { exact, distributed }
    }
}
