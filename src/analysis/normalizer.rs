//! Text normalization shared by documents and target phrases.
//!
//! Normalization lower-cases the text, turns every character that is neither
//! a word character nor whitespace into a space, collapses whitespace runs to
//! a single space and trims both ends. Documents and target phrases go through
//! the same normalizer, which is what makes substring phrase matching line up
//! with token boundaries.
//!
//! # Examples
//!
//! ```
//! use seokit::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new().unwrap();
//! assert_eq!(normalizer.normalize("  SEO-Tools, for   everyone! "), "seo tools for everyone");
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::{CharFilter, LowercaseCharFilter, PatternReplaceCharFilter};
use crate::error::Result;

/// Characters that are neither word characters nor whitespace.
const NON_WORD_PATTERN: &str = r"[^\w\s]";

/// Runs of whitespace.
const WHITESPACE_RUN_PATTERN: &str = r"\s+";

/// Normalizes raw text into the canonical form used for counting.
#[derive(Clone)]
pub struct TextNormalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl TextNormalizer {
    /// Create the standard normalizer.
    pub fn new() -> Result<Self> {
        Ok(TextNormalizer {
            char_filters: vec![
                Arc::new(LowercaseCharFilter::new()),
                Arc::new(PatternReplaceCharFilter::new(NON_WORD_PATTERN, " ")?),
                Arc::new(PatternReplaceCharFilter::new(WHITESPACE_RUN_PATTERN, " ")?),
            ],
        })
    }

    /// Normalize the given text.
    pub fn normalize(&self, text: &str) -> String {
        let filtered = self
            .char_filters
            .iter()
            .fold(text.to_string(), |acc, char_filter| char_filter.filter(&acc));

        let trimmed = filtered.trim();
        if trimmed.len() == filtered.len() {
            filtered
        } else {
            trimmed.to_string()
        }
    }
}

impl CharFilter for TextNormalizer {
    fn filter(&self, input: &str) -> String {
        self.normalize(input)
    }

    fn name(&self) -> &'static str {
        "normalizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        let normalizer = TextNormalizer::new().unwrap();
        assert_eq!(
            normalizer.normalize("SEO tools help you rank. SEO tools are free!"),
            "seo tools help you rank seo tools are free"
        );
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        let normalizer = TextNormalizer::new().unwrap();
        assert_eq!(normalizer.normalize("a\n\n  b\t\tc"), "a b c");
        assert_eq!(normalizer.normalize("(--)"), "");
        assert_eq!(normalizer.normalize(""), "");
    }

    #[test]
    fn test_word_characters_survive() {
        let normalizer = TextNormalizer::new().unwrap();
        assert_eq!(normalizer.normalize("snake_case 42 Café"), "snake_case 42 café");
        assert_eq!(normalizer.normalize("don't"), "don t");
    }

    #[test]
    fn test_accented_words_stay_whole() {
        let normalizer = TextNormalizer::new().unwrap();
        assert_eq!(normalizer.normalize("Naïve café résumé"), "naïve café résumé");
    }

    #[test]
    fn test_normalizer_as_char_filter() {
        let normalizer = TextNormalizer::new().unwrap();
        assert_eq!(CharFilter::filter(&normalizer, " A.B "), "a b");
        assert_eq!(normalizer.name(), "normalizer");
    }
}
