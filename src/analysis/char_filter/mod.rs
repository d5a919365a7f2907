//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text string before it reaches the
//! tokenizer. The density engine relies on them to lower-case the text and
//! strip punctuation, so that phrase matching works on exactly the same text
//! the tokens were cut from.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode-aware lower-casing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use seokit::analysis::char_filter::CharFilter;
//! use seokit::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\s+", " ").unwrap();
//! assert_eq!(filter.filter("a \n\t b"), "a b");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;

pub use lowercase::LowercaseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
