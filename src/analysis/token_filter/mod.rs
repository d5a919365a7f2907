//! Token filter implementations for token transformation.
//!
//! Filters receive a stream of tokens and produce a new stream. The density
//! engine uses them to decide which tokens are related-keyword candidates.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stop words
//! - [`min_length::MinLengthFilter`] - Removes tokens that are too short
//! - [`exclude::ExcludeFilter`] - Removes one exact token (the target keyword)
//!
//! # Examples
//!
//! ```
//! use seokit::analysis::token_filter::Filter;
//! use seokit::analysis::token_filter::min_length::MinLengthFilter;
//! use seokit::analysis::token::Token;
//!
//! let filter = MinLengthFilter::new(3);
//! let tokens = vec![Token::new("seo", 0), Token::new("tools", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "tools");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → MinLength → Stop Words → Exclude Target → Frequency Table
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod exclude;
pub mod min_length;
pub mod stop;

pub use exclude::ExcludeFilter;
pub use min_length::MinLengthFilter;
pub use stop::StopFilter;
