//! Text analysis module for seokit.
//!
//! This module provides the building blocks the density engine is made of:
//! char filters that [`TextNormalizer`] chains to normalize raw text, a
//! tokenizer that splits it, and token filters that decide which tokens count
//! as keyword candidates. [`analyzer::PipelineAnalyzer`] chains the last two.
//!
//! ```text
//! Raw Text → TextNormalizer → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use normalizer::TextNormalizer;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
