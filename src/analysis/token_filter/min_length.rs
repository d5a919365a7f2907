//! Minimum length filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that keeps only tokens strictly longer than a given number of
/// characters.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a new filter that drops tokens of `min_length` characters or fewer.
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }

    /// Get the length threshold.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        let kept: Vec<Token> = tokens
            .filter(|token| token.char_len() > min_length)
            .collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
