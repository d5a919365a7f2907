//! Exclude filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that removes every token equal to one exact term.
///
/// The basic density tool uses it to keep the target keyword itself out of
/// the related-keyword ranking.
#[derive(Clone, Debug)]
pub struct ExcludeFilter {
    term: String,
}

impl ExcludeFilter {
    /// Create a new filter that drops tokens equal to `term`.
    pub fn new<S: Into<String>>(term: S) -> Self {
        ExcludeFilter { term: term.into() }
    }

    /// Get the excluded term.
    pub fn term(&self) -> &str {
        &self.term
    }
}

impl Filter for ExcludeFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens.filter(|token| token.text != self.term).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "exclude"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclude_filter() {
        let filter = ExcludeFilter::new("keyword");
        let tokens = vec![
            Token::new("keyword", 0),
            Token::new("density", 1),
            Token::new("keywords", 2),
            Token::new("keyword", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "density");
        assert_eq!(result[1].text, "keywords");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(ExcludeFilter::new("x").name(), "exclude");
    }
}
