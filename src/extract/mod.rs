//! Visible-text extraction.
//!
//! The density engine works on plain text. When the input is markup, a
//! [`TextExtractor`] turns it into the text a reader would actually see
//! before analysis. [`source::ContentLoader`] decides which extractor to use
//! and guarantees the engine is never handed an empty document by mistake.
//!
//! # Examples
//!
//! ```
//! use seokit::extract::{HtmlTextExtractor, TextExtractor};
//!
//! let extractor = HtmlTextExtractor::new().unwrap();
//! let text = extractor
//!     .extract_visible_text("<body><nav>Menu</nav><p>Hello &amp; welcome</p></body>")
//!     .unwrap();
//! assert_eq!(text, "Hello & welcome");
//! ```

use crate::error::Result;

/// Trait for turning a document into its visible text.
pub trait TextExtractor: Send + Sync {
    /// Extract the visible text of `markup`.
    fn extract_visible_text(&self, markup: &str) -> Result<String>;

    /// Get the name of this extractor.
    fn name(&self) -> &'static str;
}

/// An extractor for input that already is plain text.
#[derive(Clone, Debug, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a new plain text extractor.
    pub fn new() -> Self {
        PlainTextExtractor
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract_visible_text(&self, markup: &str) -> Result<String> {
        Ok(markup.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}

pub mod html;
pub mod source;

pub use html::HtmlTextExtractor;
pub use source::{ContentFormat, ContentLoader, ContentSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_extractor() {
        let extractor = PlainTextExtractor::new();
        assert_eq!(
            extractor.extract_visible_text("  <b>kept</b> as is \n").unwrap(),
            "<b>kept</b> as is"
        );
        assert_eq!(extractor.name(), "plain");
    }
}
