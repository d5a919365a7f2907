//! # seokit
//!
//! Keyword density and on-page SEO text metrics for Rust.
//!
//! ## Features
//!
//! - Deterministic keyword density analysis for single- and multi-word phrases
//! - Related keyword ranking with a closed stop-word list
//! - Composite 0-100 SEO score built from four capped bands
//! - Threshold-driven suggestions and improvements
//! - Visible-text extraction from HTML
//!
//! ## Example
//!
//! ```
//! use seokit::density::DensityAnalyzer;
//!
//! let analyzer = DensityAnalyzer::with_defaults().unwrap();
//! let result = analyzer.analyze("Free SEO tools for everyone.", "seo tools").unwrap();
//! assert_eq!(result.total_words, 5);
//! ```

pub mod analysis;
pub mod cli;
pub mod density;
pub mod error;
pub mod extract;

pub mod prelude {
    pub use crate::density::{AnalysisResult, DensityAnalyzer, DensityConfig, DensityRequest};
    pub use crate::error::{Result, SeokitError};
    pub use crate::extract::{ContentFormat, ContentLoader, ContentSource, TextExtractor};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
