//! Keyword density engine.
//!
//! Given raw text and a target phrase, [`DensityAnalyzer`] reports how often
//! the phrase occurs, what share of the words it makes up, which other words
//! dominate the text, a bounded SEO score and advisory text. The analysis is
//! a pure function of its input and configuration.
//!
//! # Examples
//!
//! ```
//! use seokit::density::DensityAnalyzer;
//!
//! let analyzer = DensityAnalyzer::with_defaults().unwrap();
//! let result = analyzer.analyze("Rust makes fast tools. Fast tools win.", "fast tools").unwrap();
//!
//! assert_eq!(result.total_words, 7);
//! assert_eq!(result.keyword_count, 4);
//! assert!(result.seo_score <= 100);
//! ```

pub mod advice;
pub mod config;
pub mod engine;
pub mod frequency;
pub mod phrase;
pub mod result;
pub mod score;

pub use advice::{Advisor, DensityLevel};
pub use config::{DensityConfig, PhraseCounting, RelatedKeywordMode, ScoringConfig};
pub use engine::DensityAnalyzer;
pub use frequency::FrequencyTable;
pub use phrase::{PhraseCounter, PhraseMatches};
pub use result::{AnalysisResult, DensityRequest, RelatedKeyword};
pub use score::{ScoreBreakdown, Scorer};

/// `count / total * 100`, or `0` when `total` is zero.
pub fn raw_percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// [`raw_percentage`] rounded to 2 decimal places.
pub fn percentage(count: usize, total: usize) -> f64 {
    round2(raw_percentage(count, total))
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
