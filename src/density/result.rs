//! Request and result types of the density engine.

use serde::{Deserialize, Serialize};

use crate::density::score::ScoreBreakdown;

/// A related keyword with its frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedKeyword {
    pub keyword: String,
    pub count: usize,
    /// Percentage of all words, rounded to 2 decimals like the target
    /// [`AnalysisResult::density`]. The rounding is part of the output
    /// contract; callers needing exact ratios use `count` and `total_words`.
    pub density: f64,
}

/// The outcome of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Target phrase density in percent, rounded to 2 decimals.
    pub density: f64,
    pub total_words: usize,
    /// Occurrences attributed to the target phrase.
    pub keyword_count: usize,
    pub related_keywords: Vec<RelatedKeyword>,
    /// Composite score in `0..=100`.
    pub seo_score: u8,
    pub score_breakdown: ScoreBreakdown,
    pub suggestions: Vec<String>,
    pub improvements: Vec<String>,
}

/// Input to [`DensityAnalyzer::analyze_request`](super::DensityAnalyzer::analyze_request).
///
/// The optional fields override the analyzer's configured related-keyword
/// mode for this call only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityRequest {
    pub text: String,
    pub target_phrase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_keyword_limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_target_from_related: Option<bool>,
}

impl DensityRequest {
    /// Create a request for `text` and `target_phrase`.
    pub fn new<T, P>(text: T, target_phrase: P) -> Self
    where
        T: Into<String>,
        P: Into<String>,
    {
        DensityRequest {
            text: text.into(),
            target_phrase: target_phrase.into(),
            related_keyword_limit: None,
            exclude_target_from_related: None,
        }
    }

    /// Override the number of related keywords.
    pub fn with_related_keyword_limit(mut self, limit: usize) -> Self {
        self.related_keyword_limit = Some(limit);
        self
    }

    /// Override whether the target phrase is left out of related keywords.
    pub fn with_exclude_target(mut self, exclude: bool) -> Self {
        self.exclude_target_from_related = Some(exclude);
        self
    }
}
