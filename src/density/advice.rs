//! Advisory text for an analysis.
//!
//! Advice is a fixed set of templates picked by thresholds; nothing here is
//! generated freely. The density classification is shared by the suggestion
//! and improvement lists so both always agree.

use serde::{Deserialize, Serialize};

use crate::density::config::AdviceThresholds;

/// How a density figure compares to the advice thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityLevel {
    TooLow,
    Optimal,
    TooHigh,
}

const GENERAL_SUGGESTIONS: &[&str] = &[
    "Use keyword variations and LSI (Latent Semantic Indexing) keywords to make content more natural.",
    "Include the target keyword in meta description, title tag, and image alt text.",
    "Focus on user intent and content quality rather than just keyword density.",
];

const GENERAL_IMPROVEMENTS: &[&str] = &[
    "Include related keywords and LSI terms.",
    "Ensure keyword placement in title, meta description, and first paragraph.",
    "Focus on semantic relevance and user intent.",
    "Add internal links with keyword-rich anchor text.",
];

/// Picks advisory text for analysis figures.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    thresholds: AdviceThresholds,
}

impl Advisor {
    /// Create an advisor with the given thresholds.
    pub fn new(thresholds: AdviceThresholds) -> Self {
        Advisor { thresholds }
    }

    /// Classify an unrounded density percentage.
    pub fn density_level(&self, density: f64) -> DensityLevel {
        if density < self.thresholds.low_density {
            DensityLevel::TooLow
        } else if density > self.thresholds.high_density {
            DensityLevel::TooHigh
        } else {
            DensityLevel::Optimal
        }
    }

    /// Suggestions for the writer.
    pub fn suggestions(
        &self,
        density: f64,
        occurrences: usize,
        total_words: usize,
        target_phrase: &str,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();

        match self.density_level(density) {
            DensityLevel::TooLow => {
                suggestions.push(format!(
                    "Keyword density is too low ({density:.2}%). Consider adding \"{target_phrase}\" naturally throughout the content."
                ));
                suggestions.push(
                    "Use the target keyword in headings, subheadings, and the first paragraph."
                        .to_string(),
                );
            }
            DensityLevel::TooHigh => {
                suggestions.push(format!(
                    "Keyword density is too high ({density:.2}%). This might be considered keyword stuffing by search engines."
                ));
                suggestions.push(
                    "Replace some keyword instances with synonyms or related terms.".to_string(),
                );
            }
            DensityLevel::Optimal => {
                suggestions.push(format!(
                    "Keyword density is within the optimal range ({density:.2}%)."
                ));
            }
        }

        if occurrences < self.thresholds.min_occurrences {
            suggestions
                .push("Consider using the target keyword at least 3-5 times in the content.".to_string());
        }

        if total_words < self.thresholds.min_words {
            suggestions.push(
                "Content is quite short. Consider expanding to at least 300-500 words for better SEO."
                    .to_string(),
            );
        }

        suggestions.extend(GENERAL_SUGGESTIONS.iter().map(|s| s.to_string()));
        suggestions
    }

    /// Concrete improvements, taking the final score into account.
    pub fn improvements(
        &self,
        density: f64,
        occurrences: usize,
        total_words: usize,
        seo_score: u8,
    ) -> Vec<String> {
        let mut improvements = Vec::new();

        if seo_score < self.thresholds.weak_score {
            improvements.push("Overall SEO score needs significant improvement.".to_string());
        }

        match self.density_level(density) {
            DensityLevel::TooLow => {
                improvements.push("Increase keyword usage naturally throughout the content.".to_string());
                improvements.push("Add the target keyword to H2 and H3 headings.".to_string());
            }
            DensityLevel::TooHigh => {
                improvements.push("Reduce keyword density to avoid over-optimization.".to_string());
                improvements.push("Replace some keyword instances with synonyms.".to_string());
            }
            DensityLevel::Optimal => {}
        }

        if total_words < self.thresholds.min_words {
            improvements.push("Expand content length to at least 300-500 words.".to_string());
            improvements.push("Add more detailed explanations and examples.".to_string());
        }

        if occurrences < self.thresholds.min_occurrences {
            improvements
                .push("Use the target keyword more frequently (aim for 3-7 times).".to_string());
        } else if occurrences > self.thresholds.max_occurrences {
            improvements.push("Reduce keyword frequency to appear more natural.".to_string());
        }

        improvements.extend(GENERAL_IMPROVEMENTS.iter().map(|s| s.to_string()));
        improvements
    }
}
