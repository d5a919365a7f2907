//! Composite SEO score.
//!
//! The score is the sum of four independently capped bands (density fit,
//! frequency fit, content length, keyword diversity), clamped to `0..=100`.

use serde::{Deserialize, Serialize};

use crate::density::config::ScoringConfig;

/// Highest score a document can reach.
pub const MAX_SCORE: u8 = 100;

/// Points awarded by each band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub density: u8,
    pub frequency: u8,
    pub length: u8,
    pub diversity: u8,
}

impl ScoreBreakdown {
    /// Sum of the bands, clamped to [`MAX_SCORE`].
    pub fn total(&self) -> u8 {
        let sum = u16::from(self.density)
            + u16::from(self.frequency)
            + u16::from(self.length)
            + u16::from(self.diversity);
        sum.min(u16::from(MAX_SCORE)) as u8
    }
}

/// Scores analysis figures against the configured bands.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    /// Create a scorer for the given bands.
    pub fn new(config: ScoringConfig) -> Self {
        Scorer { config }
    }

    /// Score a document.
    ///
    /// `density` is the unrounded percentage, `related_keywords` the size of
    /// the reported related-keyword list.
    pub fn score(
        &self,
        density: f64,
        occurrences: usize,
        total_words: usize,
        related_keywords: usize,
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            density: self.config.density.points(density),
            frequency: self.config.frequency.points(occurrences as f64),
            length: self.config.length.points(total_words as f64),
            diversity: self.config.diversity.points(related_keywords as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::config::{Band, Tier};

    #[test]
    fn test_density_band() {
        let scorer = Scorer::default();
        assert_eq!(scorer.score(0.5, 0, 0, 0).density, 30);
        assert_eq!(scorer.score(2.5, 0, 0, 0).density, 30);
        assert_eq!(scorer.score(0.3, 0, 0, 0).density, 20);
        assert_eq!(scorer.score(3.0, 0, 0, 0).density, 20);
        assert_eq!(scorer.score(3.5, 0, 0, 0).density, 20);
        assert_eq!(scorer.score(0.1, 0, 0, 0).density, 10);
        assert_eq!(scorer.score(5.0, 0, 0, 0).density, 10);
        assert_eq!(scorer.score(5.01, 0, 0, 0).density, 0);
        assert_eq!(scorer.score(0.0, 0, 0, 0).density, 0);
    }

    #[test]
    fn test_frequency_band() {
        let scorer = Scorer::default();
        assert_eq!(scorer.score(0.0, 0, 0, 0).frequency, 0);
        assert_eq!(scorer.score(0.0, 1, 0, 0).frequency, 15);
        assert_eq!(scorer.score(0.0, 2, 0, 0).frequency, 15);
        assert_eq!(scorer.score(0.0, 3, 0, 0).frequency, 20);
        assert_eq!(scorer.score(0.0, 10, 0, 0).frequency, 20);
        assert_eq!(scorer.score(0.0, 11, 0, 0).frequency, 15);
        assert_eq!(scorer.score(0.0, 15, 0, 0).frequency, 15);
        assert_eq!(scorer.score(0.0, 16, 0, 0).frequency, 5);
    }

    #[test]
    fn test_length_band() {
        let scorer = Scorer::default();
        assert_eq!(scorer.score(0.0, 0, 49, 0).length, 0);
        assert_eq!(scorer.score(0.0, 0, 50, 0).length, 5);
        assert_eq!(scorer.score(0.0, 0, 150, 0).length, 10);
        assert_eq!(scorer.score(0.0, 0, 299, 0).length, 10);
        assert_eq!(scorer.score(0.0, 0, 300, 0).length, 15);
        assert_eq!(scorer.score(0.0, 0, 500, 0).length, 20);
    }

    #[test]
    fn test_diversity_band() {
        let scorer = Scorer::default();
        assert_eq!(scorer.score(0.0, 0, 0, 2).diversity, 0);
        assert_eq!(scorer.score(0.0, 0, 0, 3).diversity, 10);
        assert_eq!(scorer.score(0.0, 0, 0, 5).diversity, 15);
        assert_eq!(scorer.score(0.0, 0, 0, 10).diversity, 20);
        assert_eq!(scorer.score(0.0, 0, 0, 15).diversity, 30);
    }

    #[test]
    fn test_total_is_clamped() {
        let breakdown = Scorer::default().score(1.0, 5, 600, 15);
        assert_eq!(breakdown.total(), 100);

        let generous = ScoringConfig {
            length: Band::new(vec![Tier::at_least(0.0, 90)]),
            ..ScoringConfig::default()
        };
        let breakdown = Scorer::new(generous).score(1.0, 5, 10, 15);
        assert_eq!(breakdown.length, 90);
        assert_eq!(breakdown.total(), 100);
    }

    #[test]
    fn test_zero_document_scores_zero() {
        assert_eq!(Scorer::default().score(0.0, 0, 0, 0).total(), 0);
    }
}
