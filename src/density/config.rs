//! Configuration for keyword density analysis.
//!
//! Everything the engine treats as a constant lives here: the stop-word list,
//! the keyword length threshold, the related-keyword mode, the phrase counting
//! method, the score bands and the advice thresholds. A [`DensityConfig`] is
//! immutable once handed to [`DensityAnalyzer`](super::DensityAnalyzer).
//!
//! All types deserialize with defaults, so a JSON file only has to name what
//! it changes:
//!
//! ```
//! use seokit::density::config::{DensityConfig, RelatedKeywordMode};
//!
//! let config: DensityConfig = serde_json::from_str(r#"{ "mode": "basic" }"#).unwrap();
//! assert_eq!(config.mode, RelatedKeywordMode::Basic);
//! assert_eq!(config.min_keyword_length, 3);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS;
use crate::error::{Result, SeokitError};

/// How the related-keyword list is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelatedKeywordMode {
    /// Plain density tool: top 10, the target keyword itself is skipped.
    Basic,

    /// SEO audit: top 15, nothing is skipped by token identity.
    #[default]
    Extended,
}

impl RelatedKeywordMode {
    /// Number of related keywords reported in this mode.
    pub fn limit(&self) -> usize {
        match self {
            RelatedKeywordMode::Basic => 10,
            RelatedKeywordMode::Extended => 15,
        }
    }

    /// Whether tokens equal to the target phrase are left out of the ranking.
    pub fn excludes_target(&self) -> bool {
        matches!(self, RelatedKeywordMode::Basic)
    }
}

/// How occurrences of the target phrase are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseCounting {
    /// Exact substring matches plus, for multi-word phrases,
    /// `floor(word_matches / phrase_words)` for every phrase word.
    ///
    /// An exact match is credited once as a substring and again through its
    /// individual words.
    #[default]
    Combined,

    /// Exact substring matches only.
    ExactOnly,
}

/// One scoring tier: a value range and the points awarded inside it.
///
/// The lower bound is inclusive unless `min_exclusive` is set; the upper
/// bound, when present, is inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub min: f64,
    #[serde(default)]
    pub min_exclusive: bool,
    #[serde(default)]
    pub max: Option<f64>,
    pub points: u8,
}

impl Tier {
    /// Tier covering `[min, max]`.
    pub fn between(min: f64, max: f64, points: u8) -> Self {
        Tier {
            min,
            min_exclusive: false,
            max: Some(max),
            points,
        }
    }

    /// Tier covering `[min, ∞)`.
    pub fn at_least(min: f64, points: u8) -> Self {
        Tier {
            min,
            min_exclusive: false,
            max: None,
            points,
        }
    }

    /// Tier covering `(min, ∞)`.
    pub fn above(min: f64, points: u8) -> Self {
        Tier {
            min,
            min_exclusive: true,
            max: None,
            points,
        }
    }

    /// Tier covering `(min, max]`.
    pub fn above_up_to(min: f64, max: f64, points: u8) -> Self {
        Tier {
            min,
            min_exclusive: true,
            max: Some(max),
            points,
        }
    }

    /// Check whether `value` falls inside this tier.
    pub fn contains(&self, value: f64) -> bool {
        let above_min = if self.min_exclusive {
            value > self.min
        } else {
            value >= self.min
        };
        above_min && self.max.is_none_or(|max| value <= max)
    }
}

/// An ordered list of tiers; the first tier containing a value decides its
/// points, and a value outside every tier scores zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Band {
    pub tiers: Vec<Tier>,
}

impl Band {
    /// Create a band from tiers, most rewarding first.
    pub fn new(tiers: Vec<Tier>) -> Self {
        Band { tiers }
    }

    /// Points awarded for `value`.
    pub fn points(&self, value: f64) -> u8 {
        self.tiers
            .iter()
            .find(|tier| tier.contains(value))
            .map_or(0, |tier| tier.points)
    }

    /// Highest number of points this band can award.
    pub fn max_points(&self) -> u8 {
        self.tiers.iter().map(|tier| tier.points).max().unwrap_or(0)
    }

    fn validate(&self, band: &str) -> Result<()> {
        for tier in &self.tiers {
            if !tier.min.is_finite() {
                return Err(SeokitError::invalid_config(format!(
                    "{band} band has a non-finite lower bound"
                )));
            }
            if let Some(max) = tier.max
                && !(max >= tier.min)
            {
                return Err(SeokitError::invalid_config(format!(
                    "{band} band tier [{}, {max}] is empty",
                    tier.min
                )));
            }
            if tier.points > 100 {
                return Err(SeokitError::invalid_config(format!(
                    "{band} band awards {} points, more than the score ceiling",
                    tier.points
                )));
            }
        }
        Ok(())
    }
}

/// The four score bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Keyword density in percent (max 30).
    pub density: Band,

    /// Number of phrase occurrences (max 20).
    pub frequency: Band,

    /// Total number of words (max 20).
    pub length: Band,

    /// Number of related keywords reported (max 30).
    pub diversity: Band,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            density: Band::new(vec![
                Tier::between(0.5, 2.5, 30),
                Tier::between(0.3, 3.5, 20),
                Tier::above_up_to(0.0, 5.0, 10),
            ]),
            frequency: Band::new(vec![
                Tier::between(3.0, 10.0, 20),
                Tier::between(1.0, 15.0, 15),
                Tier::above(0.0, 5),
            ]),
            length: Band::new(vec![
                Tier::at_least(500.0, 20),
                Tier::at_least(300.0, 15),
                Tier::at_least(150.0, 10),
                Tier::at_least(50.0, 5),
            ]),
            diversity: Band::new(vec![
                Tier::at_least(15.0, 30),
                Tier::at_least(10.0, 20),
                Tier::at_least(5.0, 15),
                Tier::at_least(3.0, 10),
            ]),
        }
    }
}

/// Thresholds that select advisory text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceThresholds {
    /// Density below this (percent) is "too low".
    pub low_density: f64,

    /// Density above this (percent) is "too high".
    pub high_density: f64,

    /// Fewer occurrences than this asks for more keyword usage.
    pub min_occurrences: usize,

    /// More occurrences than this asks for fewer.
    pub max_occurrences: usize,

    /// Fewer words than this asks for longer content.
    pub min_words: usize,

    /// A score below this flags the content as needing significant work.
    pub weak_score: u8,
}

impl Default for AdviceThresholds {
    fn default() -> Self {
        AdviceThresholds {
            low_density: 0.5,
            high_density: 3.0,
            min_occurrences: 3,
            max_occurrences: 15,
            min_words: 300,
            weak_score: 50,
        }
    }
}

/// Configuration for the keyword density engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
    /// Words never reported as related keywords.
    pub stop_words: Vec<String>,

    /// Related keywords must be longer than this many characters.
    pub min_keyword_length: usize,

    /// Related-keyword mode (limit and target exclusion).
    pub mode: RelatedKeywordMode,

    /// Phrase counting method.
    pub phrase_counting: PhraseCounting,

    /// Score bands.
    pub scoring: ScoringConfig,

    /// Advice thresholds.
    pub advice: AdviceThresholds,
}

impl Default for DensityConfig {
    fn default() -> Self {
        DensityConfig {
            stop_words: DEFAULT_ENGLISH_STOP_WORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_keyword_length: 3,
            mode: RelatedKeywordMode::default(),
            phrase_counting: PhraseCounting::default(),
            scoring: ScoringConfig::default(),
            advice: AdviceThresholds::default(),
        }
    }
}

impl DensityConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: DensityConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the stop-word list.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the keyword length threshold.
    pub fn with_min_keyword_length(mut self, min_keyword_length: usize) -> Self {
        self.min_keyword_length = min_keyword_length;
        self
    }

    /// Set the related-keyword mode.
    pub fn with_mode(mut self, mode: RelatedKeywordMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the phrase counting method.
    pub fn with_phrase_counting(mut self, phrase_counting: PhraseCounting) -> Self {
        self.phrase_counting = phrase_counting;
        self
    }

    /// Replace the score bands.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Replace the advice thresholds.
    pub fn with_advice(mut self, advice: AdviceThresholds) -> Self {
        self.advice = advice;
        self
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<()> {
        self.scoring.density.validate("density")?;
        self.scoring.frequency.validate("frequency")?;
        self.scoring.length.validate("length")?;
        self.scoring.diversity.validate("diversity")?;

        let advice = &self.advice;
        if !(advice.low_density.is_finite() && advice.high_density.is_finite()) {
            return Err(SeokitError::invalid_config(
                "advice density thresholds must be finite",
            ));
        }
        if advice.low_density > advice.high_density {
            return Err(SeokitError::invalid_config(format!(
                "low density threshold {} is above high density threshold {}",
                advice.low_density, advice.high_density
            )));
        }
        if advice.min_occurrences > advice.max_occurrences {
            return Err(SeokitError::invalid_config(format!(
                "minimum occurrences {} exceed maximum occurrences {}",
                advice.min_occurrences, advice.max_occurrences
            )));
        }
        if advice.weak_score > 100 {
            return Err(SeokitError::invalid_config(
                "weak score threshold must be within 0..=100",
            ));
        }
        Ok(())
    }
}
