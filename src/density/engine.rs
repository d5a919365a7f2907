//! The density analyzer.

use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::token::Token;
use crate::analysis::token_filter::{ExcludeFilter, MinLengthFilter, StopFilter};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::density::advice::Advisor;
use crate::density::config::DensityConfig;
use crate::density::frequency::FrequencyTable;
use crate::density::phrase::PhraseCounter;
use crate::density::result::{AnalysisResult, DensityRequest};
use crate::density::score::Scorer;
use crate::density::{raw_percentage, round2};
use crate::error::Result;

/// Computes keyword density, related keywords and the SEO score.
///
/// The analyzer holds only immutable state and can be shared freely between
/// threads; every call allocates its own token list and frequency table.
#[derive(Clone)]
pub struct DensityAnalyzer {
    config: Arc<DensityConfig>,
    normalizer: TextNormalizer,
    tokenizer: Arc<dyn Tokenizer>,
    related: PipelineAnalyzer,
    phrase_counter: PhraseCounter,
    scorer: Scorer,
    advisor: Advisor,
}

impl DensityAnalyzer {
    /// Create an analyzer from a configuration.
    pub fn new(config: DensityConfig) -> Result<Self> {
        config.validate()?;

        let tokenizer: Arc<dyn Tokenizer> = Arc::new(WhitespaceTokenizer::new());
        let stop_filter = StopFilter::from_words(
            config.stop_words.iter().map(|word| word.to_lowercase()),
        );
        let related = PipelineAnalyzer::new(Arc::clone(&tokenizer))
            .add_filter(Arc::new(MinLengthFilter::new(config.min_keyword_length)))
            .add_filter(Arc::new(stop_filter))
            .with_name("related_keywords");

        Ok(DensityAnalyzer {
            normalizer: TextNormalizer::new()?,
            tokenizer,
            related,
            phrase_counter: PhraseCounter::new(config.phrase_counting),
            scorer: Scorer::new(config.scoring.clone()),
            advisor: Advisor::new(config.advice.clone()),
            config: Arc::new(config),
        })
    }

    /// Create an analyzer with the default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(DensityConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &DensityConfig {
        &self.config
    }

    /// Get the normalizer shared by documents and target phrases.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Analyze `text` for `target_phrase` using the configured mode.
    pub fn analyze(&self, text: &str, target_phrase: &str) -> Result<AnalysisResult> {
        self.run(text, target_phrase, None, None)
    }

    /// Analyze a request, honouring its per-call overrides.
    pub fn analyze_request(&self, request: &DensityRequest) -> Result<AnalysisResult> {
        self.run(
            &request.text,
            &request.target_phrase,
            request.related_keyword_limit,
            request.exclude_target_from_related,
        )
    }

    fn run(
        &self,
        text: &str,
        target_phrase: &str,
        limit: Option<usize>,
        exclude_target: Option<bool>,
    ) -> Result<AnalysisResult> {
        let limit = limit.unwrap_or_else(|| self.config.mode.limit());
        let exclude_target = exclude_target.unwrap_or_else(|| self.config.mode.excludes_target());

        let normalized = self.normalizer.normalize(text);
        let tokens: Vec<Token> = self.tokenizer.tokenize(&normalized)?.collect();
        let total_words = tokens.len();

        let phrase = self.normalizer.normalize(target_phrase);
        let matches = self.phrase_counter.count(&normalized, &tokens, &phrase);
        let keyword_count = matches.total();
        let density = raw_percentage(keyword_count, total_words);

        let candidates = if exclude_target && !phrase.is_empty() {
            self.related
                .clone()
                .add_filter(Arc::new(ExcludeFilter::new(phrase.as_str())))
                .analyze(&normalized)?
        } else {
            self.related.analyze(&normalized)?
        };
        let table = FrequencyTable::from_tokens(candidates);
        let related_keywords = table.top(limit, total_words);

        let score_breakdown =
            self.scorer
                .score(density, keyword_count, total_words, related_keywords.len());
        let seo_score = score_breakdown.total();

        debug!(
            "analyzed {} words for {:?}: {} exact + {} distributed matches, density {:.2}%, score {}",
            total_words, phrase, matches.exact, matches.distributed, density, seo_score
        );

        Ok(AnalysisResult {
            density: round2(density),
            total_words,
            keyword_count,
            suggestions: self.advisor.suggestions(
                density,
                keyword_count,
                total_words,
                target_phrase.trim(),
            ),
            improvements: self.advisor.improvements(
                density,
                keyword_count,
                total_words,
                seo_score,
            ),
            related_keywords,
            seo_score,
            score_breakdown,
        })
    }
}
