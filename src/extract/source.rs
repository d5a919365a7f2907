//! Obtaining the text to analyze.
//!
//! A [`ContentLoader`] reads a [`ContentSource`], runs the matching
//! extractor and hands back text that is safe to analyze. Missing keywords
//! and sources that yield no content are reported as errors here, so the
//! density engine is only ever called with real input.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{HtmlTextExtractor, PlainTextExtractor, TextExtractor};
use crate::density::result::DensityRequest;
use crate::error::{Result, SeokitError};

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Text passed directly by the caller.
    Inline(String),
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl ContentSource {
    /// Short description for logs and error messages.
    pub fn describe(&self) -> String {
        match self {
            ContentSource::Inline(_) => "inline content".to_string(),
            ContentSource::File(path) => path.display().to_string(),
            ContentSource::Stdin => "standard input".to_string(),
        }
    }
}

/// How the raw document should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// Plain text.
    Text,
    /// HTML markup.
    Html,
    /// Decide from the content itself.
    #[default]
    Auto,
}

/// Reads sources and extracts their visible text.
#[derive(Clone, Debug)]
pub struct ContentLoader {
    html: HtmlTextExtractor,
    plain: PlainTextExtractor,
}

impl ContentLoader {
    /// Create a loader with the default extractors.
    pub fn new() -> Result<Self> {
        Ok(ContentLoader {
            html: HtmlTextExtractor::new()?,
            plain: PlainTextExtractor::new(),
        })
    }

    /// Create a loader with a custom HTML extractor.
    pub fn with_html_extractor(html: HtmlTextExtractor) -> Self {
        ContentLoader {
            html,
            plain: PlainTextExtractor::new(),
        }
    }

    /// Whether `raw` looks like an HTML document or fragment.
    pub fn looks_like_html(raw: &str) -> bool {
        let head = raw.trim_start();
        let prefix: String = head.chars().take(15).collect::<String>().to_ascii_lowercase();
        prefix.starts_with("<!doctype")
            || prefix.starts_with("<html")
            || (head.starts_with('<') && head.contains("</"))
    }

    /// Read the raw bytes of a source as text.
    pub fn read_raw(&self, source: &ContentSource) -> Result<String> {
        match source {
            ContentSource::Inline(text) => Ok(text.clone()),
            ContentSource::File(path) => Ok(fs::read_to_string(path)?),
            ContentSource::Stdin => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }

    /// Turn raw content into analyzable text.
    ///
    /// Fails with [`SeokitError::ContentUnavailable`] when nothing is left.
    pub fn extract(&self, raw: &str, format: ContentFormat, origin: &str) -> Result<String> {
        let extractor: &dyn TextExtractor = match format {
            ContentFormat::Html => &self.html,
            ContentFormat::Text => &self.plain,
            ContentFormat::Auto if Self::looks_like_html(raw) => &self.html,
            ContentFormat::Auto => &self.plain,
        };

        let text = extractor.extract_visible_text(raw)?;
        debug!(
            "extracted {} bytes of text from {} with the {} extractor",
            text.len(),
            origin,
            extractor.name()
        );

        if text.trim().is_empty() {
            warn!("no content extracted from {origin}");
            return Err(SeokitError::content_unavailable(format!(
                "Could not extract content from {origin}"
            )));
        }
        Ok(text)
    }

    /// Read and extract a source.
    pub fn load(&self, source: &ContentSource, format: ContentFormat) -> Result<String> {
        let raw = self.read_raw(source)?;
        self.extract(&raw, format, &source.describe())
    }

    /// Build an analysis request, validating the keyword before any input is read.
    pub fn request(
        &self,
        target_phrase: &str,
        source: &ContentSource,
        format: ContentFormat,
    ) -> Result<DensityRequest> {
        if target_phrase.trim().is_empty() {
            return Err(SeokitError::invalid_argument("Target keyword is required"));
        }
        let text = self.load(source, format)?;
        Ok(DensityRequest::new(text, target_phrase))
    }
}
