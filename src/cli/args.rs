//! Command line argument parsing for the seokit CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::density::config::RelatedKeywordMode;
use crate::extract::source::ContentFormat;

/// seokit - keyword density and on-page SEO text metrics
#[derive(Parser, Debug, Clone)]
#[command(name = "seokit")]
#[command(about = "Keyword density and on-page SEO text metrics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SeokitArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Density configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SEOKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SeokitArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze keyword density of one document
    Analyze(AnalyzeArgs),

    /// Analyze several files for the same keyword
    Batch(BatchArgs),
}

/// Arguments for analyzing a single document
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Target keyword or phrase
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Document text (reads standard input when neither --text nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Document file (text or HTML)
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub analysis: AnalysisOptions,
}

/// Arguments for batch analysis
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Target keyword or phrase
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Document files (text or HTML)
    #[arg(value_name = "FILES", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub analysis: AnalysisOptions,
}

/// Options shared by the analysis commands
#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// How to interpret the input
    #[arg(short = 'i', long = "input-format", default_value = "auto")]
    pub input_format: InputFormat,

    /// Related keyword mode (overrides the configuration file)
    #[arg(short, long)]
    pub mode: Option<KeywordMode>,

    /// Number of related keywords to report
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Leave the target keyword out of related keywords
    #[arg(long)]
    pub exclude_target: bool,

    /// Keep the target keyword among related keywords
    #[arg(long, conflicts_with = "exclude_target")]
    pub include_target: bool,

    /// Count exact phrase matches only
    #[arg(long)]
    pub exact_only: bool,
}

impl AnalysisOptions {
    /// Per-call target exclusion override, if any flag was given.
    pub fn exclude_target_override(&self) -> Option<bool> {
        if self.exclude_target {
            Some(true)
        } else if self.include_target {
            Some(false)
        } else {
            None
        }
    }
}

/// Related keyword modes available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMode {
    /// Top 10, target keyword excluded
    Basic,
    /// Top 15, nothing excluded (SEO audit)
    Extended,
}

impl From<KeywordMode> for RelatedKeywordMode {
    fn from(mode: KeywordMode) -> Self {
        match mode {
            KeywordMode::Basic => RelatedKeywordMode::Basic,
            KeywordMode::Extended => RelatedKeywordMode::Extended,
        }
    }
}

/// Input interpretation
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Plain text
    Text,
    /// HTML markup
    Html,
    /// Detect from the content
    #[default]
    Auto,
}

impl From<InputFormat> for ContentFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Text => ContentFormat::Text,
            InputFormat::Html => ContentFormat::Html,
            InputFormat::Auto => ContentFormat::Auto,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
