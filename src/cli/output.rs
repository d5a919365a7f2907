//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SeokitArgs};
use crate::density::result::AnalysisResult;
use crate::error::Result;

/// Result structure for a single analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub keyword: String,
    pub source: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// One file of a batch run.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEntry {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result structure for batch analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchReport {
    pub keyword: String,
    pub entries: Vec<BatchEntry>,
    pub succeeded: usize,
    pub failed: usize,
    pub duration_ms: u64,
}

/// Output an analysis report in the requested format.
pub fn output_analysis(report: &AnalysisReport, args: &SeokitArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_analysis_human(report, args.verbosity()));
            Ok(())
        }
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output a batch report in the requested format.
pub fn output_batch(report: &BatchReport, args: &SeokitArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_batch_human(report, args.verbosity()));
            Ok(())
        }
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SeokitArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Render an analysis report for the terminal.
///
/// At verbosity 0 only the headline numbers are shown.
pub fn render_analysis_human(report: &AnalysisReport, verbosity: u8) -> String {
    let mut lines = vec![
        format!("Keyword Density: \"{}\" in {}", report.keyword, report.source),
        "══════════════════════════════".to_string(),
    ];
    lines.extend(result_lines(&report.result, verbosity));
    lines.push(String::new());
    lines.join("\n")
}

/// Render a batch report for the terminal.
pub fn render_batch_human(report: &BatchReport, verbosity: u8) -> String {
    let mut lines = vec![
        format!("Batch Keyword Density: \"{}\"", report.keyword),
        "══════════════════════════════".to_string(),
    ];

    for entry in &report.entries {
        lines.push(String::new());
        lines.push(entry.source.clone());
        lines.push("─────────────".to_string());
        match (&entry.result, &entry.error) {
            (Some(result), _) => lines.extend(result_lines(result, verbosity.min(1))),
            (None, Some(error)) => lines.push(format!("Error: {error}")),
            (None, None) => lines.push("Error: no result".to_string()),
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Analyzed: {} succeeded, {} failed in {}ms",
        report.succeeded, report.failed, report.duration_ms
    ));
    lines.push(String::new());
    lines.join("\n")
}

fn result_lines(result: &AnalysisResult, verbosity: u8) -> Vec<String> {
    let mut lines = vec![
        format!("Density: {:.2}%", result.density),
        format!("Occurrences: {}", result.keyword_count),
        format!("Total words: {}", result.total_words),
        format!("SEO score: {}/100", result.seo_score),
    ];
    if verbosity == 0 {
        return lines;
    }

    let breakdown = &result.score_breakdown;
    lines.push(format!(
        "  density {} | frequency {} | length {} | diversity {}",
        breakdown.density, breakdown.frequency, breakdown.length, breakdown.diversity
    ));

    if !result.related_keywords.is_empty() {
        lines.push(String::new());
        lines.push("Related keywords:".to_string());
        let width = result
            .related_keywords
            .iter()
            .map(|k| k.keyword.chars().count())
            .max()
            .unwrap_or(0);
        for keyword in &result.related_keywords {
            lines.push(format!(
                "  {:<width$}  {:>5}  {:>6.2}%",
                keyword.keyword, keyword.count, keyword.density
            ));
        }
    }

    if verbosity >= 2 {
        lines.extend(list_section("Suggestions:", &result.suggestions));
        lines.extend(list_section("Improvements:", &result.improvements));
    }
    lines
}

fn list_section(title: &str, items: &[String]) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), title.to_string()];
    lines.extend(items.iter().map(|item| format!("  - {item}")));
    lines
}
