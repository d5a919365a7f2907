//! Command implementations for the seokit CLI.

use std::path::Path;
use std::time::Instant;

use log::{info, warn};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::density::config::{DensityConfig, PhraseCounting};
use crate::density::engine::DensityAnalyzer;
use crate::density::result::DensityRequest;
use crate::error::{Result, SeokitError};
use crate::extract::source::{ContentLoader, ContentSource};

/// Execute a CLI command.
pub fn execute_command(args: SeokitArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => {
            let report = run_analyze(analyze_args, &args)?;
            output_analysis(&report, &args)
        }
        Command::Batch(batch_args) => {
            let report = run_batch(batch_args, &args)?;
            output_batch(&report, &args)?;
            if report.succeeded == 0 {
                return Err(SeokitError::content_unavailable(
                    "no file in the batch could be analyzed",
                ));
            }
            Ok(())
        }
    }
}

/// Load the configuration file (if any) and apply command line overrides.
pub fn load_config(options: &AnalysisOptions, cli_args: &SeokitArgs) -> Result<DensityConfig> {
    let mut config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            DensityConfig::from_file(path)?
        }
        None => DensityConfig::default(),
    };

    if let Some(mode) = options.mode {
        config = config.with_mode(mode.into());
    }
    if options.exact_only {
        config = config.with_phrase_counting(PhraseCounting::ExactOnly);
    }
    Ok(config)
}

fn apply_overrides(mut request: DensityRequest, options: &AnalysisOptions) -> DensityRequest {
    if let Some(limit) = options.limit {
        request = request.with_related_keyword_limit(limit);
    }
    if let Some(exclude) = options.exclude_target_override() {
        request = request.with_exclude_target(exclude);
    }
    request
}

/// Analyze a single document.
pub fn run_analyze(args: &AnalyzeArgs, cli_args: &SeokitArgs) -> Result<AnalysisReport> {
    let analyzer = DensityAnalyzer::new(load_config(&args.analysis, cli_args)?)?;
    let loader = ContentLoader::new()?;

    let source = match (&args.text, &args.file) {
        (Some(text), _) => ContentSource::Inline(text.clone()),
        (None, Some(path)) => ContentSource::File(path.clone()),
        (None, None) => ContentSource::Stdin,
    };
    info!("Keyword density analysis for {:?} in {}", args.keyword, source.describe());

    let start_time = Instant::now();
    let request = loader.request(&args.keyword, &source, args.analysis.input_format.into())?;
    let request = apply_overrides(request, &args.analysis);
    let result = analyzer.analyze_request(&request)?;

    info!(
        "Analysis completed in {}ms. Density: {}%",
        start_time.elapsed().as_millis(),
        result.density
    );

    Ok(AnalysisReport {
        keyword: args.keyword.clone(),
        source: source.describe(),
        result,
    })
}

/// Analyze several files in parallel.
///
/// Entries come back in the order the files were given. A file that cannot be
/// read or has no content becomes a failed entry; the rest of the batch still
/// runs.
pub fn run_batch(args: &BatchArgs, cli_args: &SeokitArgs) -> Result<BatchReport> {
    if args.keyword.trim().is_empty() {
        return Err(SeokitError::invalid_argument("Target keyword is required"));
    }

    let analyzer = DensityAnalyzer::new(load_config(&args.analysis, cli_args)?)?;
    let loader = ContentLoader::new()?;
    let start_time = Instant::now();

    let entries: Vec<BatchEntry> = args
        .files
        .par_iter()
        .map(|path| analyze_file(&analyzer, &loader, path, args))
        .collect();

    let succeeded = entries.iter().filter(|entry| entry.result.is_some()).count();
    let failed = entries.len() - succeeded;
    if failed > 0 {
        warn!("{failed} of {} files could not be analyzed", entries.len());
    }

    Ok(BatchReport {
        keyword: args.keyword.clone(),
        entries,
        succeeded,
        failed,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

fn analyze_file(
    analyzer: &DensityAnalyzer,
    loader: &ContentLoader,
    path: &Path,
    args: &BatchArgs,
) -> BatchEntry {
    let source = ContentSource::File(path.to_path_buf());
    let outcome = loader
        .request(&args.keyword, &source, args.analysis.input_format.into())
        .map(|request| apply_overrides(request, &args.analysis))
        .and_then(|request| analyzer.analyze_request(&request));

    match outcome {
        Ok(result) => BatchEntry {
            source: source.describe(),
            result: Some(result),
            error: None,
        },
        Err(e) => {
            warn!("Skipping {}: {e}", source.describe());
            BatchEntry {
                source: source.describe(),
                result: None,
                error: Some(e.to_string()),
            }
        }
    }
}
