//! Analyzers combine char filters, a tokenizer and token filters into one
//! text processing step.

pub mod analyzer;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
