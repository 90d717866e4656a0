//! Output formatters for gate evaluations.
//!
//! - Table: human-readable with colors
//! - JSON: machine-readable

pub mod json;
pub mod table;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::gates::{Feature, FeatureReport, Threshold};

/// Format a feature report, optionally narrowed to one feature.
pub fn format_report(
    report: &FeatureReport,
    feature: Option<Feature>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_report(report, feature),
        OutputFormat::Table => Ok(table::format_report(report, feature)),
    }
}

/// Format the threshold table.
pub fn format_thresholds(thresholds: &[&Threshold], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_thresholds(thresholds),
        OutputFormat::Table => Ok(table::format_thresholds(thresholds)),
    }
}
