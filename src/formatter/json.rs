//! JSON formatter for gate evaluations.

use crate::error::Result;
use crate::gates::{Feature, FeatureReport, Threshold};
use serde::Serialize;

/// JSON output structure for a single feature question.
#[derive(Serialize)]
struct JsonFeature<'a> {
    version: Option<&'a str>,
    feature: Feature,
    threshold: String,
    enabled: bool,
}

/// JSON output structure for a threshold table row.
#[derive(Serialize)]
struct JsonThreshold {
    name: &'static str,
    version: String,
    description: &'static str,
}

pub fn format_report(report: &FeatureReport, feature: Option<Feature>) -> Result<String> {
    let output = match feature {
        Some(feature) => serde_json::to_string_pretty(&JsonFeature {
            version: report.version.as_deref(),
            feature,
            threshold: feature.threshold().to_string(),
            enabled: report.get(feature),
        })?,
        None => serde_json::to_string_pretty(report)?,
    };
    Ok(output)
}

pub fn format_thresholds(thresholds: &[&Threshold]) -> Result<String> {
    let rows: Vec<JsonThreshold> = thresholds
        .iter()
        .map(|t| JsonThreshold {
            name: t.name,
            version: t.to_string(),
            description: t.description,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
