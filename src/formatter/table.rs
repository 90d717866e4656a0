//! Human-readable formatter for gate evaluations.

use crate::gates::{Feature, FeatureReport, Threshold};
use colored::Colorize;

/// Format a feature report as an aligned table.
pub fn format_report(report: &FeatureReport, feature: Option<Feature>) -> String {
    let mut output = String::new();

    match &report.version {
        Some(version) => {
            output.push_str(&format!("{} {}", "Kubernetes".bold(), version.as_str().bold()));
            if report.pre_release {
                output.push_str(&format!(" {}", "(pre-release)".dimmed()));
            }
            output.push('\n');
        }
        None => output.push_str(&format!(
            "{}\n",
            "Kubernetes version unknown, assuming oldest behavior".yellow()
        )),
    }

    let features: Vec<Feature> = match feature {
        Some(feature) => vec![feature],
        None => Feature::ALL.to_vec(),
    };
    let width = features.iter().map(|f| f.name().len()).max().unwrap_or(0);

    for (i, feature) in features.iter().enumerate() {
        let branch = if i + 1 == features.len() { "└──" } else { "├──" };
        let value = if report.get(*feature) {
            "yes".green()
        } else {
            "no".red()
        };
        output.push_str(&format!(
            "{} {:<width$}  {:<3}  {}\n",
            branch,
            feature.name(),
            value,
            format!("threshold {}", feature.threshold()).as_str().dimmed(),
            width = width
        ));
    }

    output
}

/// Format the threshold table, one row per threshold.
pub fn format_thresholds(thresholds: &[&Threshold]) -> String {
    let width = thresholds.iter().map(|t| t.name.len()).max().unwrap_or(0);
    thresholds
        .iter()
        .map(|t| {
            format!(
                "{:<width$}  {:<16}  {}",
                t.name.bold(),
                t.to_string(),
                t.description,
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
