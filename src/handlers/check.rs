use crate::config::{Config, OutputFormat, ParseErrorPolicy};
use crate::formatter;
use crate::gates::{self, Feature, FeatureReport};

/// Options for the `check` command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Version string as reported by the cluster
    pub version: String,
    /// Only answer a single feature question
    pub feature: Option<Feature>,
    /// Output format, falls back to the configuration file
    pub format: Option<OutputFormat>,
    /// Parse error policy, falls back to the configuration file
    pub on_parse_error: Option<ParseErrorPolicy>,
}

pub fn handle_check(options: CheckOptions, config: &Config) -> crate::Result<String> {
    let policy = options
        .on_parse_error
        .unwrap_or(config.evaluation.on_parse_error);
    let format = options.format.unwrap_or(config.output.format);

    log::debug!("Evaluating feature gates for {:?}", options.version);

    let report = match gates::evaluate(&options.version) {
        Ok(report) => report,
        Err(e) => match policy {
            ParseErrorPolicy::Fail => return Err(e.into()),
            ParseErrorPolicy::AssumeOldest => {
                log::warn!("{}, assuming a cluster older than every threshold", e);
                FeatureReport::oldest_known()
            }
        },
    };

    formatter::format_report(&report, options.feature, format)
}
