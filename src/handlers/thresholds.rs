use crate::config::{Config, OutputFormat};
use crate::formatter;
use crate::gates;

pub fn handle_thresholds(format: Option<OutputFormat>, config: &Config) -> crate::Result<String> {
    let format = format.unwrap_or(config.output.format);
    formatter::format_thresholds(gates::thresholds(), format)
}
