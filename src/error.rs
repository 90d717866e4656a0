//! Error types for version gating and the `kube-gate` command line.

use std::path::PathBuf;
use thiserror::Error;

/// A version string that could not be parsed.
///
/// The message quotes the input with Rust string escaping, so `1.0"` renders
/// as `could not parse "1.0\"" as version`; [`input`](Self::input) returns
/// it unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse {input:?} as version")]
pub struct VersionParseError {
    input: String,
    detail: String,
}

impl VersionParseError {
    pub(crate) fn new(input: &str, cause: &semver::Error) -> Self {
        Self {
            input: input.to_string(),
            detail: cause.to_string(),
        }
    }

    /// The rejected input, verbatim.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// What the semver grammar objected to, for diagnostics.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Errors surfaced by the command line layer.
#[derive(Debug, Error)]
pub enum GateError {
    #[error(transparent)]
    Version(#[from] VersionParseError),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GateError>;
