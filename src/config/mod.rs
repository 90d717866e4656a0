pub mod types;

use crate::error::{GateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, EvaluationConfig, OutputConfig, OutputFormat, ParseErrorPolicy};

const CONFIG_FILE_NAME: &str = ".kubegate.toml";

/// Get the global config file path (~/.kubegate.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (dir/.kubegate.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load configuration for the current process.
///
/// An explicit path must exist and parse. Otherwise the local file in the
/// current directory is tried, then the global one, then defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let mut candidates = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(local_config_path(&cwd));
    }
    candidates.extend(global_config_path());

    Ok(discover_config(&candidates))
}

/// Return the first candidate that exists and parses, or defaults.
///
/// Broken discovered files are skipped so a stray file never blocks the
/// command line.
pub fn discover_config(candidates: &[PathBuf]) -> Config {
    for path in candidates {
        if !path.exists() {
            continue;
        }
        match read_config(path) {
            Ok(config) => {
                log::debug!("Loaded configuration from {}", path.display());
                return config;
            }
            Err(e) => log::warn!("Ignoring configuration: {}", e),
        }
    }
    Config::default()
}

/// Read and parse one configuration file.
pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| GateError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| GateError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
