//! # Kube Version Gate
//!
//! Decides, from the version string a Kubernetes control plane reports, which
//! API shapes and authentication mechanisms a managed cluster supports.
//!
//! Versions such as `v1.24.0-rc.0` or `v1.24.0+k3s1` are parsed with semantic
//! versioning precedence (build metadata never matters) and compared against
//! a fixed table of threshold releases:
//!
//! - `KubeV1240Alpha4` (1.24.0-alpha.4): secret-based service account tokens
//!   stop being auto-generated
//! - `KubeV1170Beta2` (1.17.0-beta.2): EndpointSlice `v1beta1` is served
//! - `KubeV1210Beta1` (1.21.0-beta.1): EndpointSlice `v1` is served
//!
//! ## Example
//!
//! ```rust
//! use kube_version_gate::{endpoint_slice_v1_promoted, sa_token_auto_generated};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert!(sa_token_auto_generated("v1.23.6+k3s1")?);
//! assert!(!endpoint_slice_v1_promoted("v1.21.0-alpha.0")?);
//! assert!(sa_token_auto_generated("unknown").is_err());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod gates;
pub mod handlers;
mod version;

// Re-export commonly used types and functions
pub use error::{GateError, Result, VersionParseError};
pub use gates::{
    Feature, FeatureReport, Threshold, endpoint_slice_v1_promoted, endpoint_slice_v1beta1_promoted,
    evaluate, sa_token_auto_generated, thresholds,
};
use cli::Commands;
use handlers::CheckOptions;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands, config: &config::Config) -> Result<String> {
    match command {
        Commands::Check {
            version,
            feature,
            format,
            on_parse_error,
        } => handlers::handle_check(
            CheckOptions {
                version,
                feature,
                format,
                on_parse_error,
            },
            config,
        ),
        Commands::Thresholds { format } => handlers::handle_thresholds(format, config),
    }
}
