use crate::config::{OutputFormat, ParseErrorPolicy};
use crate::gates::Feature;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kube-gate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Decide which Kubernetes APIs a cluster supports from its version")]
#[command(long_about = "Evaluates a Kubernetes control-plane version string, as reported by a cluster's discovery endpoint, against the fixed releases at which service account token generation and EndpointSlice APIs changed.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate feature gates for a reported cluster version
    Check {
        /// Version as reported by the cluster, e.g. v1.24.0+k3s1
        #[arg(value_name = "VERSION", allow_hyphen_values = true)]
        version: String,

        /// Only answer a single feature question
        #[arg(long, value_enum)]
        feature: Option<Feature>,

        /// Output format (overrides the configuration file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Behavior when the version cannot be parsed (overrides the configuration file)
        #[arg(long, value_enum)]
        on_parse_error: Option<ParseErrorPolicy>,
    },

    /// List the threshold versions feature gates are decided by
    Thresholds {
        /// Output format (overrides the configuration file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
