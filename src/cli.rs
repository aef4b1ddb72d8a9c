//! Command-line interface definitions for Slipway

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Slipway - deployment target resolution for push-to-deploy pipelines
#[derive(Parser, Debug)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the deployment strategy for a repository
    Resolve {
        /// Repository root
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Deployment unit override (takes precedence over .deployment.toml)
        #[arg(long)]
        project: Option<PathBuf>,

        /// Build property passed through to the execution stage (key=value)
        #[arg(short = 'p', long = "property", value_parser = parse_property)]
        properties: Vec<(String, String)>,
    },

    /// List recognized project files and their capability flags
    Projects {
        /// Directory to scan
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Scan only the top level of the directory
        #[arg(long)]
        no_recursive: bool,
    },

    /// List solution files and their member projects
    Solutions {
        /// Directory to scan
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

/// Parse a `key=value` build property.
fn parse_property(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid property '{s}', expected key=value")),
    }
}
