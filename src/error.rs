//! Error types for Slipway
//!
//! Uses `thiserror` for library errors. Every resolution failure is one of
//! the typed variants below; callers branch on the variant, never on
//! message text.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Slipway operations
pub type SlipwayResult<T> = Result<T, SlipwayError>;

/// Main error type for Slipway operations
#[derive(Error, Debug)]
pub enum SlipwayError {
    /// More than one solution file where exactly one was required
    #[error("ambiguous deployment: {} solution files found, specify which project to deploy", candidates.len())]
    AmbiguousSolution { candidates: Vec<PathBuf> },

    /// More than one project file where exactly one was required
    #[error("ambiguous deployment: {} project files found, specify which project to deploy", candidates.len())]
    AmbiguousProject { candidates: Vec<PathBuf> },

    /// A resolved project exists but lacks the deployable capability
    #[error("project '{path}' is not deployable")]
    InvalidProject { path: PathBuf },

    /// A resolved project path does not exist on disk
    #[error("project file '{path}' does not exist")]
    ProjectNotFound { path: PathBuf },

    /// An explicit override path does not exist
    #[error("configured deployment path '{path}' does not exist")]
    MissingPath { path: PathBuf },

    /// Deployment configuration file exists but does not parse
    #[error("invalid deployment configuration in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
