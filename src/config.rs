//! Repository-level deployment configuration
//!
//! A repository author can pin the deployment unit in `.deployment.toml`
//! at the repository root:
//!
//! ```toml
//! [deploy]
//! project = "src/WebSite"
//! ```
//!
//! Override precedence: CLI flag > `SLIPWAY_PROJECT` environment
//! variable > configuration file. An absent file means no override.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SlipwayError, SlipwayResult};

/// Name of the deployment configuration file at the repository root
pub const CONFIG_FILE: &str = ".deployment.toml";

/// Environment variable carrying an override path
pub const PROJECT_ENV_VAR: &str = "SLIPWAY_PROJECT";

/// Parsed deployment configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeployConfig {
    #[serde(default)]
    pub deploy: DeploySection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploySection {
    /// Target path designated as the deployment unit, relative to the
    /// repository root
    #[serde(default)]
    pub project: Option<PathBuf>,
}

impl DeployConfig {
    /// Load configuration from the repository root.
    ///
    /// Returns defaults when the file is absent. A file that exists but
    /// does not parse is an error; silently ignoring a bad override
    /// would deploy the wrong thing.
    pub fn load(root: &Path) -> SlipwayResult<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| SlipwayError::InvalidConfig {
            path,
            message: e.to_string(),
        })
    }
}

/// The override path for a resolution, applying precedence.
pub fn effective_override(
    cli_project: Option<PathBuf>,
    root: &Path,
) -> SlipwayResult<Option<PathBuf>> {
    if cli_project.is_some() {
        return Ok(cli_project);
    }
    if let Ok(value) = std::env::var(PROJECT_ENV_VAR) {
        if !value.is_empty() {
            return Ok(Some(PathBuf::from(value)));
        }
    }
    Ok(DeployConfig::load(root)?.deploy.project)
}
