//! Core data models for Slipway
//!
//! Defines the fundamental data structures used throughout Slipway:
//! - `ProjectDescriptor`: a recognized project file (or website directory)
//!   tagged with capability flags
//! - `SolutionDescriptor`: a solution file and its member projects in
//!   declaration order
//! - `BuilderSpec`: the resolution engine's output, a closed set of
//!   deployment strategies

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A discovered project, tagged with its deployment capabilities.
///
/// At most one capability flag is true. A descriptor with neither flag
/// set is a recognized project format that cannot be deployed on its own
/// (class libraries, test projects).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    /// Absolute path to the project file, or to the site directory for
    /// loose-site members
    pub path: PathBuf,

    /// Requires a build step; bound to a single project file
    pub is_compiled_application: bool,

    /// Website member with no project file; deployable only with the
    /// build context of its owning solution
    pub is_loose_site: bool,
}

impl ProjectDescriptor {
    /// A compiled-application project backed by a project file
    pub fn compiled(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_compiled_application: true,
            is_loose_site: false,
        }
    }

    /// A loose-site member whose path is a directory inside the repository
    pub fn loose_site(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_compiled_application: false,
            is_loose_site: true,
        }
    }

    /// A recognized but non-deployable project (library, tests)
    pub fn library(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_compiled_application: false,
            is_loose_site: false,
        }
    }

    /// Exactly one capability flag must be set for a project to deploy
    pub fn is_deployable(&self) -> bool {
        self.is_compiled_application ^ self.is_loose_site
    }
}

/// A solution file and its member projects.
///
/// Member order is the declaration order in the solution file, not a
/// priority ranking. Broken member references are dropped at discovery
/// time and never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionDescriptor {
    /// Absolute path to the solution file
    pub path: PathBuf,

    /// Member projects in declaration order
    pub projects: Vec<ProjectDescriptor>,
}

impl SolutionDescriptor {
    /// First member (declaration order) carrying a deployable capability
    pub fn first_deployable(&self) -> Option<&ProjectDescriptor> {
        self.projects.iter().find(|p| p.is_deployable())
    }

    /// Whether any member project sits at or under `target`
    pub fn contains_path(&self, target: &Path) -> bool {
        self.projects.iter().any(|p| p.path.starts_with(target))
    }
}

/// The deployment strategy selected by resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuilderKind {
    /// Build a project file, deploy its output
    CompiledProject,
    /// Deploy a website directory with build context from its solution
    LooseSite,
    /// No build step; deploy contents as-is
    FileCopy,
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderKind::CompiledProject => write!(f, "compiled-project"),
            BuilderKind::LooseSite => write!(f, "loose-site"),
            BuilderKind::FileCopy => write!(f, "file-copy"),
        }
    }
}

/// A fully parameterized deployment strategy.
///
/// Exactly one variant is produced per successful resolution. The spec
/// references paths discovered during resolution; the filesystem remains
/// the source of truth and is re-scanned on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "builder", rename_all = "kebab-case")]
pub enum BuilderSpec {
    /// Build `project_path` and deploy its output
    CompiledProject {
        repository_root: PathBuf,
        project_path: PathBuf,
        /// Owning solution, when one references the project
        solution_path: Option<PathBuf>,
    },

    /// Deploy the site directory using the owning solution for build context
    LooseSite {
        repository_root: PathBuf,
        solution_path: PathBuf,
        site_path: PathBuf,
    },

    /// Copy `source_path` contents to the deploy target verbatim
    FileCopy { source_path: PathBuf },
}

impl BuilderSpec {
    pub fn kind(&self) -> BuilderKind {
        match self {
            BuilderSpec::CompiledProject { .. } => BuilderKind::CompiledProject,
            BuilderSpec::LooseSite { .. } => BuilderKind::LooseSite,
            BuilderSpec::FileCopy { .. } => BuilderKind::FileCopy,
        }
    }
}

impl fmt::Display for BuilderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderSpec::CompiledProject {
                project_path,
                solution_path,
                ..
            } => match solution_path {
                Some(sln) => write!(
                    f,
                    "compiled-project {} (solution {})",
                    project_path.display(),
                    sln.display()
                ),
                None => write!(f, "compiled-project {}", project_path.display()),
            },
            BuilderSpec::LooseSite {
                site_path,
                solution_path,
                ..
            } => write!(
                f,
                "loose-site {} (solution {})",
                site_path.display(),
                solution_path.display()
            ),
            BuilderSpec::FileCopy { source_path } => {
                write!(f, "file-copy {}", source_path.display())
            }
        }
    }
}
