//! Resolution policy engine
//!
//! Orchestrates project and solution discovery plus the optional explicit
//! override to select exactly one deployment strategy, or fail with a
//! typed error. The engine holds no state: every call re-derives its
//! answer from the filesystem, so resolution is idempotent for an
//! unchanged tree.
//!
//! Selection order (first match wins):
//! 1. explicit override path
//! 2. solution count under the root (0 / 1 / many)
//! 3. within a single solution, first deployable member in declaration order
//! 4. direct project resolution under a target path, with an optional
//!    loose-site fallback through solutions referencing that path
//!
//! No-deployable-project is not an error: it degrades to the file-copy
//! strategy with a notice on the sink.

use std::path::Path;

use crate::error::{SlipwayError, SlipwayResult};
use crate::models::{BuilderSpec, SolutionDescriptor};
use crate::solution;
use crate::vsproject;

/// Side channel for resolution notices.
///
/// A single fire-and-forget message sink; logging cannot fail and never
/// affects the resolution outcome.
pub trait NoticeSink {
    fn notice(&self, message: &str);
}

/// Discards all notices.
pub struct NoopNoticeSink;

impl NoticeSink for NoopNoticeSink {
    fn notice(&self, _message: &str) {}
}

/// Writes notices to stderr. Used by the CLI in verbose mode.
pub struct StderrNoticeSink;

impl NoticeSink for StderrNoticeSink {
    fn notice(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Resolve the deployment strategy for a repository.
///
/// `override_path` is the repository author's designated deployment unit;
/// when present it takes precedence over all discovery, and a missing
/// path is fatal. Relative override paths are anchored at the root.
///
/// Deterministic: for a fixed filesystem snapshot, repeated calls yield
/// the identical `BuilderSpec`.
pub fn resolve(
    repository_root: &Path,
    override_path: Option<&Path>,
    sink: &dyn NoticeSink,
) -> SlipwayResult<BuilderSpec> {
    if let Some(target) = override_path {
        let target = if target.is_absolute() {
            target.to_path_buf()
        } else {
            repository_root.join(target)
        };
        return resolve_target(repository_root, &target, Fallback::Website, Entry::Override, sink);
    }

    let solutions = solution::find_all_solutions(repository_root);
    match solutions.len() {
        // Nothing to contain a website project, so the fallback is off.
        0 => resolve_target(repository_root, repository_root, Fallback::None, Entry::Scan, sink),
        1 => resolve_solution(repository_root, &solutions[0], sink),
        _ => Err(SlipwayError::AmbiguousSolution {
            candidates: solutions.into_iter().map(|s| s.path).collect(),
        }),
    }
}

/// How a direct resolution was entered. The override form is stricter:
/// project enumeration stays at the top level and a missing target is
/// fatal instead of degrading to file copy.
#[derive(Clone, Copy, PartialEq)]
enum Entry {
    Override,
    Scan,
}

#[derive(Clone, Copy, PartialEq)]
enum Fallback {
    Website,
    None,
}

/// Single-solution selection: first deployable member wins.
///
/// This is a first-match policy over declaration order, not a best-match;
/// ties between multiple deployable members are not detected.
fn resolve_solution(
    root: &Path,
    sln: &SolutionDescriptor,
    sink: &dyn NoticeSink,
) -> SlipwayResult<BuilderSpec> {
    match sln.first_deployable() {
        Some(project) if project.is_compiled_application => Ok(BuilderSpec::CompiledProject {
            repository_root: root.to_path_buf(),
            project_path: project.path.clone(),
            solution_path: Some(sln.path.clone()),
        }),
        Some(project) => Ok(BuilderSpec::LooseSite {
            repository_root: root.to_path_buf(),
            solution_path: sln.path.clone(),
            site_path: project.path.clone(),
        }),
        None => {
            sink.notice(&format!(
                "no deployable project found in {}; deploying repository contents as-is",
                sln.path.display()
            ));
            Ok(BuilderSpec::FileCopy {
                source_path: root.to_path_buf(),
            })
        }
    }
}

/// Direct resolution of a target path (override, or root when the
/// repository has no solution).
fn resolve_target(
    root: &Path,
    target: &Path,
    fallback: Fallback,
    entry: Entry,
    sink: &dyn NoticeSink,
) -> SlipwayResult<BuilderSpec> {
    if vsproject::is_project(target) {
        return resolve_single_project(root, target);
    }

    // Only deployable projects are candidates here; libraries and test
    // projects next to static content must not make the scan ambiguous.
    let recursive = entry == Entry::Scan;
    let projects: Vec<_> = vsproject::find_projects(target, recursive)
        .into_iter()
        .filter(|p| p.is_compiled_application)
        .collect();
    match projects.len() {
        1 => resolve_single_project(root, &projects[0].path),
        0 => {
            if fallback == Fallback::Website {
                let mut containing = solution::find_solutions_containing(root, target);
                if containing.len() > 1 {
                    return Err(SlipwayError::AmbiguousSolution {
                        candidates: containing.into_iter().map(|s| s.path).collect(),
                    });
                }
                if let Some(sln) = containing.pop() {
                    return Ok(BuilderSpec::LooseSite {
                        repository_root: root.to_path_buf(),
                        solution_path: sln.path,
                        site_path: target.to_path_buf(),
                    });
                }
                // No containing solution: fall through to file copy.
            }
            if entry == Entry::Override && !target.exists() {
                return Err(SlipwayError::MissingPath {
                    path: target.to_path_buf(),
                });
            }
            sink.notice(&format!(
                "no project found under {}; deploying files as-is",
                target.display()
            ));
            Ok(BuilderSpec::FileCopy {
                source_path: target.to_path_buf(),
            })
        }
        _ => Err(SlipwayError::AmbiguousProject {
            candidates: projects.into_iter().map(|p| p.path).collect(),
        }),
    }
}

/// Resolve one concrete project file into a compiled-project spec.
fn resolve_single_project(root: &Path, project: &Path) -> SlipwayResult<BuilderSpec> {
    if !vsproject::is_project(project) {
        return Err(SlipwayError::InvalidProject {
            path: project.to_path_buf(),
        });
    }
    if !project.exists() {
        return Err(SlipwayError::ProjectNotFound {
            path: project.to_path_buf(),
        });
    }
    if !vsproject::is_deployable_project(project) {
        return Err(SlipwayError::InvalidProject {
            path: project.to_path_buf(),
        });
    }

    let solution_path =
        solution::find_containing_solution(root, project).map(|sln| sln.path);

    Ok(BuilderSpec::CompiledProject {
        repository_root: root.to_path_buf(),
        project_path: project.to_path_buf(),
        solution_path,
    })
}
