//! Solution discovery
//!
//! Parses Visual Studio solution files (`.sln`) and resolves their member
//! projects to descriptors. Three queries feed the resolution engine:
//! all solutions under a root, the solutions whose members contain a
//! target path, and the single solution owning a given project file.
//!
//! Member references that do not exist on disk are dropped, never fatal:
//! a half-broken solution still resolves to whatever members survive.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::models::{ProjectDescriptor, SolutionDescriptor};
use crate::vsproject;

/// Project type GUID for website members (no project file, path is a
/// directory relative to the solution)
const WEBSITE_PROJECT_TYPE_GUID: &str = "E24C65DC-7377-472B-9ABA-E4B32D7A397B";

/// Find every solution file under `root`, members resolved.
///
/// Results are sorted by path for deterministic selection. Unreadable
/// solution files are skipped.
pub fn find_all_solutions(root: &Path) -> Vec<SolutionDescriptor> {
    let mut walker = WalkBuilder::new(root);
    walker.standard_filters(false).hidden(true);

    let mut solutions: Vec<SolutionDescriptor> = walker
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| is_solution(entry.path()))
        .filter_map(|entry| parse_solution(entry.path()).ok())
        .collect();

    solutions.sort_by(|a, b| a.path.cmp(&b.path));
    solutions
}

/// Solutions under `root` whose member set includes a project located at
/// or under `target`. Used by the loose-site fallback.
pub fn find_solutions_containing(root: &Path, target: &Path) -> Vec<SolutionDescriptor> {
    find_all_solutions(root)
        .into_iter()
        .filter(|sln| sln.contains_path(target))
        .collect()
}

/// The solution owning `project_path`, if any. Absence is not an error;
/// a standalone project simply builds without solution context.
pub fn find_containing_solution(root: &Path, project_path: &Path) -> Option<SolutionDescriptor> {
    find_all_solutions(root)
        .into_iter()
        .find(|sln| sln.projects.iter().any(|p| p.path == project_path))
}

/// Check if a path is a solution file.
pub fn is_solution(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("sln"))
        .unwrap_or(false)
}

/// Parse a solution file into a descriptor.
///
/// Member order is the declaration order in the file. Members whose
/// resolved path is missing from disk are dropped.
pub fn parse_solution(path: &Path) -> std::io::Result<SolutionDescriptor> {
    let content = fs::read_to_string(path)?;
    let solution_dir = path.parent().unwrap_or(Path::new(""));

    let projects = content
        .lines()
        .filter_map(parse_project_line)
        .filter_map(|entry| resolve_member(solution_dir, entry))
        .collect();

    Ok(SolutionDescriptor {
        path: path.to_path_buf(),
        projects,
    })
}

/// One `Project(...)` declaration from a solution file.
struct ProjectEntry {
    type_guid: String,
    relative_path: String,
}

/// Parse a solution `Project` line:
///
/// ```text
/// Project("{TYPE-GUID}") = "Name", "Rel\Path.csproj", "{PROJECT-GUID}"
/// ```
fn parse_project_line(line: &str) -> Option<ProjectEntry> {
    let line = line.trim_start();
    let rest = line.strip_prefix("Project(\"")?;
    let (type_guid, rest) = rest.split_once("\")")?;
    let rest = rest.trim_start().strip_prefix('=')?;

    let mut fields = rest.split(',').map(|f| f.trim().trim_matches('"'));
    let _name = fields.next()?;
    let relative_path = fields.next()?;

    Some(ProjectEntry {
        type_guid: type_guid.trim_matches(|c| c == '{' || c == '}').to_ascii_uppercase(),
        relative_path: relative_path.to_string(),
    })
}

/// Resolve a declaration to a descriptor, dropping broken references.
fn resolve_member(solution_dir: &Path, entry: ProjectEntry) -> Option<ProjectDescriptor> {
    // Website members may reference URLs ("http://localhost/...") when the
    // site is IIS-hosted; those cannot be resolved against the tree.
    if entry.relative_path.contains("://") {
        return None;
    }

    let member_path = solution_dir.join(normalize_separators(&entry.relative_path));

    if entry.type_guid == WEBSITE_PROJECT_TYPE_GUID {
        if member_path.is_dir() {
            return Some(ProjectDescriptor::loose_site(member_path));
        }
        return None;
    }

    // Solution folders and unknown member kinds fail the extension check.
    if !vsproject::is_project(&member_path) || !member_path.is_file() {
        return None;
    }

    Some(vsproject::classify(member_path))
}

/// Solution files always use backslash separators.
fn normalize_separators(relative: &str) -> PathBuf {
    relative.split('\\').collect()
}
