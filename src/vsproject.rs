//! Project discovery
//!
//! Recognizes Visual Studio project files on disk and sniffs their
//! deployment capabilities:
//! - `is_project`: the path has a recognized project file extension
//! - `is_deployable_project`: additionally, the file content marks a
//!   compiled application (web application type GUID or executable output)
//!
//! Discovery is a pure filesystem read; nothing here mutates state.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::models::ProjectDescriptor;

/// Recognized project file extensions (case-insensitive)
const PROJECT_EXTENSIONS: &[&str] = &["csproj", "vbproj"];

/// Project type GUIDs that mark a buildable web application
const APPLICATION_PROJECT_TYPE_GUIDS: &[&str] = &[
    "349C5851-65DF-11DA-9384-00065B846F21", // web application
    "E53F8FEA-EAE0-44A6-8774-FFD645390401", // MVC 3
    "E3E379DF-F4C6-4180-9B81-6769533ABE47", // MVC 4
];

/// Check if a path is a recognized project file format.
///
/// Purely syntactic: the file does not need to exist.
pub fn is_project(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            PROJECT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Check if a path is a project file that can be deployed on its own.
///
/// Requires the compiled-application capability: the project declares a
/// web application type GUID or an executable output type. A missing or
/// unreadable file is simply not deployable.
pub fn is_deployable_project(path: &Path) -> bool {
    if !is_project(path) {
        return false;
    }
    match fs::read_to_string(path) {
        Ok(content) => sniff_compiled_application(&content),
        Err(_) => false,
    }
}

/// Classify a project file on disk into a descriptor.
pub fn classify(path: impl Into<PathBuf>) -> ProjectDescriptor {
    let path = path.into();
    if is_deployable_project(&path) {
        ProjectDescriptor::compiled(path)
    } else {
        ProjectDescriptor::library(path)
    }
}

/// Find all recognized project files under `root`.
///
/// `recursive` selects full-subtree versus current-directory-only search.
/// Results are sorted by path so repeated scans of an unchanged tree are
/// identical. An empty result is valid, not an error; unreadable entries
/// are skipped.
pub fn find_projects(root: &Path, recursive: bool) -> Vec<ProjectDescriptor> {
    let mut walker = WalkBuilder::new(root);
    walker.standard_filters(false).hidden(true);
    if !recursive {
        walker.max_depth(Some(1));
    }

    let mut projects: Vec<ProjectDescriptor> = walker
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| is_project(entry.path()))
        .map(|entry| classify(entry.path()))
        .collect();

    projects.sort_by(|a, b| a.path.cmp(&b.path));
    projects
}

/// Content sniff for the compiled-application capability.
fn sniff_compiled_application(content: &str) -> bool {
    if let Some(guids) = element_text(content, "ProjectTypeGuids") {
        let declared = guids
            .split(';')
            .map(|g| g.trim().trim_matches(|c| c == '{' || c == '}').to_ascii_uppercase());
        for guid in declared {
            if APPLICATION_PROJECT_TYPE_GUIDS.contains(&guid.as_str()) {
                return true;
            }
        }
    }
    match element_text(content, "OutputType") {
        Some(output) => {
            let output = output.trim();
            output.eq_ignore_ascii_case("Exe") || output.eq_ignore_ascii_case("WinExe")
        }
        None => false,
    }
}

/// Extract the text of the first `<name>...</name>` element.
///
/// Project files are MSBuild XML, but the two elements we sniff never
/// carry attributes or nesting, so a scan is enough - no XML dependency.
fn element_text<'a>(content: &'a str, name: &str) -> Option<&'a str> {
    let open = format!("<{name}>");
    let close = format!("</{name}>");
    let start = content.find(&open)? + open.len();
    let end = content[start..].find(&close)? + start;
    Some(&content[start..end])
}
