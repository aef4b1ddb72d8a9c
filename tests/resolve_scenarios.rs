//! End-to-end resolution scenarios against the library API.
//!
//! Each test lays out a repository snapshot and asserts that `resolve`
//! produces exactly one builder spec or exactly one typed error.

mod common;

use std::path::Path;

use common::*;
use slipway::{resolve, BuilderSpec, NoopNoticeSink, SlipwayError};

#[test]
fn solution_with_deployable_project_selects_compiled_builder() {
    let repo = RepoFixture::new();
    repo.write("Web.csproj", WEB_APP_PROJECT);
    repo.write_solution("App.sln", &[("Web", "Web.csproj")]);

    let spec = resolve(repo.root(), None, &NoopNoticeSink).unwrap();
    assert_eq!(
        spec,
        BuilderSpec::CompiledProject {
            repository_root: repo.root().to_path_buf(),
            project_path: repo.path("Web.csproj"),
            solution_path: Some(repo.path("App.sln")),
        }
    );
}

#[test]
fn two_solutions_fail_with_ambiguous_solution() {
    let repo = RepoFixture::new();
    repo.write_solution("A.sln", &[]);
    repo.write_solution("B.sln", &[]);

    let err = resolve(repo.root(), None, &NoopNoticeSink).unwrap_err();
    assert!(matches!(err, SlipwayError::AmbiguousSolution { .. }));
}

#[test]
fn standalone_project_resolves_without_solution() {
    let repo = RepoFixture::new();
    repo.write("Tool.csproj", CONSOLE_PROJECT);

    let spec = resolve(repo.root(), None, &NoopNoticeSink).unwrap();
    assert_eq!(
        spec,
        BuilderSpec::CompiledProject {
            repository_root: repo.root().to_path_buf(),
            project_path: repo.path("Tool.csproj"),
            solution_path: None,
        }
    );
}

#[test]
fn static_content_falls_back_to_file_copy() {
    let repo = RepoFixture::new();
    repo.write("index.html", "<html></html>");

    let spec = resolve(repo.root(), None, &NoopNoticeSink).unwrap();
    assert_eq!(
        spec,
        BuilderSpec::FileCopy {
            source_path: repo.root().to_path_buf(),
        }
    );
}

#[test]
fn override_subfolder_with_owning_solution_selects_loose_site() {
    let repo = RepoFixture::new();
    repo.mkdir("site");
    repo.write("site/default.aspx", "<%@ Page %>");
    repo.write_website_solution("App.sln", "site");

    let spec = resolve(repo.root(), Some(Path::new("site")), &NoopNoticeSink).unwrap();
    assert_eq!(
        spec,
        BuilderSpec::LooseSite {
            repository_root: repo.root().to_path_buf(),
            solution_path: repo.path("App.sln"),
            site_path: repo.path("site"),
        }
    );
}

#[test]
fn override_missing_path_fails_with_missing_path() {
    let repo = RepoFixture::new();

    let err = resolve(repo.root(), Some(Path::new("does/not/exist")), &NoopNoticeSink).unwrap_err();
    assert!(matches!(err, SlipwayError::MissingPath { .. }));
}

#[test]
fn unrelated_file_does_not_change_resolution() {
    let repo = RepoFixture::new();
    repo.write("Web.csproj", WEB_APP_PROJECT);
    repo.write_solution("App.sln", &[("Web", "Web.csproj")]);

    let before = resolve(repo.root(), None, &NoopNoticeSink).unwrap();
    repo.write("README.md", "# Readme");
    let after = resolve(repo.root(), None, &NoopNoticeSink).unwrap();

    assert_eq!(before, after);
}

#[test]
fn solution_member_order_decides_between_deployable_projects() {
    let repo = RepoFixture::new();
    repo.write("src/Api.csproj", WEB_APP_PROJECT);
    repo.write("src/Web.csproj", WEB_APP_PROJECT);
    // Web declared before Api: Web wins despite sorting after it.
    repo.write_solution(
        "App.sln",
        &[("Web", "src\\Web.csproj"), ("Api", "src\\Api.csproj")],
    );

    let spec = resolve(repo.root(), None, &NoopNoticeSink).unwrap();
    assert!(matches!(
        spec,
        BuilderSpec::CompiledProject { project_path, .. } if project_path == repo.path("src/Web.csproj")
    ));
}

#[test]
fn solution_with_only_libraries_degrades_to_file_copy() {
    let repo = RepoFixture::new();
    repo.write("Lib.csproj", LIBRARY_PROJECT);
    repo.write_solution("App.sln", &[("Lib", "Lib.csproj")]);

    let spec = resolve(repo.root(), None, &NoopNoticeSink).unwrap();
    assert_eq!(
        spec,
        BuilderSpec::FileCopy {
            source_path: repo.root().to_path_buf(),
        }
    );
}

#[test]
fn broken_solution_references_are_dropped_not_fatal() {
    let repo = RepoFixture::new();
    repo.write("Web.csproj", WEB_APP_PROJECT);
    repo.write_solution(
        "App.sln",
        &[("Gone", "Missing.csproj"), ("Web", "Web.csproj")],
    );

    let spec = resolve(repo.root(), None, &NoopNoticeSink).unwrap();
    assert!(matches!(
        spec,
        BuilderSpec::CompiledProject { project_path, .. } if project_path == repo.path("Web.csproj")
    ));
}

#[test]
fn nested_projects_without_solution_are_ambiguous() {
    let repo = RepoFixture::new();
    repo.write("a/One.csproj", CONSOLE_PROJECT);
    repo.write("b/Two.csproj", CONSOLE_PROJECT);

    let err = resolve(repo.root(), None, &NoopNoticeSink).unwrap_err();
    assert!(matches!(
        err,
        SlipwayError::AmbiguousProject { candidates } if candidates.len() == 2
    ));
}

#[test]
fn override_pointing_at_library_project_is_invalid() {
    let repo = RepoFixture::new();
    repo.write("Lib.csproj", LIBRARY_PROJECT);

    let err = resolve(repo.root(), Some(Path::new("Lib.csproj")), &NoopNoticeSink).unwrap_err();
    assert!(matches!(err, SlipwayError::InvalidProject { .. }));
}

#[test]
fn override_pointing_at_absent_project_file_is_not_found() {
    let repo = RepoFixture::new();

    let err = resolve(repo.root(), Some(Path::new("Gone.csproj")), &NoopNoticeSink).unwrap_err();
    assert!(matches!(err, SlipwayError::ProjectNotFound { .. }));
}
