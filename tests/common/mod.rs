//! Common test utilities for Slipway integration tests.
//!
//! Provides `RepoFixture` - an isolated repository tree in a temp
//! directory with helpers to lay out solutions, projects, and static
//! content, plus a runner for the slipway binary.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Project file declaring a web application type GUID (deployable)
pub const WEB_APP_PROJECT: &str = r#"<Project ToolsVersion="4.0">
  <PropertyGroup>
    <ProjectTypeGuids>{349C5851-65DF-11DA-9384-00065B846F21};{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}</ProjectTypeGuids>
    <OutputType>Library</OutputType>
  </PropertyGroup>
</Project>
"#;

/// Project file with an executable output type (deployable)
pub const CONSOLE_PROJECT: &str = r#"<Project ToolsVersion="4.0">
  <PropertyGroup>
    <OutputType>Exe</OutputType>
  </PropertyGroup>
</Project>
"#;

/// Class library project (recognized but not deployable)
pub const LIBRARY_PROJECT: &str = r#"<Project ToolsVersion="4.0">
  <PropertyGroup>
    <OutputType>Library</OutputType>
  </PropertyGroup>
</Project>
"#;

/// Result of running the slipway binary
#[derive(Debug)]
pub struct RunResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// An isolated repository tree for resolution tests.
pub struct RepoFixture {
    root: TempDir,
}

impl RepoFixture {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp repository"),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file, creating parent directories as needed.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&path, content).expect("write fixture file");
        path
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("create fixture directory");
        path
    }

    /// Write a solution file whose members are `(name, sln_relative_path)`
    /// project entries in the given order. Paths use solution-style
    /// backslash separators.
    pub fn write_solution(&self, relative: &str, members: &[(&str, &str)]) -> PathBuf {
        let mut body = String::from("Microsoft Visual Studio Solution File, Format Version 12.00\n");
        for (name, path) in members {
            body.push_str(&format!(
                "Project(\"{{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}}\") = \"{name}\", \"{path}\", \"{{00000000-0000-0000-0000-000000000000}}\"\nEndProject\n"
            ));
        }
        body.push_str("Global\nEndGlobal\n");
        self.write(relative, &body)
    }

    /// Write a solution containing a single website member pointing at a
    /// directory inside the repository.
    pub fn write_website_solution(&self, relative: &str, site_dir: &str) -> PathBuf {
        let site = site_dir.replace('/', "\\");
        let body = format!(
            "Microsoft Visual Studio Solution File, Format Version 12.00\n\
             Project(\"{{E24C65DC-7377-472B-9ABA-E4B32D7A397B}}\") = \"{site_dir}\", \"{site}\\\", \"{{00000000-0000-0000-0000-000000000000}}\"\nEndProject\n\
             Global\nEndGlobal\n"
        );
        self.write(relative, &body)
    }

    /// Run the slipway binary with the fixture root as working directory.
    pub fn run(&self, args: &[&str]) -> RunResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> RunResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_slipway"));
        cmd.current_dir(self.root.path()).args(args);
        // Keep the spawned process isolated from the caller's environment.
        cmd.env_remove("SLIPWAY_PROJECT");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("run slipway binary");
        RunResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for RepoFixture {
    fn default() -> Self {
        Self::new()
    }
}
