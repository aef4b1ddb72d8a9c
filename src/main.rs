//! Slipway CLI - deployment target resolution for push-to-deploy pipelines
//!
//! Usage: slipway <COMMAND>
//!
//! Commands:
//!   resolve    Resolve the deployment strategy for a repository
//!   projects   List recognized project files and their capability flags
//!   solutions  List solution files and their member projects

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use slipway::cli::{Cli, Commands};
use slipway::resolver::{NoopNoticeSink, NoticeSink, StderrNoticeSink};
use slipway::{config, resolver, solution, vsproject};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            root,
            project,
            properties,
        } => cmd_resolve(&root, project, properties, cli.json, cli.verbose),
        Commands::Projects { root, no_recursive } => {
            cmd_projects(&root, !no_recursive, cli.json)
        }
        Commands::Solutions { root } => cmd_solutions(&root, cli.json),
    }
}

fn cmd_resolve(
    root: &Path,
    project: Option<PathBuf>,
    properties: Vec<(String, String)>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let override_path = config::effective_override(project, root)?;

    let sink: &dyn NoticeSink = if verbose > 0 && !json {
        &StderrNoticeSink
    } else {
        &NoopNoticeSink
    };

    let spec = resolver::resolve(root, override_path.as_deref(), sink)?;

    // Build properties are opaque: passed through to the execution stage
    // unmodified, never inspected here.
    let properties: BTreeMap<String, String> = properties.into_iter().collect();

    if json {
        let output = serde_json::json!({
            "event": "resolve",
            "spec": spec,
            "properties": properties,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ {spec}");
        if !properties.is_empty() {
            println!("Properties:");
            for (key, value) in &properties {
                println!("  {key}={value}");
            }
        }
    }

    Ok(())
}

fn cmd_projects(root: &Path, recursive: bool, json: bool) -> Result<()> {
    let projects = vsproject::find_projects(root, recursive);

    if json {
        let output = serde_json::json!({
            "event": "projects",
            "projects": projects,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No project files found under {}", root.display());
        return Ok(());
    }
    for project in &projects {
        let flag = if project.is_compiled_application {
            "application"
        } else {
            "library"
        };
        println!("{} [{}]", project.path.display(), flag);
    }

    Ok(())
}

fn cmd_solutions(root: &Path, json: bool) -> Result<()> {
    let solutions = solution::find_all_solutions(root);

    if json {
        let output = serde_json::json!({
            "event": "solutions",
            "solutions": solutions,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if solutions.is_empty() {
        println!("No solution files found under {}", root.display());
        return Ok(());
    }
    for sln in &solutions {
        println!("{}", sln.path.display());
        for member in &sln.projects {
            let flag = if member.is_compiled_application {
                "application"
            } else if member.is_loose_site {
                "site"
            } else {
                "library"
            };
            println!("  {} [{}]", member.path.display(), flag);
        }
    }

    Ok(())
}
