use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use remixgen_core::{
    BaseProject, RemixProjectOptions, append_gitignore, apply_overlay, compose, load_tasks_file,
    materialize, save_tasks_file,
};

#[derive(Debug, Parser)]
#[command(
    name = "remixgen",
    about = "Descriptor synthesis for Remix apps deployed with AWS CDK"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the resolved project descriptor as JSON
    Compose {
        /// Path to the project options file (YAML)
        #[arg(short, long)]
        options: PathBuf,
    },

    /// Apply the Remix overlay to a project directory produced by the base generator
    Overlay {
        /// Path to the project options file (YAML)
        #[arg(short, long)]
        options: PathBuf,

        /// Project directory containing the generator output
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,

        /// Directory holding the sample scaffold sources
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Compose { options } => {
                let json = run_compose(&options)?;
                println!("{json}");
                Ok(())
            }
            Commands::Overlay {
                options,
                project_dir,
                templates,
            } => run_overlay(&options, &project_dir, templates.as_deref()),
        }
    }
}

/// Load and parse the caller options file.
fn load_options(path: &Path) -> Result<RemixProjectOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read options file: {}", path.display()))?;
    let options = serde_yaml::from_str(&content)
        .with_context(|| format!("invalid options file: {}", path.display()))?;
    Ok(options)
}

/// Compose the resolved descriptor and render it as pretty JSON.
fn run_compose(options_path: &Path) -> Result<String> {
    let options = load_options(options_path)?;
    let descriptor = compose(&options);
    Ok(serde_json::to_string_pretty(&descriptor)?)
}

/// Apply the overlay to an already-generated project directory.
///
/// Rewrites the generator's task manifest, appends the ignore entries to
/// `.gitignore`, and materializes the registered file intents. Dependency
/// registrations are reported for the package manager to pick up; this
/// tool does not edit the package manifest.
fn run_overlay(options_path: &Path, project_dir: &Path, templates: Option<&Path>) -> Result<()> {
    let options = load_options(options_path)?;

    let tasks_path = project_dir.join(".projen").join("tasks.json");
    let mut tasks_file = load_tasks_file(&tasks_path)
        .with_context(|| format!("failed to load task manifest: {}", tasks_path.display()))?;

    let mut project = BaseProject::new(
        options.base().name(),
        std::mem::take(&mut tasks_file.tasks),
    );
    apply_overlay(&mut project, &options)?;

    tasks_file.tasks = project.tasks.clone();
    save_tasks_file(&tasks_path, &tasks_file)?;
    append_gitignore(project_dir, &project.gitignore)?;
    materialize(project_dir, templates, &project.files)?;

    if !project.deps.is_empty() {
        info!(deps = ?project.deps, "dependencies to register with the package manager");
    }
    info!(project = %project.name, tasks = project.tasks.len(), "overlay applied");
    Ok(())
}
