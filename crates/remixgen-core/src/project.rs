//! The externally generated base project, consumed through this surface.
//!
//! The generic generator constructs a [`BaseProject`] (name, default task
//! graph, ignore list); the overlay then mutates it in place. Registered
//! dependencies and file intents accumulate here until materialization.
//! [`load_tasks_file`] / [`save_tasks_file`] handle the generator's
//! on-disk task manifest for callers that post-process a generated tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::SynthError;
use crate::scaffold::FileWriteIntent;
use crate::tasks::TaskGraph;

/// Lint configuration surface exposed by the base project, when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintConfig {
    /// Shared config names the lint setup extends.
    #[serde(default)]
    pub extends: Vec<String>,

    /// Rule overrides, keyed by rule name.
    #[serde(default)]
    pub rules: BTreeMap<String, serde_json::Value>,
}

/// Base project object produced by the external generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseProject {
    /// Project name; deployment tasks derive their stack pattern from it.
    pub name: String,

    /// Named task graph.
    pub tasks: TaskGraph,

    /// Ignore-list patterns registered on the project.
    #[serde(default)]
    pub gitignore: Vec<String>,

    /// Runtime dependencies registered after base construction.
    #[serde(default)]
    pub deps: Vec<String>,

    /// Lint surface, when the generator set one up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lint: Option<LintConfig>,

    /// File write intents registered on the project.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileWriteIntent>,
}

impl BaseProject {
    /// Create a base project from a name and its default task graph.
    pub fn new(name: impl Into<String>, tasks: TaskGraph) -> Self {
        Self {
            name: name.into(),
            tasks,
            gitignore: Vec::new(),
            deps: Vec::new(),
            lint: None,
            files: Vec::new(),
        }
    }

    /// Register an ignore-list pattern.
    pub fn add_git_ignore(&mut self, pattern: impl Into<String>) {
        self.gitignore.push(pattern.into());
    }

    /// Register a runtime dependency specifier.
    pub fn add_dep(&mut self, spec: impl Into<String>) {
        self.deps.push(spec.into());
    }

    /// Register a file write intent.
    pub fn add_file(&mut self, intent: FileWriteIntent) {
        self.files.push(intent);
    }
}

// ── Task manifest I/O ────────────────────────────────────────

/// On-disk form of the generator's task manifest (`.projen/tasks.json`).
///
/// Only the task graph is interpreted; every other field the generator
/// wrote rides in the pass-through map and is written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TasksFile {
    /// Named task graph.
    #[serde(default)]
    pub tasks: TaskGraph,

    /// Generator fields not interpreted here.
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Load a [`TasksFile`] from the given path.
///
/// # Errors
///
/// Returns `SynthError::Io` if the file cannot be read.
/// Returns `SynthError::Json` if the content is not a valid task manifest.
#[instrument]
pub fn load_tasks_file(path: &Path) -> Result<TasksFile, SynthError> {
    let content = fs::read_to_string(path)?;
    let file: TasksFile = serde_json::from_str(&content)?;
    debug!(tasks = file.tasks.len(), "loaded task manifest");
    Ok(file)
}

/// Save a [`TasksFile`] to the given path, pretty-printed.
///
/// # Errors
///
/// Returns `SynthError::Io` if the file cannot be written.
#[instrument(skip(file))]
pub fn save_tasks_file(path: &Path, file: &TasksFile) -> Result<(), SynthError> {
    let mut json = serde_json::to_string_pretty(file)?;
    json.push('\n');
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved task manifest");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{Task, TaskStep};

    #[test]
    fn test_should_accumulate_registrations() {
        let mut project = BaseProject::new("hello", TaskGraph::new());

        project.add_git_ignore("/remix/.cache");
        project.add_git_ignore(".env");
        project.add_dep("tailwindcss");

        assert_eq!(project.gitignore, vec!["/remix/.cache", ".env"]);
        assert_eq!(project.deps, vec!["tailwindcss"]);
        assert!(project.lint.is_none());
        assert!(project.files.is_empty());
    }

    #[test]
    fn test_should_roundtrip_tasks_file_preserving_unknown_fields() {
        let dir = tempfile::TempDir::new().expect("should create temp dir");
        let path = dir.path().join("tasks.json");

        let json = r#"{
            "tasks": {
                "deploy": { "name": "deploy", "steps": [{ "exec": "cdk deploy" }] }
            },
            "env": { "PATH": "$(npx -c \"node --print process.env.PATH\")" },
            "//": "~~ Generated by projen. To modify, edit .projenrc.ts and run \"npx projen\"."
        }"#;
        std::fs::write(&path, json).expect("should write manifest");

        let mut file = load_tasks_file(&path).expect("should load manifest");
        assert_eq!(
            file.tasks
                .get("deploy")
                .map(|t| t.steps.clone())
                .expect("should find deploy"),
            vec![TaskStep::Exec("cdk deploy".to_owned())]
        );

        file.tasks
            .add(Task::exec("remix:build", "remix build"))
            .expect("should add task");
        save_tasks_file(&path, &file).expect("should save manifest");

        let reloaded = load_tasks_file(&path).expect("should reload manifest");
        assert!(reloaded.tasks.contains("remix:build"));
        assert!(
            reloaded.rest.get("env").is_some(),
            "generator env block should survive the rewrite"
        );
        assert!(
            reloaded.rest.get("//").is_some(),
            "generator marker comment should survive the rewrite"
        );
    }

    #[test]
    fn test_should_fail_loading_missing_tasks_file() {
        let dir = tempfile::TempDir::new().expect("should create temp dir");
        let result = load_tasks_file(&dir.path().join("absent.json"));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), SynthError::Io(_)));
    }

    #[test]
    fn test_should_fail_loading_invalid_tasks_file() {
        let dir = tempfile::TempDir::new().expect("should create temp dir");
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "not json").expect("should write file");

        let result = load_tasks_file(&path);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), SynthError::Json(_)));
    }
}
