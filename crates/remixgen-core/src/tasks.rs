//! Task graph model shared with the external project generator.
//!
//! A task is a named, ordered sequence of steps; each step is either a
//! shell command or a spawn of another named task. The graph enforces
//! exactly-once semantics per task name: adding a duplicate name is an
//! error, and replacing always removes the previous step sequence first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SynthError;

/// A single step within a task.
///
/// Serializes to the generator's step form: `{"exec": "..."}` for shell
/// commands, `{"spawn": "..."}` for sub-invocations of another task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStep {
    /// Run a shell command.
    Exec(String),
    /// Run another task by name as a sub-invocation.
    Spawn(String),
}

/// A named task: an ordered sequence of steps exposed on the project's
/// command surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task name within the graph.
    pub name: String,

    /// Human-readable description, when the generator provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered steps.
    #[serde(default)]
    pub steps: Vec<TaskStep>,
}

impl Task {
    /// Create a task with a single shell-command step.
    pub fn exec(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            steps: vec![TaskStep::Exec(command.into())],
        }
    }

    /// Create a task with a single spawn step referencing another task.
    pub fn spawn(name: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            steps: vec![TaskStep::Spawn(task.into())],
        }
    }
}

/// Name-keyed task mapping with upsert semantics.
///
/// Keys are unique. Emission order is sorted name order, which keeps the
/// serialized form deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskGraph {
    tasks: BTreeMap<String, Task>,
}

impl TaskGraph {
    /// Create an empty task graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a task by name.
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    /// Returns true if a task with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Iterate over task names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }

    /// Number of tasks in the graph.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the graph has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Add a new task. The name must not already be present.
    ///
    /// # Errors
    ///
    /// Returns `SynthError::DuplicateTask` if the name is taken.
    pub fn add(&mut self, task: Task) -> Result<(), SynthError> {
        if self.tasks.contains_key(&task.name) {
            return Err(SynthError::DuplicateTask(task.name.clone()));
        }
        self.tasks.insert(task.name.clone(), task);
        Ok(())
    }

    /// Remove a task by name, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Task> {
        self.tasks.remove(name)
    }

    /// Replace an existing task with a new definition, returning the old one.
    ///
    /// The previous step sequence is removed first; replacement never
    /// appends. A missing name is an integration-contract break with the
    /// base generator and errors rather than creating the task.
    ///
    /// # Errors
    ///
    /// Returns `SynthError::MissingTask` if no task with that name exists.
    pub fn replace(&mut self, task: Task) -> Result<Task, SynthError> {
        let old = self
            .tasks
            .remove(&task.name)
            .ok_or_else(|| SynthError::MissingTask(task.name.clone()))?;
        self.tasks.insert(task.name.clone(), task);
        Ok(old)
    }
}
