use crate::task::ContainerTask;
use crate::task::error::{Result, TaskError};
use crate::task::interface::TaskInterface;
use crate::task::settings::SerializationSettings;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Container section of a compiled template: which image to run and the
/// argument vector for its entrypoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub image: String,
    pub args: Vec<String>,
}

/// The persisted, serialized form of a task.
///
/// Compiled once from a [`ContainerTask`] when the owning workflow
/// definition is registered, then never mutated; each run instantiates
/// against this immutable record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub name: String,
    pub task_type: String,
    pub interface: TaskInterface,
    pub custom: Value,
    pub container: ContainerSpec,
    pub created_at: DateTime<Utc>,
}

impl TaskTemplate {
    /// Renders `task` into its persisted form under `settings`.
    pub fn compile(task: &dyn ContainerTask, settings: &SerializationSettings) -> Self {
        debug!(
            "compiling task template '{}' (type {})",
            task.name(),
            task.task_type()
        );
        TaskTemplate {
            name: task.name().to_string(),
            task_type: task.task_type().to_string(),
            interface: task.interface().clone(),
            custom: Value::Object(task.custom(settings)),
            container: ContainerSpec {
                image: task.container_image().to_string(),
                args: task.command(settings),
            },
            created_at: Utc::now(),
        }
    }

    // Load template from JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(TaskError::from_serde)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(TaskError::from_serde)
    }

    // Load template from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json_str = fs::read_to_string(path).map_err(TaskError::from_io)?;
        Self::from_json(&json_str)
    }
}
