//! Initial task list handed to the app at startup

use super::Task;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read task file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid task JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate task id '{0}'")]
    DuplicateId(String),
}

/// Tasks shown when no task file is configured
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task::new("todo-0", "Eat", true),
        Task::new("todo-1", "Sleep", false),
        Task::new("todo-2", "Repeat", false),
    ]
}

/// Parse a JSON array of `{id, name, completed}` records
pub fn parse_tasks(json: &str) -> Result<Vec<Task>, SeedError> {
    let tasks: Vec<Task> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for task in &tasks {
        if !seen.insert(task.id.as_str()) {
            return Err(SeedError::DuplicateId(task.id.clone()));
        }
    }

    Ok(tasks)
}

pub fn load_tasks_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, SeedError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tasks(&content)
}
