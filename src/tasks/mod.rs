//! Task model and the in-memory task collection.
//!
//! Everything in here is pure data manipulation: the UI layer owns a
//! [`TaskStore`] and reduces user intents into calls on it.

pub mod filter;
pub mod seed;
pub mod store;

pub use filter::Filter;
pub use seed::{default_tasks, load_tasks_from_file, parse_tasks, SeedError};
pub use store::{heading_text, PreviousValue, TaskStore};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix shared by every generated task id
pub const TASK_ID_PREFIX: &str = "todo-";

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, name: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed,
        }
    }

    /// Create a fresh, not yet completed task with a generated id
    pub fn with_generated_id(name: impl Into<String>) -> Self {
        Self::new(generate_task_id(), name, false)
    }
}

/// Generate a new unique task id (`todo-<uuid>`)
pub fn generate_task_id() -> String {
    format!("{}{}", TASK_ID_PREFIX, Uuid::new_v4().simple())
}
