//! Reusable UI components

pub mod common;

// Component architecture
pub mod dialog_component;
pub mod filter_button;
pub mod list_heading;
pub mod new_task_form;
pub mod task_item;
pub mod task_list_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use filter_button::{FilterBar, FilterButton};
pub use list_heading::ListHeading;
pub use new_task_form::NewTaskForm;
pub use task_item::{RowMode, TaskItem};
pub use task_list_component::TaskListComponent;
