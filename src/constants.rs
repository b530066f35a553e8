//! Constants used throughout the application
//!
//! This module centralizes UI text, file names and other constant values.

// Application
pub const APP_NAME: &str = "todomatic";
pub const DEFAULT_TITLE: &str = "TodoMatic";
/// Longest title that still fits the header line
pub const TITLE_MAX_LEN: usize = 40;

// Files
pub const LOCAL_CONFIG_FILE: &str = "todomatic.toml";
pub const XDG_CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "todomatic.log";

// Form
pub const FORM_TITLE: &str = "What needs to be done?";
pub const FORM_PLACEHOLDER: &str = "Type a task name and press Enter";

// Filters
pub const FILTERS_TITLE: &str = "Show";

// Task list
pub const LIST_TITLE: &str = "Tasks";
pub const EMPTY_LIST_MESSAGE: &str = "Nothing to show here. Press 'a' to add a task.";
pub const EDIT_FIELD_PREFIX: &str = "New name for";

// Footer hints per focus region
pub const HINTS_FORM: &str = "Enter add • Tab next • Esc leave";
pub const HINTS_FILTERS: &str = "←/→ move • Enter show • 1/2/3 quick filter • Tab next";
pub const HINTS_LIST: &str = "j/k move • Space toggle • e edit • d delete • Tab next";
pub const HINTS_EDITING: &str = "Enter save • Esc cancel";
pub const HINTS_HEADING: &str = "Tab list • a add • ? help • q quit";

// Dialogs
pub const DIALOG_TITLE_HELP: &str = " Help - Press 'Esc' or '?' to close ";
pub const DIALOG_TITLE_LOGS: &str = " Logs - Press 'Esc' or 'G' to close ";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_STARTUP: &str = "❌ Error: could not start todomatic";
