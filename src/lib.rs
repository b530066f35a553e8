//! TodoMatic - a terminal to-do list
//!
//! Add, toggle, rename, delete and filter tasks, with a heading that
//! announces how many tasks the current view holds.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`tasks`] - Task model, filters and the in-memory collection
//! * [`ui`] - Terminal user interface components
//! * [`logger`] - In-app and file logging

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Task model and list transformations
pub mod tasks;

/// Terminal user interface components and rendering
pub mod ui;

pub use tasks::{Filter, Task, TaskStore};
