//! Core UI functionality for TodoMatic.
//!
//! This module contains the building blocks every component relies on:
//!
//! - [`actions`] - Intents emitted by components and reduced by the root
//! - [`component`] - Base component trait and rendering abstraction
//! - [`event_handler`] - Terminal event source for the main loop
//!
//! Components turn key presses into [`Action`]s, pass them up through
//! [`Component::update`], and the root `AppComponent` is the only place that
//! mutates task and filter state.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, FocusRegion};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
