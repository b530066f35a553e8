//! Icon service for managing different icon themes
//!
//! Task markers and filter indicators come in emoji, Unicode and ASCII
//! flavours so the list stays readable on limited terminals.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Task status icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub tasks_title: &'static str,
    pub filter_pressed: &'static str,
    pub filter_released: &'static str,
    pub editing: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                task_status: TaskStatusIcons {
                    pending: "🔳",
                    completed: "✅",
                },
                ui: UiIcons {
                    tasks_title: "📝",
                    filter_pressed: "🔘",
                    filter_released: "⚪",
                    editing: "✏️",
                },
            },
            IconTheme::Unicode => IconSet {
                task_status: TaskStatusIcons {
                    pending: "□",
                    completed: "✓",
                },
                ui: UiIcons {
                    tasks_title: "▶",
                    filter_pressed: "●",
                    filter_released: "○",
                    editing: "✎",
                },
            },
            IconTheme::Ascii => IconSet {
                task_status: TaskStatusIcons {
                    pending: "[ ]",
                    completed: "[X]",
                },
                ui: UiIcons {
                    tasks_title: ">",
                    filter_pressed: "(*)",
                    filter_released: "( )",
                    editing: "~",
                },
            },
        }
    }

    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task_status.pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().task_status.completed
    }

    /// Status marker for a task with the given completion state
    #[must_use]
    pub fn task_status(&self, completed: bool) -> &'static str {
        if completed {
            self.task_completed()
        } else {
            self.task_pending()
        }
    }

    #[must_use]
    pub fn tasks_title(&self) -> &'static str {
        self.icons().ui.tasks_title
    }

    #[must_use]
    pub fn filter_marker(&self, pressed: bool) -> &'static str {
        let ui = self.icons().ui;
        if pressed {
            ui.filter_pressed
        } else {
            ui.filter_released
        }
    }

    #[must_use]
    pub fn editing(&self) -> &'static str {
        self.icons().ui.editing
    }
}
