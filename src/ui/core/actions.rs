use crate::tasks::Filter;

/// Screen region that currently receives key presses.
///
/// `Heading` is only ever focused programmatically (after a task is removed);
/// Tab cycling skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusRegion {
    #[default]
    Form,
    Filters,
    Heading,
    List,
}

impl FocusRegion {
    pub fn next(self) -> Self {
        match self {
            FocusRegion::Form => FocusRegion::Filters,
            FocusRegion::Filters => FocusRegion::List,
            FocusRegion::Heading => FocusRegion::List,
            FocusRegion::List => FocusRegion::Form,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FocusRegion::Form => FocusRegion::List,
            FocusRegion::Filters => FocusRegion::Form,
            FocusRegion::Heading => FocusRegion::Filters,
            FocusRegion::List => FocusRegion::Filters,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    Focus(FocusRegion),
    FocusNext,
    FocusPrevious,

    // Task intents
    CreateTask { name: String },
    ToggleTask(String),
    DeleteTask(String),
    EditTask { id: String, name: String },
    SelectFilter(Filter),

    // UI operations
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,
    DialogScrollUp,
    DialogScrollDown,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
