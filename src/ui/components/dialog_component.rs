//! Modal dialogs: key binding help and the in-app log viewer.

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::components::common::create_dialog_block;
use crate::ui::core::{Action, Component, DialogType};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

const HELP_BINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "Move focus between form, filters and list"),
    ("a", "Focus the new task form"),
    ("Enter", "Add task (form), show filter, toggle task (list)"),
    ("j / k, ↑ / ↓", "Move the task selection"),
    ("Space", "Toggle the selected task"),
    ("e", "Rename the selected task (Enter saves, Esc cancels)"),
    ("d / Delete", "Delete the selected task"),
    ("1 / 2 / 3", "Show all, active or completed tasks"),
    ("i", "Cycle icon theme"),
    ("G", "Show logs"),
    ("q / Ctrl+C", "Quit"),
];

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: u16,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match self.dialog_type {
            Some(DialogType::Help) => HELP_BINDINGS
                .iter()
                .map(|(keys, desc)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:>16}  ", keys),
                            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(*desc, Style::default().fg(Color::White)),
                    ])
                })
                .collect(),
            Some(DialogType::Logs) => {
                let logs = self.logger.get_logs();
                if logs.is_empty() {
                    vec![Line::from(Span::styled(
                        "No log entries yet",
                        Style::default().fg(Color::DarkGray),
                    ))]
                } else {
                    logs.into_iter().map(Line::from).collect()
                }
            }
            None => Vec::new(),
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match (self.dialog_type, key.code) {
            (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Action::HideDialog,
            (Some(DialogType::Help), KeyCode::Char('?')) => Action::HideDialog,
            (Some(DialogType::Logs), KeyCode::Char('G')) => Action::HideDialog,
            (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Action::DialogScrollUp,
            (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Action::DialogScrollDown,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_offset = 0;
                Action::None
            }
            Action::DialogScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            Action::DialogScrollDown => {
                let max = self.lines().len().saturating_sub(1) as u16;
                self.scroll_offset = (self.scroll_offset + 1).min(max);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = match self.dialog_type {
            Some(DialogType::Help) => DIALOG_TITLE_HELP,
            Some(DialogType::Logs) => DIALOG_TITLE_LOGS,
            None => return,
        };

        let area = LayoutManager::centered_rect(80, 70, rect);
        let paragraph = Paragraph::new(self.lines())
            .block(create_dialog_block(title, Color::Cyan))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));

        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}
