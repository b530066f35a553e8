use crate::constants::EDIT_FIELD_PREFIX;
use crate::icons::IconService;
use crate::tasks::Task;
use crate::ui::core::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Local edit state of a single row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing { buffer: String },
}

/// One task row
#[derive(Debug, Clone)]
pub struct TaskItem {
    pub task: Task,
    pub mode: RowMode,
}

impl TaskItem {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            mode: RowMode::Viewing,
        }
    }

    pub fn id(&self) -> &str {
        &self.task.id
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, RowMode::Editing { .. })
    }

    pub fn toggle(&self) -> Action {
        Action::ToggleTask(self.task.id.clone())
    }

    pub fn delete(&self) -> Action {
        Action::DeleteTask(self.task.id.clone())
    }

    /// Viewing -> Editing, with the field prefilled from the current name
    pub fn begin_edit(&mut self) {
        if !self.is_editing() {
            self.mode = RowMode::Editing {
                buffer: self.task.name.clone(),
            };
        }
    }

    /// Editing -> Viewing, emitting the edited text exactly as typed
    pub fn commit_edit(&mut self) -> Action {
        match std::mem::take(&mut self.mode) {
            RowMode::Editing { buffer } => Action::EditTask {
                id: self.task.id.clone(),
                name: buffer,
            },
            RowMode::Viewing => Action::None,
        }
    }

    /// Editing -> Viewing, discarding the edit buffer
    pub fn cancel_edit(&mut self) {
        self.mode = RowMode::Viewing;
    }

    /// Key handling while the inline editor is open
    pub fn handle_edit_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Esc => {
                self.cancel_edit();
                Action::None
            }
            KeyCode::Backspace => {
                if let RowMode::Editing { buffer } = &mut self.mode {
                    buffer.pop();
                }
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                if let RowMode::Editing { buffer } = &mut self.mode {
                    buffer.push(c);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    pub fn render(&self, icons: &IconService) -> ListItem<'static> {
        let mut line_spans = Vec::new();

        match &self.mode {
            RowMode::Viewing => {
                let (status_style, content_style) = if self.task.completed {
                    (
                        Style::default().fg(Color::Green),
                        Style::default().fg(Color::Green).add_modifier(Modifier::CROSSED_OUT),
                    )
                } else {
                    (Style::default().fg(Color::White), Style::default().fg(Color::White))
                };

                line_spans.push(Span::styled(
                    format!("{} ", icons.task_status(self.task.completed)),
                    status_style,
                ));
                line_spans.push(Span::styled(self.task.name.clone(), content_style));
            }
            RowMode::Editing { buffer } => {
                line_spans.push(Span::styled(
                    format!("{} ", icons.editing()),
                    Style::default().fg(Color::Yellow),
                ));
                line_spans.push(Span::styled(
                    format!("{} {}: ", EDIT_FIELD_PREFIX, self.task.name),
                    Style::default().fg(Color::Gray),
                ));
                line_spans.push(Span::styled(
                    buffer.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED),
                ));
                line_spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
            }
        }

        ListItem::new(Line::from(line_spans))
    }
}
