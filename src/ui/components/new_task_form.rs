//! Creation form: a single input line that emits [`Action::CreateTask`].

use crate::constants::{FORM_PLACEHOLDER, FORM_TITLE};
use crate::ui::components::common::create_input_paragraph;
use crate::ui::core::{Action, Component, FocusRegion};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

#[derive(Debug, Clone, Default)]
pub struct NewTaskForm {
    input_buffer: String,
    focused: bool,
}

impl NewTaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input_buffer
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Emit a creation intent for the current input.
    ///
    /// Blank input is rejected and left in place; otherwise the raw input is
    /// sent and the field is cleared.
    pub fn submit(&mut self) -> Action {
        if self.input_buffer.trim().is_empty() {
            return Action::None;
        }

        let name = std::mem::take(&mut self.input_buffer);
        Action::CreateTask { name }
    }
}

impl Component for NewTaskForm {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Focus(FocusRegion::List),
            KeyCode::Backspace => {
                self.input_buffer.pop();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.input_buffer.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let input = create_input_paragraph(&self.input_buffer, FORM_TITLE, FORM_PLACEHOLDER, self.focused);
        f.render_widget(input, rect);
    }
}
