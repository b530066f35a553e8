use crate::tasks::heading_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Count heading above the list. Focus only reaches it programmatically.
#[derive(Debug, Clone, Default)]
pub struct ListHeading {
    count: usize,
    focused: bool,
}

impl ListHeading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, count: usize, focused: bool) {
        self.count = count;
        self.focused = focused;
    }

    pub fn text(&self) -> String {
        heading_text(self.count)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn render(&self, f: &mut Frame, rect: Rect) {
        let line = if self.focused {
            Line::from(vec![
                Span::styled("▸ ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    self.text(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                ),
            ])
        } else {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD)),
            ])
        };

        f.render_widget(Paragraph::new(line), rect);
    }
}
