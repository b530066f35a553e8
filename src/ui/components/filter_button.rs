//! Filter buttons and the group that lays them out.

use crate::constants::FILTERS_TITLE;
use crate::icons::IconService;
use crate::tasks::Filter;
use crate::ui::components::common::create_region_block;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One stateless filter button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: Filter,
    pub pressed: bool,
}

impl FilterButton {
    pub fn new(filter: Filter, active: Filter) -> Self {
        Self {
            filter,
            pressed: filter == active,
        }
    }

    pub fn activate(&self) -> Action {
        Action::SelectFilter(self.filter)
    }

    /// Render as `( ) Active tasks`; `highlighted` marks keyboard focus
    pub fn to_span(&self, icons: &IconService, highlighted: bool) -> Span<'static> {
        let mut style = if self.pressed {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if highlighted {
            style = style.add_modifier(Modifier::REVERSED);
        }

        Span::styled(
            format!(" {} {} tasks ", icons.filter_marker(self.pressed), self.filter.name()),
            style,
        )
    }
}

/// The three filter buttons in declared order
#[derive(Debug, Clone, Default)]
pub struct FilterBar {
    active: Filter,
    focused_index: usize,
    focused: bool,
    icons: IconService,
}

impl FilterBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, active: Filter, icons: IconService) {
        self.active = active;
        self.icons = icons;
    }

    /// Keyboard focus lands on the pressed button when the group gains focus
    pub fn set_focused(&mut self, focused: bool) {
        if focused && !self.focused {
            self.focused_index = self.active.index();
        }
        self.focused = focused;
    }

    pub fn buttons(&self) -> Vec<FilterButton> {
        Filter::ALL
            .iter()
            .map(|filter| FilterButton::new(*filter, self.active))
            .collect()
    }

    pub fn focused_filter(&self) -> Filter {
        Filter::ALL[self.focused_index]
    }
}

impl Component for FilterBar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let count = Filter::ALL.len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.focused_index = (self.focused_index + count - 1) % count;
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focused_index = (self.focused_index + 1) % count;
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.buttons()[self.focused_index].activate(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut spans = Vec::new();
        for (index, button) in self.buttons().iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(button.to_span(&self.icons, self.focused && index == self.focused_index));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(create_region_block(FILTERS_TITLE, self.focused));
        f.render_widget(paragraph, rect);
    }
}
