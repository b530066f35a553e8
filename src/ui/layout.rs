//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas of the main view, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppAreas {
    pub title: Rect,
    pub form: Rect,
    pub filters: Rect,
    pub heading: Rect,
    pub list: Rect,
    pub footer: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into title, form, filter group, heading, list and footer
    #[must_use]
    pub fn app_layout(area: Rect) -> AppAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        AppAreas {
            title: chunks[0],
            form: chunks[1],
            filters: chunks[2],
            heading: chunks[3],
            list: chunks[4],
            footer: chunks[5],
        }
    }

    /// Helper function to create a centered rectangle
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
