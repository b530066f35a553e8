use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Border color for the region that owns keyboard focus
pub const FOCUS_COLOR: Color = Color::Yellow;
/// Border color for every other region
pub const IDLE_COLOR: Color = Color::Gray;

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Bordered block whose color tracks keyboard focus
pub fn create_region_block(title: &str, focused: bool) -> Block<'static> {
    let color = if focused { FOCUS_COLOR } else { IDLE_COLOR };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(color))
}

/// Creates an input field with a visual cursor, or a dimmed placeholder when empty and unfocused
pub fn create_input_paragraph<'a>(
    input_buffer: &'a str,
    field_title: &str,
    placeholder: &'a str,
    focused: bool,
) -> Paragraph<'a> {
    let content = if focused {
        Line::from(vec![
            Span::styled(input_buffer, Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(FOCUS_COLOR)),
        ])
    } else if input_buffer.is_empty() {
        Line::from(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(input_buffer, Style::default().fg(Color::White)))
    };

    Paragraph::new(content).block(create_region_block(field_title, focused))
}

/// Renders a hint line such as "Enter add • Tab next"
pub fn create_instructions_paragraph(hints: &str) -> Paragraph<'_> {
    let mut spans = Vec::new();
    for (index, hint) in hints.split(" • ").enumerate() {
        if index > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        match hint.split_once(' ') {
            Some((key, desc)) => {
                spans.push(Span::styled(
                    key,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
            }
            None => spans.push(Span::styled(hint, Style::default().fg(Color::Gray))),
        }
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
