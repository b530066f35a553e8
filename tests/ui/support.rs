#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use todomatic::config::Config;
use todomatic::logger::Logger;
use todomatic::tasks::Task;
use todomatic::ui::renderer::draw_frame;
use todomatic::ui::AppComponent;

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn app_with(tasks: Vec<Task>) -> AppComponent {
    AppComponent::new(tasks, &Config::default(), Logger::new())
}

pub fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).unwrap()
}

pub fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_key(key(code));
}

pub fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Draw a frame (running post-render effects) and return the screen as text
pub fn render(terminal: &mut Terminal<TestBackend>, app: &mut AppComponent) -> String {
    draw_frame(terminal, app).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
