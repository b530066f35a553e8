use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Take over the terminal and run the app until it asks to quit
pub async fn run_app(mut app: AppComponent) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draw one frame, then run the post-render effects.
///
/// Effects may change state (focus moves to the heading after a delete), in
/// which case a second frame is drawn so the screen reflects it.
pub fn draw_frame<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppComponent) -> anyhow::Result<()> {
    terminal.draw(|f| {
        let area = f.area();
        app.render(f, area);
    })?;
    if app.run_effects() {
        terminal.draw(|f| {
            let area = f.area();
            app.render(f, area);
        })?;
    }
    Ok(())
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;
    let mut pending_resize = false;

    loop {
        if needs_render {
            draw_frame(terminal, app)?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                app.handle_event(EventType::Key(key));
                needs_render = true;
            }
            EventType::Resize(_, _) => pending_resize = true,
            EventType::Tick | EventType::Other => {}
        }

        // Bursts of resize events are coalesced into one frame per frame budget
        if pending_resize && event_handler.should_render() {
            pending_resize = false;
            needs_render = true;
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
