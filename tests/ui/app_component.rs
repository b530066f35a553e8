use crate::support::{app_with, press, render, terminal, type_text};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todomatic::tasks::{Filter, Task};
use todomatic::ui::core::{Action, DialogType, FocusRegion};
use todomatic::ui::AppState;

fn eat() -> Vec<Task> {
    vec![Task::new("todo-1", "Eat", false)]
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert!(state.tasks.is_empty());
    assert_eq!(state.filter, Filter::All);
    assert_eq!(state.focus, FocusRegion::Form);
    assert_eq!(state.heading_text(), "0 tasks remaining");
}

#[test]
fn test_eat_sleep_scenario() {
    let mut app = app_with(eat());
    let mut terminal = terminal();
    render(&mut terminal, &mut app);

    // Blank submission is ignored
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().tasks.len(), 1);
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().tasks.len(), 1);
    for _ in 0..3 {
        press(&mut app, KeyCode::Backspace);
    }

    // Creating "Sleep"
    type_text(&mut app, "Sleep");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().tasks.len(), 2);
    assert_eq!(app.form().input(), "");
    let sleep = &app.state().tasks.tasks()[1];
    assert_eq!(sleep.name, "Sleep");
    assert!(!sleep.completed);
    assert_ne!(sleep.id, "todo-1");
    render(&mut terminal, &mut app);
    assert_eq!(app.focus(), FocusRegion::Form, "adding never moves focus");
    assert!(app.form().is_focused());

    // Toggle "Eat" from the list
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), FocusRegion::List);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.state().tasks.get("todo-1").unwrap().completed);
    render(&mut terminal, &mut app);
    assert_eq!(app.focus(), FocusRegion::List, "toggling never moves focus");

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.state().filter, Filter::Active);
    assert!(render(&mut terminal, &mut app).contains("1 task remaining"));

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.state().filter, Filter::Completed);
    assert!(render(&mut terminal, &mut app).contains("1 task remaining"));

    press(&mut app, KeyCode::Char('1'));
    assert!(render(&mut terminal, &mut app).contains("2 tasks remaining"));

    // Delete "Eat": count drops from 2 to 1 and focus moves to the heading
    assert_eq!(app.task_list().selected_item().unwrap().id(), "todo-1");
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.state().tasks.len(), 1);
    assert_eq!(app.focus(), FocusRegion::List, "focus moves only after the next render");

    let screen = render(&mut terminal, &mut app);
    assert_eq!(app.focus(), FocusRegion::Heading);
    assert!(app.heading().is_focused());
    assert!(!app.form().is_focused());
    assert!(screen.contains("▸ 1 task remaining"));
}

#[test]
fn test_heading_counts_filtered_view() {
    let mut app = app_with(vec![
        Task::new("todo-0", "Eat", true),
        Task::new("todo-1", "Sleep", false),
        Task::new("todo-2", "Repeat", false),
    ]);

    assert_eq!(app.state().heading_text(), "3 tasks remaining");
    app.dispatch(Action::SelectFilter(Filter::Active));
    assert_eq!(app.state().heading_text(), "2 tasks remaining");
    app.dispatch(Action::SelectFilter(Filter::Completed));
    assert_eq!(app.state().heading_text(), "1 task remaining");
    assert_eq!(app.task_list().items.len(), 1);
}

#[test]
fn test_delete_of_unknown_id_keeps_focus() {
    let mut app = app_with(eat());
    let mut terminal = terminal();
    render(&mut terminal, &mut app);

    app.dispatch(Action::DeleteTask("todo-404".to_string()));
    app.dispatch(Action::ToggleTask("todo-404".to_string()));
    render(&mut terminal, &mut app);

    assert_eq!(app.state().tasks.tasks(), eat().as_slice());
    assert_eq!(app.focus(), FocusRegion::Form);
}

#[test]
fn test_first_render_does_not_move_focus() {
    let mut app = app_with(Vec::new());
    assert!(!app.run_effects());
    assert_eq!(app.focus(), FocusRegion::Form);
}

#[test]
fn test_rename_flow() {
    let mut app = app_with(eat());
    app.dispatch(Action::Focus(FocusRegion::List));

    // Cancel leaves the name alone
    press(&mut app, KeyCode::Char('e'));
    assert!(app.task_list().is_editing());
    type_text(&mut app, "xyz");
    press(&mut app, KeyCode::Esc);
    assert!(!app.task_list().is_editing());
    assert_eq!(app.state().tasks.get("todo-1").unwrap().name, "Eat");
    assert!(!app.should_quit());

    // Keys typed into the editor are text, not shortcuts
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, " q2d ");
    press(&mut app, KeyCode::Enter);
    assert!(!app.should_quit());
    assert_eq!(app.state().filter, Filter::All);
    assert_eq!(app.state().tasks.get("todo-1").unwrap().name, "Eat q2d ");

    // Empty names are accepted on rename
    press(&mut app, KeyCode::Char('e'));
    for _ in 0..8 {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().tasks.get("todo-1").unwrap().name, "");
    assert_eq!(app.state().tasks.len(), 1);
}

#[test]
fn test_rename_and_shrinking_filter_keep_focus() {
    let mut app = app_with(eat());
    let mut terminal = terminal();
    app.dispatch(Action::Focus(FocusRegion::List));
    render(&mut terminal, &mut app);

    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "!");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().tasks.get("todo-1").unwrap().name, "Eat!");
    render(&mut terminal, &mut app);
    assert_eq!(app.focus(), FocusRegion::List, "renaming never moves focus");

    // The visible count drops to zero but the collection keeps its size
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('2'));
    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("0 tasks remaining"));
    assert!(!screen.contains("▸ 0 tasks remaining"));
    assert_eq!(app.focus(), FocusRegion::List);
    assert!(!app.heading().is_focused());
}

#[test]
fn test_filter_bar_selection() {
    let mut app = app_with(eat());
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), FocusRegion::Filters);

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().filter, Filter::Completed);

    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.state().filter, Filter::Active);
}

#[test]
fn test_focus_cycle_skips_heading() {
    let mut app = app_with(eat());
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(app.focus());
        press(&mut app, KeyCode::Tab);
    }
    assert_eq!(
        seen,
        vec![FocusRegion::Form, FocusRegion::Filters, FocusRegion::List, FocusRegion::Form]
    );

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), FocusRegion::List);
}

#[test]
fn test_typing_in_form_does_not_trigger_shortcuts() {
    let mut app = app_with(eat());
    type_text(&mut app, "q1?G");
    assert!(!app.should_quit());
    assert_eq!(app.state().filter, Filter::All);
    assert!(!app.dialog().is_visible());
    assert_eq!(app.form().input(), "q1?G");
}

#[test]
fn test_dialogs_and_quit() {
    let mut app = app_with(eat());
    let mut terminal = terminal();
    app.dispatch(Action::Focus(FocusRegion::List));

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));
    assert!(render(&mut terminal, &mut app).contains("Help"));
    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Logs));
    assert!(render(&mut terminal, &mut app).contains("AppComponent: Started with 1 tasks"));
    press(&mut app, KeyCode::Char('G'));
    assert!(!app.dialog().is_visible());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_form() {
    let mut app = app_with(eat());
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_icon_theme_cycles() {
    let mut app = app_with(eat());
    let mut terminal = terminal();
    app.dispatch(Action::Focus(FocusRegion::List));
    assert!(render(&mut terminal, &mut app).contains("[ ] Eat"));

    press(&mut app, KeyCode::Char('i'));
    assert!(render(&mut terminal, &mut app).contains("□ Eat"));
}

#[test]
fn test_mutations_are_logged() {
    let mut app = app_with(eat());
    app.dispatch(Action::ToggleTask("todo-1".to_string()));
    app.dispatch(Action::EditTask {
        id: "todo-9".to_string(),
        name: "Nap".to_string(),
    });

    let logs = app.logger().get_logs();
    assert!(logs[0].contains("Cannot rename - task todo-9 not found"));
    assert!(logs[1].contains("Toggled todo-1 (completed: true)"));
}
