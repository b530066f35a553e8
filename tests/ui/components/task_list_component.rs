use crate::support::key;
use crossterm::event::KeyCode;
use todomatic::icons::IconService;
use todomatic::tasks::Task;
use todomatic::ui::components::TaskListComponent;
use todomatic::ui::core::{Action, Component};

fn tasks() -> Vec<Task> {
    vec![
        Task::new("todo-0", "Eat", true),
        Task::new("todo-1", "Sleep", false),
        Task::new("todo-2", "Repeat", false),
    ]
}

#[test]
fn test_navigation_wraps() {
    let mut list = TaskListComponent::new();
    list.update_data(tasks(), IconService::default());

    let action = list.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(action, Action::PreviousTask);
    assert_eq!(list.update(action), Action::None);
    assert_eq!(list.selected_item().unwrap().id(), "todo-2");

    let action = list.handle_key_events(key(KeyCode::Down));
    list.update(action);
    assert_eq!(list.selected_item().unwrap().id(), "todo-0");
}

#[test]
fn test_row_intents() {
    let mut list = TaskListComponent::new();
    list.update_data(tasks(), IconService::default());
    list.update(Action::NextTask);

    assert_eq!(
        list.handle_key_events(key(KeyCode::Char(' '))),
        Action::ToggleTask("todo-1".to_string())
    );
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('d'))),
        Action::DeleteTask("todo-1".to_string())
    );
    assert_eq!(list.handle_key_events(key(KeyCode::Char('e'))), Action::None);
    assert!(list.items[1].is_editing());
}

#[test]
fn test_update_keeps_row_modes_by_id() {
    let mut list = TaskListComponent::new();
    list.update_data(tasks(), IconService::default());
    list.update(Action::NextTask);
    list.handle_key_events(key(KeyCode::Char('e')));

    // "Eat" disappears (e.g. filtered out) and a new task arrives
    let mut next = tasks();
    next.remove(0);
    next.push(Task::new("todo-3", "Nap", false));
    list.update_data(next, IconService::default());

    let ids: Vec<&str> = list.items.iter().map(|item| item.id()).collect();
    assert_eq!(ids, vec!["todo-1", "todo-2", "todo-3"]);
    assert!(list.items[0].is_editing(), "Sleep keeps its open editor");
    assert!(!list.items[2].is_editing(), "new rows start in viewing mode");
}

#[test]
fn test_selection_clamped_when_rows_vanish() {
    let mut list = TaskListComponent::new();
    list.update_data(tasks(), IconService::default());
    list.update(Action::PreviousTask);
    assert_eq!(list.selected_index, 2);

    list.update_data(tasks().into_iter().take(1).collect(), IconService::default());
    assert_eq!(list.selected_index, 0);

    list.update_data(Vec::new(), IconService::default());
    assert!(list.selected_item().is_none());
    assert_eq!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None);
}
