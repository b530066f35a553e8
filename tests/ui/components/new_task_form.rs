use crate::support::key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todomatic::ui::components::NewTaskForm;
use todomatic::ui::core::{Action, Component, FocusRegion};

fn type_into(form: &mut NewTaskForm, text: &str) {
    for c in text.chars() {
        assert_eq!(form.handle_key_events(key(KeyCode::Char(c))), Action::None);
    }
}

#[test]
fn test_blank_submission_is_rejected() {
    let mut form = NewTaskForm::new();
    assert_eq!(form.submit(), Action::None);

    type_into(&mut form, "  \t ");
    assert_eq!(form.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(form.input(), "  \t ", "rejected input stays in the field");
}

#[test]
fn test_submission_emits_raw_name_and_clears() {
    let mut form = NewTaskForm::new();
    type_into(&mut form, " Sleep ");

    assert_eq!(
        form.handle_key_events(key(KeyCode::Enter)),
        Action::CreateTask {
            name: " Sleep ".to_string()
        }
    );
    assert_eq!(form.input(), "");
}

#[test]
fn test_editing_keys() {
    let mut form = NewTaskForm::new();
    type_into(&mut form, "Eatx");
    form.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(form.input(), "Eat");

    // Control chords are not text
    form.handle_key_events(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(form.input(), "Eat");

    assert_eq!(
        form.handle_key_events(key(KeyCode::Esc)),
        Action::Focus(FocusRegion::List)
    );
}
