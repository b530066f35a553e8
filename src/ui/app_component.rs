use crate::config::Config;
use crate::constants::{HINTS_EDITING, HINTS_FILTERS, HINTS_FORM, HINTS_HEADING, HINTS_LIST};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::tasks::{heading_text, Filter, PreviousValue, Task, TaskStore};
use crate::ui::components::common::create_instructions_paragraph;
use crate::ui::components::{DialogComponent, FilterBar, ListHeading, NewTaskForm, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType, FocusRegion},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tasks: TaskStore,
    pub filter: Filter,
    pub focus: FocusRegion,
    pub title: String,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, title: String) -> Self {
        Self {
            tasks: TaskStore::new(tasks),
            title,
            ..Default::default()
        }
    }

    /// Tasks visible under the current filter
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.derive_view(self.filter)
    }

    pub fn heading_text(&self) -> String {
        heading_text(self.visible_tasks().len())
    }
}

/// Root component: owns the task collection and filter, reduces every intent
pub struct AppComponent {
    // Component composition
    form: NewTaskForm,
    filter_bar: FilterBar,
    heading: ListHeading,
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    previous_task_count: PreviousValue<usize>,

    // Services
    icons: IconService,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(tasks: Vec<Task>, config: &Config, logger: Logger) -> Self {
        let mut app = Self {
            form: NewTaskForm::new(),
            filter_bar: FilterBar::new(),
            heading: ListHeading::new(),
            task_list: TaskListComponent::new(),
            dialog: DialogComponent::new(logger.clone()),
            state: AppState::new(tasks, config.ui.title.clone()),
            previous_task_count: PreviousValue::new(),
            icons: IconService::new(config.ui.icon_theme),
            logger,
            should_quit: false,
        };
        app.logger.log(format!(
            "AppComponent: Started with {} tasks",
            app.state.tasks.len()
        ));
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn focus(&self) -> FocusRegion {
        self.state.focus
    }

    pub fn form(&self) -> &NewTaskForm {
        &self.form
    }

    pub fn heading(&self) -> &ListHeading {
        &self.heading
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Push the current state down into the child components
    fn sync_component_data(&mut self) {
        let focus = self.state.focus;
        let visible: Vec<Task> = self.state.visible_tasks().into_iter().cloned().collect();

        self.form.set_focused(focus == FocusRegion::Form);

        self.filter_bar.update_data(self.state.filter, self.icons.clone());
        self.filter_bar.set_focused(focus == FocusRegion::Filters);

        self.heading.update_data(visible.len(), focus == FocusRegion::Heading);

        self.task_list.update_data(visible, self.icons.clone());
        self.task_list.set_focused(focus == FocusRegion::List);
    }

    /// Whether the focused widget is currently capturing typed text
    fn captures_text(&self) -> bool {
        self.state.focus == FocusRegion::Form || self.task_list.is_editing()
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.logger.log("Global key: quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('a') => Action::Focus(FocusRegion::Form),
            KeyCode::Char('1') => Action::SelectFilter(Filter::All),
            KeyCode::Char('2') => Action::SelectFilter(Filter::Active),
            KeyCode::Char('3') => Action::SelectFilter(Filter::Completed),
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Route a key press to the dialog, the focused region, then global shortcuts
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if !self.task_list.is_editing() {
            match key.code {
                KeyCode::Tab => return Action::FocusNext,
                KeyCode::BackTab => return Action::FocusPrevious,
                _ => {}
            }
        }

        // Checked before routing: Esc ends an edit and must not fall through to quit
        let captured = self.captures_text();
        let action = match self.state.focus {
            FocusRegion::Form => self.form.handle_key_events(key),
            FocusRegion::Filters => self.filter_bar.handle_key_events(key),
            FocusRegion::List => self.task_list.handle_key_events(key),
            FocusRegion::Heading => Action::None,
        };

        if action != Action::None || captured {
            action
        } else {
            self.handle_global_key(key)
        }
    }

    /// Reduce app-level actions into state changes
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::CreateTask { name } => {
                let id = self.state.tasks.add(&name);
                self.logger.log(format!("Task: Created '{}' (ID: {})", name, id));
            }
            Action::ToggleTask(id) => {
                if self.state.tasks.toggle(&id) {
                    let completed = self.state.tasks.get(&id).is_some_and(|task| task.completed);
                    self.logger
                        .log(format!("Task: Toggled {} (completed: {})", id, completed));
                } else {
                    self.logger.log(format!("Task: Cannot toggle - task {} not found", id));
                }
            }
            Action::DeleteTask(id) => {
                if self.state.tasks.remove(&id) {
                    self.logger.log(format!("Task: Deleted {}", id));
                } else {
                    self.logger.log(format!("Task: Cannot delete - task {} not found", id));
                }
            }
            Action::EditTask { id, name } => {
                if self.state.tasks.rename(&id, &name) {
                    self.logger.log(format!("Task: Renamed {} to '{}'", id, name));
                } else {
                    self.logger.log(format!("Task: Cannot rename - task {} not found", id));
                }
            }
            Action::SelectFilter(filter) => {
                self.logger.log(format!("Filter: Showing {} tasks", filter));
                self.state.filter = filter;
            }
            Action::Focus(region) => {
                self.state.focus = region;
            }
            Action::FocusNext => {
                self.state.focus = self.state.focus.next();
            }
            Action::FocusPrevious => {
                self.state.focus = self.state.focus.previous();
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger
                    .log(format!("UI: Icon theme set to {:?}", self.icons.theme()));
            }
            other => return other,
        }
        Action::None
    }

    /// Run an action through the component hierarchy and the root reducer
    pub fn dispatch(&mut self, action: Action) {
        let action = self.update(action);
        self.handle_app_action(action);
        self.sync_component_data();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = self.route_key(key);
        self.dispatch(action);
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        match event_type {
            EventType::Key(key) => self.handle_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => {}
        }
    }

    /// Post-render effects. Returns `true` when state changed and another frame is needed.
    ///
    /// Compares the task count against the one seen on the previous render and
    /// moves focus to the count heading when tasks were removed.
    pub fn run_effects(&mut self) -> bool {
        let current = self.state.tasks.len();
        let previous = self.previous_task_count.replace(current);

        match previous {
            Some(previous) if current < previous => {
                self.logger.log(format!(
                    "Focus: Task count dropped from {} to {}, focusing heading",
                    previous, current
                ));
                self.state.focus = FocusRegion::Heading;
                self.sync_component_data();
                true
            }
            _ => false,
        }
    }

    fn footer_hints(&self) -> &'static str {
        if self.task_list.is_editing() {
            return HINTS_EDITING;
        }
        match self.state.focus {
            FocusRegion::Form => HINTS_FORM,
            FocusRegion::Filters => HINTS_FILTERS,
            FocusRegion::Heading => HINTS_HEADING,
            FocusRegion::List => HINTS_LIST,
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::app_layout(rect);

        let title = Paragraph::new(self.state.title.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));
        f.render_widget(title, areas.title);

        self.form.render(f, areas.form);
        self.filter_bar.render(f, areas.filters);
        self.heading.render(f, areas.heading);
        self.task_list.render(f, areas.list);
        f.render_widget(create_instructions_paragraph(self.footer_hints()), areas.footer);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
