use crate::constants::{EMPTY_LIST_MESSAGE, LIST_TITLE};
use crate::icons::IconService;
use crate::tasks::Task;
use crate::ui::components::common::create_region_block;
use crate::ui::components::task_item::TaskItem;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, ListState},
    Frame,
};

/// The visible task rows, keyed by task id
pub struct TaskListComponent {
    pub items: Vec<TaskItem>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub focused: bool,
    pub icons: IconService,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            focused: false,
            icons: IconService::default(),
        }
    }

    /// Replace the rows with `tasks`, keeping the edit mode of rows whose id survives
    pub fn update_data(&mut self, tasks: Vec<Task>, icons: IconService) {
        let mut previous = std::mem::take(&mut self.items);

        self.items = tasks
            .into_iter()
            .map(|task| match previous.iter().position(|item| item.task.id == task.id) {
                Some(pos) => {
                    let mut item = previous.swap_remove(pos);
                    item.task = task;
                    item
                }
                None => TaskItem::new(task),
            })
            .collect();
        self.icons = icons;
        self.update_list_state();
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn update_list_state(&mut self) {
        if self.items.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.items.len() {
                self.selected_index = self.items.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_item(&self) -> Option<&TaskItem> {
        self.items.get(self.selected_index)
    }

    /// Whether any row has its inline editor open
    pub fn is_editing(&self) -> bool {
        self.items.iter().any(TaskItem::is_editing)
    }

    pub fn editing_item_mut(&mut self) -> Option<&mut TaskItem> {
        self.items.iter_mut().find(|item| item.is_editing())
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if let Some(item) = self.editing_item_mut() {
            return item.handle_edit_key(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Enter | KeyCode::Char(' ') => self.selected_item().map_or(Action::None, TaskItem::toggle),
            KeyCode::Char('d') | KeyCode::Delete => self.selected_item().map_or(Action::None, TaskItem::delete),
            KeyCode::Char('e') => {
                if let Some(item) = self.items.get_mut(self.selected_index) {
                    item.begin_edit();
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.items.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.items.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.items.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.items.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!("{} {}", self.icons.tasks_title(), LIST_TITLE);
        let block = create_region_block(&title, self.focused);

        if self.items.is_empty() {
            let empty_list = List::new(vec![ListItem::new(EMPTY_LIST_MESSAGE)]).block(block);
            f.render_widget(empty_list, rect);
            return;
        }

        let items: Vec<ListItem> = self.items.iter().map(|item| item.render(&self.icons)).collect();
        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let tasks_list = List::new(items).block(block).highlight_style(highlight);
        f.render_stateful_widget(tasks_list, rect, &mut self.list_state);
    }
}
