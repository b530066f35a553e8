use super::{Filter, Task};

/// Ordered task collection owned by the root component.
///
/// Mutations never fail: an id that matches nothing leaves the collection
/// untouched and the call reports `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Flip the completed flag of the task with `id`
    pub fn toggle(&mut self, id: &str) -> bool {
        self.replace_where(id, |task| Task {
            completed: !task.completed,
            ..task
        })
    }

    /// Drop the task with `id`, keeping the order of the rest
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Replace the name of the task with `id`. The name is stored as given.
    pub fn rename(&mut self, id: &str, new_name: &str) -> bool {
        self.replace_where(id, |task| Task {
            name: new_name.to_string(),
            ..task
        })
    }

    /// Append a new, not yet completed task and return its id
    pub fn add(&mut self, name: &str) -> String {
        let task = Task::with_generated_id(name);
        let id = task.id.clone();
        self.tasks.push(task);
        id
    }

    /// Tasks visible under `filter`, in collection order
    pub fn derive_view(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    fn replace_where(&mut self, id: &str, f: impl Fn(Task) -> Task) -> bool {
        let mut found = false;
        self.tasks = std::mem::take(&mut self.tasks)
            .into_iter()
            .map(|task| {
                if task.id == id {
                    found = true;
                    f(task)
                } else {
                    task
                }
            })
            .collect();
        found
    }
}

/// Heading announcing how many tasks the current view holds
pub fn heading_text(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{} {} remaining", count, noun)
}

/// Holds the value seen on the previous render.
///
/// `replace` stores the new value and hands back the one it displaced, which
/// is `None` only on the very first render.
#[derive(Debug, Clone, Default)]
pub struct PreviousValue<T> {
    value: Option<T>,
}

impl<T: Copy> PreviousValue<T> {
    pub fn new() -> Self {
        Self { value: None }
    }

    pub fn get(&self) -> Option<T> {
        self.value
    }

    pub fn replace(&mut self, current: T) -> Option<T> {
        self.value.replace(current)
    }
}
