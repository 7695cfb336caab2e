use anyhow::{Context, Result};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::model::Task;
use crate::storage::LocalStorage;

/// The key the task list is saved under.
pub const TASKS_KEY: &str = "todoItems";

/// Read the saved task list. A missing or unreadable list is an empty one.
pub fn load_tasks<S: LocalStorage>(storage: &S) -> Result<Vec<Task>> {
    let raw = match storage.get_item(TASKS_KEY)? {
        Some(raw) => raw,
        None => return Ok(Vec::new()),
    };

    match serde_json::from_str::<Vec<Task>>(&raw) {
        Ok(tasks) => Ok(tasks),
        Err(err) => {
            warn!(error = %err, "saved task list could not be parsed, starting empty");
            Ok(Vec::new())
        }
    }
}

/// Overwrite the saved task list with `tasks`.
pub fn save_tasks<S: LocalStorage>(storage: &mut S, tasks: &[Task]) -> Result<()> {
    let raw = serde_json::to_string(tasks).context("Failed to serialize the task list.")?;
    storage.set_item(TASKS_KEY, &raw)
}

/// The task list of a session, mirrored to `storage` after every change.
pub struct TaskStore<S: LocalStorage> {
    storage: S,
    tasks: Vec<Task>,
}

impl<S: LocalStorage> TaskStore<S> {
    /// Start a session from whatever `storage` holds.
    pub fn load(storage: S) -> Result<TaskStore<S>> {
        let tasks = load_tasks(&storage)?;
        debug!(count = tasks.len(), "loaded tasks");
        Ok(TaskStore { storage, tasks })
    }

    /// All tasks, in the order they were added.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Write the whole list back to storage.
    pub fn save(&mut self) -> Result<()> {
        save_tasks(&mut self.storage, &self.tasks)
    }

    /// Change the list with `f`, then save it.
    pub fn mutate<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Task>) -> T,
    {
        let result = f(&mut self.tasks);
        self.save()?;
        Ok(result)
    }

    /// Add a task at the end of the list.
    pub fn append(&mut self, task: Task) -> Result<()> {
        self.mutate(|tasks| tasks.push(task))
    }

    /// Flip the status of the task with the given id. Returns whether
    /// such a task exists; when it does not, nothing is changed or saved.
    pub fn toggle(&mut self, id: Uuid) -> Result<bool> {
        let position = match self.tasks.iter().position(|task| task.id == id) {
            Some(position) => position,
            None => {
                debug!(%id, "no task to toggle");
                return Ok(false);
            }
        };
        self.mutate(|tasks| tasks[position].toggle())?;
        Ok(true)
    }

    /// The id of the only task whose id starts with `prefix`, ignoring
    /// dashes and case.
    pub fn resolve(&self, prefix: &str) -> Option<Uuid> {
        let prefix = prefix.replace('-', "").to_lowercase();
        if prefix.is_empty() {
            return None;
        }
        let mut matches = self
            .tasks
            .iter()
            .filter(|task| task.id.simple().to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Some(task.id),
            _ => None,
        }
    }

    /// Give the storage back, ending the session.
    #[cfg(test)]
    pub fn into_storage(self) -> S {
        self.storage
    }
}
