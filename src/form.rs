use anyhow::Result;
use thiserror::Error;

use crate::model::{parse_date, Task};
use crate::storage::LocalStorage;
use crate::store::TaskStore;

/// Why a form could not be submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please provide both a name and a due date for the to-do item.")]
    MissingField,

    #[error("Invalid due date '{0}', expected YYYY-MM-DD.")]
    InvalidDueDate(String),
}

/// The fields of the "new task" form, as typed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Form {
    pub name: String,
    pub due_date: String,
    pub description: String,
}

impl Form {
    pub fn new(name: String, due_date: String, description: String) -> Form {
        Form {
            name,
            due_date,
            description,
        }
    }

    /// Build the task the form describes, without touching anything.
    pub fn validate(&self) -> Result<Task, FormError> {
        if self.name.is_empty() || self.due_date.trim().is_empty() {
            return Err(FormError::MissingField);
        }
        let due_date = parse_date(&self.due_date)
            .map_err(|_| FormError::InvalidDueDate(self.due_date.clone()))?;
        Ok(Task::new(
            self.name.clone(),
            due_date,
            self.description.clone(),
        ))
    }

    /// Append the described task to `store` and clear the form. On a
    /// validation failure the error is a `FormError` and neither the
    /// store nor the form change.
    pub fn submit<S: LocalStorage>(&mut self, store: &mut TaskStore<S>) -> Result<Task> {
        let task = self.validate()?;
        store.append(task.clone())?;
        *self = Form::default();
        Ok(task)
    }
}
