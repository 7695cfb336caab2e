use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task, saved as an element of the persisted task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    // Lists saved before tasks carried ids get a fresh one on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub status: Status,
}

/// Whether a task has been done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Incomplete,
    Complete,
}

/// The section a task is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Overdue,
    Outstanding,
    Complete,
}

impl Task {
    /// A new, not yet done, task.
    pub fn new(name: String, due_date: NaiveDate, description: String) -> Task {
        Task {
            id: Uuid::new_v4(),
            name,
            due_date,
            description,
            status: Status::Incomplete,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Complete
    }

    /// Flip the status between complete and incomplete.
    pub fn toggle(&mut self) {
        self.status = match self.status {
            Status::Incomplete => Status::Complete,
            Status::Complete => Status::Incomplete,
        }
    }

    /// First eight characters of the id, enough to tell tasks apart in a
    /// listing.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    /// Due date in the `Jan 01, 2024` form.
    pub fn fmt_due_date(&self) -> String {
        self.due_date.format("%b %d, %Y").to_string()
    }
}

impl Category {
    /// Which section `task` belongs to when the current day is `today`.
    /// A task due today is still outstanding.
    pub fn of(task: &Task, today: NaiveDate) -> Category {
        if task.is_done() {
            Category::Complete
        } else if task.due_date < today {
            Category::Overdue
        } else {
            Category::Outstanding
        }
    }
}

/// The three sections of the list, each in list order.
#[derive(Debug, Default)]
pub struct Views<'a> {
    pub overdue: Vec<&'a Task>,
    pub outstanding: Vec<&'a Task>,
    pub complete: Vec<&'a Task>,
}

/// Split the tasks into their sections as of `today`.
pub fn categorize(tasks: &[Task], today: NaiveDate) -> Views<'_> {
    let mut views = Views::default();
    for task in tasks {
        match Category::of(task, today) {
            Category::Overdue => views.overdue.push(task),
            Category::Outstanding => views.outstanding.push(task),
            Category::Complete => views.complete.push(task),
        }
    }
    views
}

/// Parse a date typed as `YYYY-MM-DD`.
pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
}
