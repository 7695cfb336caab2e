use std::fmt::Write;
use std::str::FromStr;

use chrono::NaiveDate;
use prettytable::{format, Table};

use crate::model::{categorize, Category, Task};

/// Width descriptions are wrapped at.
const DESCRIPTION_WIDTH: usize = 40;

/// How much of each task the listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Name and description share a cell.
    Compact,
    /// Description gets its own wrapped column, overdue tasks show how
    /// late they are.
    Detailed,
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Layout, String> {
        match s {
            "compact" => Ok(Layout::Compact),
            "detailed" => Ok(Layout::Detailed),
            other => Err(format!(
                "unknown layout '{}', expected 'compact' or 'detailed'",
                other
            )),
        }
    }
}

/// Render the whole list: a total, then the overdue, outstanding and
/// complete sections.
pub fn render(tasks: &[Task], today: NaiveDate, layout: Layout) -> String {
    let views = categorize(tasks, today);
    let mut out = String::new();
    let _ = writeln!(out, "To Do {}", tasks.len());

    for (category, items) in [
        (Category::Overdue, &views.overdue),
        (Category::Outstanding, &views.outstanding),
        (Category::Complete, &views.complete),
    ]
    .iter()
    {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} {}", section_title(*category), items.len());
        if items.is_empty() {
            let _ = writeln!(out, "{}", empty_message(*category));
        } else {
            out.push_str(&section_table(*category, items, today, layout).to_string());
        }
    }
    out
}

/// One line describing a task, used after adding or toggling it.
pub fn task_line(task: &Task) -> String {
    format!(
        "{} {} {} ({})",
        checkbox(task),
        task.short_id(),
        task.name,
        task.fmt_due_date()
    )
}

fn section_title(category: Category) -> &'static str {
    match category {
        Category::Overdue => "Overdue",
        Category::Outstanding => "Outstanding",
        Category::Complete => "Complete",
    }
}

fn empty_message(category: Category) -> &'static str {
    match category {
        Category::Overdue => "No overdue tasks.",
        Category::Outstanding => "No outstanding tasks.",
        Category::Complete => "No completed items yet.",
    }
}

fn checkbox(task: &Task) -> &'static str {
    if task.is_done() {
        "[x]"
    } else {
        "[ ]"
    }
}

fn section_table(category: Category, items: &[&Task], today: NaiveDate, layout: Layout) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);

    for task in items {
        match layout {
            Layout::Compact => {
                let mut cell = task.name.clone();
                if !task.description.is_empty() {
                    cell.push('\n');
                    cell.push_str(&task.description);
                }
                table.add_row(row![checkbox(task), task.short_id(), cell, task.fmt_due_date()]);
            }
            Layout::Detailed => {
                let late = if category == Category::Overdue {
                    fmt_days_late(task.due_date, today)
                } else {
                    String::new()
                };
                table.add_row(row![
                    checkbox(task),
                    task.short_id(),
                    task.name,
                    textwrap::fill(&task.description, DESCRIPTION_WIDTH),
                    task.fmt_due_date(),
                    late
                ]);
            }
        }
    }
    table
}

fn fmt_days_late(due_date: NaiveDate, today: NaiveDate) -> String {
    match (today - due_date).num_days() {
        1 => "1 day late".to_string(),
        days => format!("{} days late", days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_date;

    fn date(text: &str) -> NaiveDate {
        parse_date(text).unwrap()
    }

    fn task(name: &str, due: &str, description: &str) -> Task {
        Task::new(name.to_string(), date(due), description.to_string())
    }

    #[test]
    fn empty_list_shows_every_empty_message() {
        let out = render(&[], date("2024-06-01"), Layout::Compact);
        assert!(out.starts_with("To Do 0\n"));
        assert!(out.contains("Overdue 0\nNo overdue tasks."));
        assert!(out.contains("Outstanding 0\nNo outstanding tasks."));
        assert!(out.contains("Complete 0\nNo completed items yet."));
    }

    #[test]
    fn pay_rent_moves_from_overdue_to_complete() {
        let today = date("2024-06-01");
        let mut tasks = vec![task("Pay rent", "2024-01-01", "")];

        let out = render(&tasks, today, Layout::Compact);
        assert!(out.contains("Overdue 1\n"));
        assert!(out.contains("Complete 0\n"));
        assert!(out.contains("Pay rent"));
        assert!(out.contains("Jan 01, 2024"));

        tasks[0].toggle();
        let out = render(&tasks, today, Layout::Compact);
        assert!(out.contains("Overdue 0\n"));
        assert!(out.contains("Complete 1\n"));
        assert!(out.contains("[x]"));
    }

    #[test]
    fn detailed_layout_shows_lateness_for_overdue_only() {
        let today = date("2024-06-01");
        let tasks = vec![
            task("late", "2024-05-29", "a long description that goes on"),
            task("soon", "2024-06-02", ""),
        ];
        let out = render(&tasks, today, Layout::Detailed);
        assert!(out.contains("3 days late"));
        assert!(out.contains("a long description"));
        assert_eq!(out.matches("late").count(), 2);
    }

    #[test]
    fn layout_parses_from_its_name() {
        assert_eq!("compact".parse::<Layout>(), Ok(Layout::Compact));
        assert_eq!("detailed".parse::<Layout>(), Ok(Layout::Detailed));
        assert!("fancy".parse::<Layout>().is_err());
    }

    #[test]
    fn task_line_names_the_task() {
        let t = task("Pay rent", "2024-01-01", "");
        let line = task_line(&t);
        assert!(line.starts_with("[ ] "));
        assert!(line.ends_with("Pay rent (Jan 01, 2024)"));
    }
}
