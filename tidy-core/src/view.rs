//! View models handed to whatever draws the pages.
//!
//! Nothing here knows about a concrete UI; a rendering layer implements
//! [`Renderer`] and re-renders after every store mutation.

use serde::Serialize;

use crate::remote::{FeedSummary, RemoteTodo};
use crate::todo::Todo;

pub use crate::error::VALIDATION_MESSAGE;

pub const EMPTY_MESSAGE: &str = "No todos yet. Add one to get started!";

pub const TODO_HEADERS: [&str; 6] = ["#", "Title", "Description", "Priority", "Status", "Actions"];
pub const FEED_HEADERS: [&str; 4] = ["#", "Todo", "User", "Status"];

pub const TOGGLE_LABEL: &str = "Toggle";
pub const DELETE_LABEL: &str = "Delete";
pub const ADD_LABEL: &str = "Add Todo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoRow {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub priority: &'static str,
    pub priority_class: &'static str,
    pub status: &'static str,
    pub status_class: &'static str,
}

impl From<&Todo> for TodoRow {
    fn from(t: &Todo) -> Self {
        Self {
            id: t.id,
            title: t.title.clone(),
            description: t.description.clone(),
            priority: t.priority.label(),
            priority_class: t.priority.badge_class(),
            status: t.status.label(),
            status_class: t.status.badge_class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TodoTable {
    Empty { message: &'static str },
    Rows(Vec<TodoRow>),
}

impl TodoTable {
    pub fn from_todos(todos: &[Todo]) -> Self {
        if todos.is_empty() {
            return TodoTable::Empty {
                message: EMPTY_MESSAGE,
            };
        }
        TodoTable::Rows(todos.iter().map(TodoRow::from).collect())
    }

    pub fn row_count(&self) -> usize {
        match self {
            TodoTable::Empty { .. } => 0,
            TodoTable::Rows(rows) => rows.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedRow {
    pub id: u64,
    pub todo: String,
    pub user: String,
    pub status: &'static str,
    pub status_class: &'static str,
}

impl FeedRow {
    pub fn cells(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.todo.clone(),
            self.user.clone(),
            self.status.to_string(),
        ]
    }
}

impl From<&RemoteTodo> for FeedRow {
    fn from(r: &RemoteTodo) -> Self {
        let status = r.status();
        Self {
            id: r.id,
            todo: r.todo.clone(),
            user: format!("User {}", r.user_id),
            status: status.label(),
            status_class: status.badge_class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FeedTable {
    Loading,
    Failed { message: String },
    Empty,
    Rows(Vec<FeedRow>),
}

impl FeedTable {
    pub fn from_records(records: &[RemoteTodo]) -> Self {
        if records.is_empty() {
            return FeedTable::Empty;
        }
        FeedTable::Rows(records.iter().map(FeedRow::from).collect())
    }
}

pub fn summary_line(s: FeedSummary) -> String {
    format!(
        "Showing {} todos: {} completed, {} pending",
        s.shown, s.completed, s.pending
    )
}

/// Data-binding contract for a rendering layer.
pub trait Renderer {
    type Output;

    fn render_todos(&self, table: &TodoTable) -> Self::Output;

    fn render_feed(&self, table: &FeedTable, summary: Option<FeedSummary>) -> Self::Output;
}
