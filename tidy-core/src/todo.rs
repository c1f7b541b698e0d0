//! Todo model for the personal manager.
//!
//! Records are created by [`crate::TodoStore`] only; [`NewTodo`] is the raw form input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TodoError;

/// Used when a todo is added without a description.
pub const DEFAULT_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// CSS-style badge class, e.g. `priority-high`.
    pub fn badge_class(self) -> &'static str {
        match self {
            Priority::Low => "priority-low",
            Priority::Medium => "priority-medium",
            Priority::High => "priority-high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Blank input falls back to the default priority.
impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Priority::default());
        }
        Priority::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| TodoError::InvalidPriority(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    Completed,
}

impl Status {
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Status::Completed
        } else {
            Status::Pending
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Status::Pending => Status::Completed,
            Status::Completed => Status::Pending,
        }
    }

    pub fn is_completed(self) -> bool {
        self == Status::Completed
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Completed => "Completed",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Completed => "complete",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Status::default());
        }
        [Status::Pending, Status::Completed]
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| TodoError::InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

/// Unvalidated add-form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Trimmed title, or `EmptyTitle` when nothing is left.
    pub fn validated_title(&self) -> Result<&str, TodoError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }
        Ok(title)
    }

    pub(crate) fn resolved_description(&self) -> String {
        match self.description.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => DEFAULT_DESCRIPTION.to_string(),
        }
    }
}
