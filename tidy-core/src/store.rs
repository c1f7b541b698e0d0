//! TodoStore — ordered, session-local collection of personal todos.
//!
//! Invariants:
//! - ids are assigned from a counter that starts at 1 and only grows, so an id
//!   is never handed out twice, even after deletes.
//! - insertion order is display order; delete keeps the relative order of the rest.
//! - no stored todo has a blank title.
//!
//! Toggle/delete of an unknown id is a silent no-op, not an error.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::TodoError;
use crate::todo::{NewTodo, Todo};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TodoCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Id the next successful add will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn add(&mut self, input: NewTodo) -> Result<Todo, TodoError> {
        self.add_at(input, Utc::now())
    }

    /// Same as [`TodoStore::add`] with an explicit creation time.
    pub fn add_at(&mut self, input: NewTodo, now: DateTime<Utc>) -> Result<Todo, TodoError> {
        let title = match input.validated_title() {
            Ok(t) => t.to_string(),
            Err(e) => {
                tracing::debug!(raw = %input.title, "rejected todo with blank title");
                return Err(e);
            }
        };

        let id = self.next_id;
        self.next_id += 1;

        let todo = Todo {
            id,
            title,
            description: input.resolved_description(),
            priority: input.priority.unwrap_or_default(),
            status: Default::default(),
            created_at: now,
        };
        tracing::debug!(id, title = %todo.title, priority = %todo.priority, "added todo");

        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Flip Pending <-> Completed. `None` when no todo has this id.
    pub fn toggle_status(&mut self, id: u64) -> Option<&Todo> {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(id, "toggle ignored: no such todo");
            return None;
        };
        todo.status = todo.status.toggled();
        tracing::debug!(id, status = %todo.status, "toggled todo");
        Some(&*todo)
    }

    /// Remove the todo with this id. Returns whether anything was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.todos.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.todos.remove(idx);
                tracing::debug!(id, remaining = self.todos.len(), "deleted todo");
                true
            }
            None => {
                tracing::debug!(id, "delete ignored: no such todo");
                false
            }
        }
    }

    pub fn count(&self) -> TodoCounts {
        let completed = self.todos.iter().filter(|t| t.is_completed()).count();
        TodoCounts {
            total: self.todos.len(),
            completed,
            pending: self.todos.len() - completed,
        }
    }
}
