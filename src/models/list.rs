use serde::{Deserialize, Serialize};

use crate::domain::{ordered_lists, ordered_todos};
use crate::models::{Todo, TodoView};

/// A named, ordered container of todos.
///
/// Lists live in a session's collection and are addressed by their position
/// in it. A list is *complete* when it has at least one todo and every todo
/// is completed — an empty list is never complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    pub name: String,
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Create an empty list with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// Whether the list is non-empty and every todo is completed.
    pub fn is_complete(&self) -> bool {
        self.total_count() > 0 && self.remaining_count() == 0
    }

    /// Number of todos still open.
    pub fn remaining_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// Total number of todos.
    pub fn total_count(&self) -> usize {
        self.todos.len()
    }

    /// Presentation hint: `"complete"` for a complete list, empty otherwise.
    pub fn status_label(&self) -> &'static str {
        if self.is_complete() {
            "complete"
        } else {
            ""
        }
    }
}

/// Form input for creating a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListInput {
    pub list_name: String,
}

/// Form input for renaming a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameListInput {
    pub list_name: String,
}

/// A list as presented in the list-of-lists view.
///
/// `id` is the list's original position in the session collection; the view
/// order is display order (incomplete lists first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: usize,
    pub name: String,
    pub complete: bool,
    /// `"complete"` or empty, for styling.
    pub status: String,
    pub remaining: usize,
    pub total: usize,
}

impl ListSummary {
    /// Project a session collection into display order.
    pub fn from_collection(lists: &[TodoList]) -> Vec<ListSummary> {
        ordered_lists(lists)
            .into_iter()
            .map(|(id, list)| ListSummary {
                id,
                name: list.name.clone(),
                complete: list.is_complete(),
                status: list.status_label().to_string(),
                remaining: list.remaining_count(),
                total: list.total_count(),
            })
            .collect()
    }
}

/// A single list with its todos in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListView {
    pub id: usize,
    pub name: String,
    pub complete: bool,
    /// `"complete"` or empty, for styling.
    pub status: String,
    pub remaining: usize,
    pub total: usize,
    pub todos: Vec<TodoView>,
}

impl ListView {
    /// Project one list, keeping each todo's original index as its `id`.
    pub fn new(id: usize, list: &TodoList) -> Self {
        let todos = ordered_todos(&list.todos)
            .into_iter()
            .map(|(todo_id, todo)| TodoView {
                id: todo_id,
                name: todo.name.clone(),
                completed: todo.completed,
            })
            .collect();

        Self {
            id,
            name: list.name.clone(),
            complete: list.is_complete(),
            status: list.status_label().to_string(),
            remaining: list.remaining_count(),
            total: list.total_count(),
            todos,
        }
    }
}
