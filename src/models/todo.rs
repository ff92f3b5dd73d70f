use serde::{Deserialize, Serialize};

/// A unit of work inside a list.
///
/// Todos are created open and only change through explicit completion
/// toggles. They have no identity beyond their position in the owning list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub name: String,
    pub completed: bool,
}

impl Todo {
    /// Create an open todo with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }
}

/// Form input for adding a todo to a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoInput {
    pub todo: String,
}

/// Form input for toggling a todo's completion flag.
///
/// The wire value is the literal string `true` or `false`; anything else is
/// rejected by the form decoder before it reaches a handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCompletedInput {
    pub completed: bool,
}

/// A todo as presented in a single-list view.
///
/// `id` is the todo's original position in the owning list, not its position
/// in the display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoView {
    pub id: usize,
    pub name: String,
    pub completed: bool,
}
