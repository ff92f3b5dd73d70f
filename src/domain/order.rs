use crate::models::{Todo, TodoList};

/// Lists in display order: incomplete first, then complete, each group in
/// original relative order.
///
/// Each entry carries the list's original position in the collection. Display
/// order never renumbers the collection itself — routing and deletion keep
/// addressing the original positions.
pub fn ordered_lists(lists: &[TodoList]) -> Vec<(usize, &TodoList)> {
    let (incomplete, complete): (Vec<_>, Vec<_>) = lists
        .iter()
        .enumerate()
        .partition(|(_, list)| !list.is_complete());

    incomplete.into_iter().chain(complete).collect()
}

/// Todos in display order: open first, then completed, each group in
/// original relative order. Entries carry original positions.
pub fn ordered_todos(todos: &[Todo]) -> Vec<(usize, &Todo)> {
    let (open, done): (Vec<_>, Vec<_>) = todos
        .iter()
        .enumerate()
        .partition(|(_, todo)| !todo.completed);

    open.into_iter().chain(done).collect()
}
