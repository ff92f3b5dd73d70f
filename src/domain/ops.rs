use crate::domain::{validate_list_name, validate_todo_text, DomainError};
use crate::models::{Todo, TodoList};

/// Look up a list by its position in the collection.
pub fn get_list(lists: &[TodoList], index: usize) -> Result<&TodoList, DomainError> {
    lists.get(index).ok_or(DomainError::NotFound("List"))
}

/// Mutable counterpart of [`get_list`].
pub fn get_list_mut(lists: &mut [TodoList], index: usize) -> Result<&mut TodoList, DomainError> {
    lists.get_mut(index).ok_or(DomainError::NotFound("List"))
}

/// Validate `name` and append a new empty list to the collection.
pub fn create_list(lists: &mut Vec<TodoList>, name: &str) -> Result<(), DomainError> {
    let name = validate_list_name(name, lists.iter().map(|list| list.name.as_str()))?;
    lists.push(TodoList::new(name));
    Ok(())
}

/// Rename the list at `index`.
///
/// The list's own current name is excluded from the uniqueness check, so a
/// rename to the unchanged name succeeds.
pub fn rename_list(
    lists: &mut [TodoList],
    index: usize,
    new_name: &str,
) -> Result<(), DomainError> {
    if index >= lists.len() {
        return Err(DomainError::NotFound("List"));
    }

    let others = lists
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, list)| list.name.as_str());
    let name = validate_list_name(new_name, others)?;

    lists[index].name = name;
    Ok(())
}

/// Remove the list at `index`, shifting later indices down by one.
///
/// Callers must not reuse indices cached before this call.
pub fn delete_list(lists: &mut Vec<TodoList>, index: usize) -> Result<(), DomainError> {
    if index >= lists.len() {
        return Err(DomainError::NotFound("List"));
    }
    lists.remove(index);
    Ok(())
}

/// Validate `text` and append an open todo to the list.
pub fn add_todo(list: &mut TodoList, text: &str) -> Result<(), DomainError> {
    let name = validate_todo_text(text)?;
    list.todos.push(Todo::new(name));
    Ok(())
}

/// Remove the todo at `index`, shifting later indices down by one.
pub fn delete_todo(list: &mut TodoList, index: usize) -> Result<(), DomainError> {
    if index >= list.todos.len() {
        return Err(DomainError::NotFound("Todo"));
    }
    list.todos.remove(index);
    Ok(())
}

/// Set the completion flag of the todo at `index`.
pub fn set_todo_completed(
    list: &mut TodoList,
    index: usize,
    completed: bool,
) -> Result<(), DomainError> {
    match list.todos.get_mut(index) {
        Some(todo) => {
            todo.completed = completed;
            Ok(())
        }
        None => Err(DomainError::NotFound("Todo")),
    }
}

/// Mark every todo in the list complete. A no-op on an empty list.
pub fn complete_all(list: &mut TodoList) {
    for todo in &mut list.todos {
        todo.completed = true;
    }
}
