use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Extension, Form, Json,
};

use crate::api::session::SessionId;
use crate::domain::{self, DomainError};
use crate::models::*;
use crate::store::SessionStore;

// ============================================================
// Error Handling
// ============================================================

/// Map a domain error onto an HTTP response.
///
/// Validation failures come back as 422 with the message the client
/// re-renders its form with; unknown positional indices are 404. Either way
/// the session's collection is untouched.
fn error_response(err: DomainError) -> (StatusCode, String) {
    let msg = err.to_string();
    match err {
        DomainError::NotFound(_) => {
            tracing::debug!("Stale or out-of-range index: {}", msg);
            (StatusCode::NOT_FOUND, msg)
        }
        DomainError::InvalidLength(_) | DomainError::DuplicateName => {
            tracing::warn!("Validation error: {}", msg);
            (StatusCode::UNPROCESSABLE_ENTITY, msg)
        }
    }
}

// ============================================================
// Root & Health
// ============================================================

pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Lists
// ============================================================

pub async fn list_lists(
    State(store): State<SessionStore>,
    Extension(SessionId(session)): Extension<SessionId>,
) -> Json<Vec<ListSummary>> {
    let lists = store.get_lists(session);
    Json(ListSummary::from_collection(&lists))
}

pub async fn get_list(
    State(store): State<SessionStore>,
    Extension(SessionId(session)): Extension<SessionId>,
    Path(id): Path<usize>,
) -> Result<Json<ListView>, (StatusCode, String)> {
    let lists = store.get_lists(session);
    let list = domain::get_list(&lists, id).map_err(error_response)?;
    Ok(Json(ListView::new(id, list)))
}

pub async fn create_list(
    State(store): State<SessionStore>,
    Extension(SessionId(session)): Extension<SessionId>,
    Form(input): Form<CreateListInput>,
) -> Result<(StatusCode, Json<ActionResponse>), (StatusCode, String)> {
    store
        .with_lists(session, |lists| {
            domain::create_list(lists, &input.list_name)
        })
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::new("The list has been created.")),
    ))
}

pub async fn rename_list(
    State(store): State<SessionStore>,
    Extension(SessionId(session)): Extension<SessionId>,
    Path(id): Path<usize>,
    Form(input): Form<RenameListInput>,
) -> Result<Json<ActionResponse>, (StatusCode, String)> {
    store
        .with_lists(session, |lists| {
            domain::rename_list(lists, id, &input.list_name)
        })
        .map_err(error_response)?;

    Ok(Json(ActionResponse::new("The list has been updated.")))
}

pub async fn delete_list(
    State(store): State<SessionStore>,
    Extension(SessionId(session)): Extension<SessionId>,
    Path(id): Path<usize>,
) -> Result<Json<ActionResponse>, (StatusCode, String)> {
    store
        .with_lists(session, |lists| domain::delete_list(lists, id))
        .map_err(error_response)?;

    Ok(Json(ActionResponse::new("The list has been deleted.")))
}

pub async fn complete_all(
    State(store): State<SessionStore>,
    Extension(SessionId(session)): Extension<SessionId>,
    Path(id): Path<usize>,
) -> Result<Json<ActionResponse>, (StatusCode, String)> {
    store
        .with_lists(session, |lists| {
            let list = domain::get_list_mut(lists, id)?;
            domain::complete_all(list);
            Ok(())
        })
        .map_err(error_response)?;

    Ok(Json(ActionResponse::new("All todos have been completed.")))
}

// ============================================================
// Todos
// ============================================================

pub async fn add_todo(
    State(store): State<SessionStore>,
    Extension(SessionId(session)): Extension<SessionId>,
    Path(id): Path<usize>,
    Form(input): Form<CreateTodoInput>,
) -> Result<(StatusCode, Json<ActionResponse>), (StatusCode, String)> {
    store
        .with_lists(session, |lists| {
            let list = domain::get_list_mut(lists, id)?;
            domain::add_todo(list, &input.todo)
        })
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::new("The todo was added.")),
    ))
}

pub async fn set_todo_completed(
    State(store): State<SessionStore>,
    Extension(SessionId(session)): Extension<SessionId>,
    Path((id, todo_id)): Path<(usize, usize)>,
    Form(input): Form<SetCompletedInput>,
) -> Result<Json<ActionResponse>, (StatusCode, String)> {
    store
        .with_lists(session, |lists| {
            let list = domain::get_list_mut(lists, id)?;
            domain::set_todo_completed(list, todo_id, input.completed)
        })
        .map_err(error_response)?;

    Ok(Json(ActionResponse::new("The todo has been updated.")))
}

pub async fn delete_todo(
    State(store): State<SessionStore>,
    Extension(SessionId(session)): Extension<SessionId>,
    Path((id, todo_id)): Path<(usize, usize)>,
) -> Result<Json<ActionResponse>, (StatusCode, String)> {
    store
        .with_lists(session, |lists| {
            let list = domain::get_list_mut(lists, id)?;
            domain::delete_todo(list, todo_id)
        })
        .map_err(error_response)?;

    Ok(Json(ActionResponse::new("The todo has been deleted.")))
}
