mod handlers;
pub mod session;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::SessionStore;

pub use session::{SessionId, SESSION_HEADER};

pub fn create_router(store: SessionStore) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // Lists
        .route("/lists", get(handlers::list_lists))
        .route("/lists", post(handlers::create_list))
        .route("/lists/{id}", get(handlers::get_list))
        .route("/lists/{id}", post(handlers::rename_list))
        .route("/lists/{id}/destroy", post(handlers::delete_list))
        .route("/lists/{id}/complete_all", post(handlers::complete_all))
        // Todos
        .route("/lists/{id}/todos", post(handlers::add_todo))
        .route("/lists/{id}/todos/{todo_id}", post(handlers::set_todo_completed))
        .route("/lists/{id}/todos/{todo_id}/destroy", post(handlers::delete_todo))
        // Health
        .route("/health", get(handlers::health))
        .layer(middleware::from_fn(session::session_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
