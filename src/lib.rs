//! Session-backed checklist server.
//!
//! Users create named todo lists, add todos, toggle their completion, and
//! delete lists or todos. Each session owns its own ordered collection of
//! lists; nothing is persisted beyond the process lifetime.
//!
//! The domain core ([`models`], [`domain`]) is pure functions over passed-in
//! collections. The HTTP boundary ([`api`]) decodes typed requests and
//! persists results through the in-memory session store ([`store`]).

pub mod api;
pub mod domain;
pub mod models;
pub mod store;
