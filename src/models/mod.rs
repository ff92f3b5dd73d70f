//! Domain models for the checklist server.
//!
//! # Core Concepts
//!
//! - [`TodoList`]: A named, ordered container of todos. List names are unique
//!   within one session's collection.
//! - [`Todo`]: A named unit of work with a completion flag.
//!
//! A session owns an ordered `Vec<TodoList>`; both lists and todos are
//! addressed by their position in that order. View types ([`ListSummary`],
//! [`ListView`], [`TodoView`]) are display projections: todos and lists are
//! presented incomplete-first, but every entry keeps its original positional
//! index as its `id`, so clients always address the underlying collection
//! rather than the display order.

mod list;
mod response;
mod todo;

pub use list::*;
pub use response::*;
pub use todo::*;
