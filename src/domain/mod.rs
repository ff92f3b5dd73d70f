//! Pure domain logic: validation, display ordering, and the mutation
//! operations over a session's list collection.
//!
//! Everything here is synchronous and side-effect-free with respect to
//! anything but its arguments. Persisting a mutated collection back into the
//! session store is the caller's job; on any error path the collection is
//! left untouched.

mod error;
mod ops;
mod order;
mod validate;

pub use error::*;
pub use ops::*;
pub use order::*;
pub use validate::*;
