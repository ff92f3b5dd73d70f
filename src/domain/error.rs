use thiserror::Error;

/// Errors produced by the domain core.
///
/// All three kinds are user-recoverable: the failed operation is a no-op on
/// the collection and the caller re-renders its form with the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Trimmed name length fell outside 1..=100 characters.
    #[error("{0} must be between 1 and 100 characters.")]
    InvalidLength(&'static str),

    /// Another list in the session already has this exact name.
    #[error("List name must be unique.")]
    DuplicateName,

    /// Positional index does not refer to an existing entry.
    #[error("{0} not found.")]
    NotFound(&'static str),
}
