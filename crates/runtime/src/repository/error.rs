//! Errors raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by farm and event stores.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Compare-and-swap on the session token lost to a concurrent save.
    #[error("session token mismatch")]
    Conflict,

    /// The backing store could not be reached. Retryable.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
