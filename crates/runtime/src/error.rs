//! Error types surfaced by the save and withdrawal pipelines.
//!
//! Every failure in a pipeline is terminal: nothing is persisted, no
//! audit entry is written. Only the external-unavailable class is
//! retryable; clients retry with the same batch and session token.

use farm_core::{ActionError, ItemName, TemporalError};
use thiserror::Error;

use crate::chain::ChainError;
use crate::repository::{DocumentError, RepositoryError};
use crate::units::UnitsError;

/// Failures of the save pipeline. Messages are stable API.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SaveError {
    #[error("Farm does not exist")]
    FarmNotFound,

    /// The farm exists but the sender does not own it. Carries the same
    /// message as `FarmNotFound`.
    #[error("Farm does not exist")]
    NotOwner,

    #[error("Invalid signature")]
    BadSignature,

    #[error("Not whitelisted")]
    NotWhitelisted,

    #[error(transparent)]
    Temporal(#[from] TemporalError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("Corrupt farm document: {0}")]
    Document(#[from] DocumentError),

    #[error("Invalid on-chain data: {0}")]
    ChainData(#[from] UnitsError),

    #[error("Concurrent save detected")]
    SessionConflict,

    #[error("External service unavailable: {0}")]
    External(String),
}

impl SaveError {
    /// Whether a client may retry the same batch and session verbatim.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SaveError::External(_))
    }
}

impl From<RepositoryError> for SaveError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Conflict => SaveError::SessionConflict,
            RepositoryError::Unavailable(message) => SaveError::External(message),
        }
    }
}

impl From<ChainError> for SaveError {
    fn from(error: ChainError) -> Self {
        match error {
            ChainError::Unavailable(message) => SaveError::External(message),
        }
    }
}

/// Failures of the withdrawal preparer. Messages are stable API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WithdrawError {
    #[error("Farm does not exist")]
    FarmNotFound,

    #[error("Farm does not exist")]
    NotOwner,

    #[error("Invalid signature")]
    BadSignature,

    #[error("Not whitelisted")]
    NotWhitelisted,

    #[error("Unknown item id: {0}")]
    UnknownItem(u32),

    #[error("This item cannot be withdrawn: {0}")]
    NotWithdrawable(ItemName),

    #[error("ids and amounts must have the same length")]
    LengthMismatch,

    #[error("External service unavailable: {0}")]
    External(String),
}

impl WithdrawError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, WithdrawError::External(_))
    }
}

impl From<ChainError> for WithdrawError {
    fn from(error: ChainError) -> Self {
        match error {
            ChainError::Unavailable(message) => WithdrawError::External(message),
        }
    }
}

impl From<RepositoryError> for WithdrawError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Conflict => WithdrawError::External("session conflict".to_string()),
            RepositoryError::Unavailable(message) => WithdrawError::External(message),
        }
    }
}
