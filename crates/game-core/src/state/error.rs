//! Errors raised by farm state mutation helpers.

use thiserror::Error;

use crate::catalog::ItemName;

/// Economic shortfalls detected while mutating a [`crate::state::FarmState`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Insufficient ingredient: {0}")]
    InsufficientInventory(ItemName),

    #[error("Insufficient funds")]
    InsufficientBalance,

    #[error("Not enough stock: {0}")]
    InsufficientStock(ItemName),
}
