//! Errors raised while validating or applying a single action.

use thiserror::Error;

use crate::catalog::ItemName;
use crate::state::StateError;

/// Per-action rejections. The first failing action aborts the whole
/// batch; no partial state is ever committed. Messages are stable API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error("Invalid index: {0}")]
    InvalidIndex(u32),

    #[error("Not a seed: {0}")]
    NotASeed(ItemName),

    #[error("Field is not empty")]
    FieldOccupied,

    #[error("Nothing was planted")]
    FieldEmpty,

    #[error("Not ready")]
    NotGrown,

    #[error("You can only chop trees with an axe")]
    InvalidTool,

    #[error("Tree is not ready")]
    TreeNotRecovered,

    #[error("This item is not craftable: {0}")]
    NotCraftable(ItemName),

    #[error("This item cannot be sold: {0}")]
    NotSellable(ItemName),

    #[error("This item cannot be redeemed: {0}")]
    NotRedeemable(ItemName),

    #[error("Item already redeemed: {0}")]
    AlreadyRedeemed(ItemName),

    #[error("Invalid amount")]
    InvalidAmount,
}
