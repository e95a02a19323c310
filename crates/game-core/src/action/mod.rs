//! Action domain definitions.
//!
//! Each user intent is a timestamped [`Action`] whose kind is a closed
//! sum: the wire tag (`item.planted`, `item.sell`, ...) selects the
//! variant at decode time, so an unknown tag is a deserialization error
//! and never reaches the dispatcher.

mod chop;
mod craft;
mod error;
mod harvest;
mod plant;
mod redeem;
mod sell;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::state::FarmState;

pub use chop::ChopAction;
pub use craft::CraftAction;
pub use error::ActionError;
pub use harvest::HarvestAction;
pub use plant::PlantAction;
pub use redeem::RedeemAction;
pub use sell::SellAction;

/// Defines how a concrete action variant mutates farm state.
///
/// `pre_validate` checks every precondition against the state before
/// mutation; `apply` assumes validation passed and performs the
/// mutation. Transitions are transactional from the caller's point of
/// view because replay operates on a working copy that is discarded
/// whenever any action in the batch fails.
pub trait FarmTransition {
    /// Validates preconditions using the state **before** mutation.
    fn pre_validate(
        &self,
        _state: &FarmState,
        _catalog: &Catalog,
        _created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action by mutating the farm state directly.
    fn apply(
        &self,
        state: &mut FarmState,
        catalog: &Catalog,
        created_at: DateTime<Utc>,
    ) -> Result<(), ActionError>;
}

/// Action variants, discriminated by the wire `type` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActionKind {
    #[serde(rename = "item.planted")]
    Plant(PlantAction),

    #[serde(rename = "item.harvested")]
    Harvest(HarvestAction),

    #[serde(rename = "tree.chopped")]
    Chop(ChopAction),

    #[serde(rename = "item.crafted")]
    Craft(CraftAction),

    #[serde(rename = "item.sell")]
    Sell(SellAction),

    #[serde(rename = "item.redeemed")]
    Redeem(RedeemAction),
}

impl ActionKind {
    /// The wire tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ActionKind::Plant(_) => "item.planted",
            ActionKind::Harvest(_) => "item.harvested",
            ActionKind::Chop(_) => "tree.chopped",
            ActionKind::Craft(_) => "item.crafted",
            ActionKind::Sell(_) => "item.sell",
            ActionKind::Redeem(_) => "item.redeemed",
        }
    }
}

/// A single user-originated intent with its client wall-clock timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: ActionKind,
}

impl Action {
    pub fn new(created_at: DateTime<Utc>, kind: ActionKind) -> Self {
        Self { created_at, kind }
    }
}
