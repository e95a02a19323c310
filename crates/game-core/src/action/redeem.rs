//! Claiming a promotional item.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::action::{ActionError, FarmTransition};
use crate::catalog::{Catalog, ItemName};
use crate::state::FarmState;

/// `item.redeemed`: claim a promotion, at most once per farm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemAction {
    pub item: ItemName,
}

impl FarmTransition for RedeemAction {
    fn pre_validate(
        &self,
        state: &FarmState,
        catalog: &Catalog,
        _created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        if !catalog.is_redeemable(self.item) {
            return Err(ActionError::NotRedeemable(self.item));
        }
        if state.inventory.contains_key(&self.item) {
            return Err(ActionError::AlreadyRedeemed(self.item));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut FarmState,
        _catalog: &Catalog,
        _created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        state.add_item(self.item, Decimal::ONE);
        Ok(())
    }
}
