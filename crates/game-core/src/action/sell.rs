//! Selling crops back to the shop for SFL.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::action::{ActionError, FarmTransition};
use crate::catalog::{Catalog, ItemName};
use crate::state::{round_sfl, FarmState, StateError};

/// `item.sell`: exchange inventory for balance at the catalog price.
///
/// Only items with a sell price (crops) are accepted; tools and limited
/// editions stay on the farm until withdrawn on-chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellAction {
    pub item: ItemName,
    pub amount: Decimal,
}

impl FarmTransition for SellAction {
    fn pre_validate(
        &self,
        state: &FarmState,
        catalog: &Catalog,
        _created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        if self.amount <= Decimal::ZERO {
            return Err(ActionError::InvalidAmount);
        }
        if catalog.sell_price(self.item).is_none() {
            return Err(ActionError::NotSellable(self.item));
        }
        if state.item_count(self.item) < self.amount {
            return Err(StateError::InsufficientInventory(self.item).into());
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut FarmState,
        catalog: &Catalog,
        _created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        let price = catalog
            .sell_price(self.item)
            .ok_or(ActionError::NotSellable(self.item))?;
        state.remove_item(self.item, self.amount)?;
        state.credit(round_sfl(price * self.amount));
        Ok(())
    }
}
