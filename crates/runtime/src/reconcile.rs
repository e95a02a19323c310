//! Merging on-chain truth into the loaded farm state.
//!
//! On-chain balances win for anything that has been minted or
//! transferred; off-chain values survive only where the chain reads
//! zero, meaning the item never left the game. Reconcile runs before
//! replay so every action validates against the reconciled totals.

use farm_core::{Catalog, FarmState, UnitScale};
use rust_decimal::Decimal;

use crate::types::WeiAmount;
use crate::units::{decimal_from_wei, UnitsError};

/// Snapshot of an address's on-chain holdings.
#[derive(Clone, Debug, Default)]
pub struct OnChainHoldings {
    /// SFL token balance in wei.
    pub balance_wei: WeiAmount,
    /// Item amounts, positional in catalog id order. Shorter arrays read
    /// as zero for the remaining items.
    pub inventory_wei: Vec<WeiAmount>,
}

/// Overrides `state` with the authoritative on-chain values.
///
/// The balance is always replaced. Inventory entries are replaced only
/// where the chain holds a non-zero amount; zero means the item has not
/// been withdrawn and the off-chain value stands.
pub fn reconcile(
    state: &mut FarmState,
    holdings: &OnChainHoldings,
    catalog: &Catalog,
) -> Result<(), UnitsError> {
    state.balance = decimal_from_wei(&holdings.balance_wei, UnitScale::Token18)?;

    for (position, wei) in holdings.inventory_wei.iter().enumerate() {
        let Some(item) = catalog.item_by_position(position) else {
            // Entries past the catalog have no off-chain representation.
            break;
        };
        let unit = catalog.definition(item).unit;
        let quantity = decimal_from_wei(wei, unit)?;
        if quantity > Decimal::ZERO {
            state.set_item(item, quantity);
        }
    }
    Ok(())
}
