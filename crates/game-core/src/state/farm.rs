//! The farm aggregate: balance, inventory, stock, fields, and trees.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::ItemName;
use crate::state::StateError;

/// A planted crop plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(rename = "plantedAt")]
    pub planted_at: DateTime<Utc>,
    pub item: ItemName,
}

/// A tree and its remaining yield.
///
/// `wood` counts down as the tree is chopped; once it reaches zero the
/// tree is exhausted until `chopped_at + recovery` passes, at which point
/// replay tops it back up to the catalog default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    #[serde(rename = "choppedAt")]
    pub chopped_at: DateTime<Utc>,
    pub wood: Decimal,
}

/// In-memory farm state, the aggregate every action transition mutates.
///
/// Invariants maintained by the helpers here:
/// - every quantity is non-negative
/// - inventory entries are strictly positive or absent, never zero
/// - the balance never goes negative
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmState {
    pub balance: Decimal,
    pub inventory: BTreeMap<ItemName, Decimal>,
    pub stock: BTreeMap<ItemName, Decimal>,
    pub fields: BTreeMap<u32, Field>,
    pub trees: BTreeMap<u32, Tree>,
    /// Owning wallet, informational.
    pub address: String,
}

impl FarmState {
    /// Empty farm owned by `address`.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            balance: Decimal::ZERO,
            inventory: BTreeMap::new(),
            stock: BTreeMap::new(),
            fields: BTreeMap::new(),
            trees: BTreeMap::new(),
            address: address.into(),
        }
    }

    /// Quantity of `item` held, zero when absent.
    pub fn item_count(&self, item: ItemName) -> Decimal {
        self.inventory.get(&item).copied().unwrap_or(Decimal::ZERO)
    }

    /// Adds `quantity` of `item`, creating the entry when absent.
    ///
    /// Non-positive quantities are ignored so a zero entry can never appear.
    pub fn add_item(&mut self, item: ItemName, quantity: Decimal) {
        if quantity <= Decimal::ZERO {
            return;
        }
        *self.inventory.entry(item).or_insert(Decimal::ZERO) += quantity;
    }

    /// Removes `quantity` of `item`, deleting the entry when it reaches zero.
    pub fn remove_item(&mut self, item: ItemName, quantity: Decimal) -> Result<(), StateError> {
        let held = self.item_count(item);
        if held < quantity {
            return Err(StateError::InsufficientInventory(item));
        }
        let remaining = held - quantity;
        if remaining.is_zero() {
            self.inventory.remove(&item);
        } else {
            self.inventory.insert(item, remaining);
        }
        Ok(())
    }

    /// Forces `item` to exactly `quantity`, dropping the entry on zero.
    ///
    /// Used by the reconciler, which overrides off-chain values wholesale.
    pub fn set_item(&mut self, item: ItemName, quantity: Decimal) {
        if quantity.is_zero() {
            self.inventory.remove(&item);
        } else {
            self.inventory.insert(item, quantity);
        }
    }

    /// Credits SFL to the balance.
    pub fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Debits SFL from the balance; fails rather than going negative.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), StateError> {
        if self.balance < amount {
            return Err(StateError::InsufficientBalance);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Remaining shop supply of `item`, zero when absent.
    pub fn stock_of(&self, item: ItemName) -> Decimal {
        self.stock.get(&item).copied().unwrap_or(Decimal::ZERO)
    }

    /// Consumes `quantity` units of shop supply for `item`.
    ///
    /// Stock is monotonically non-increasing within a save; replenishment
    /// happens through external admin tooling, never here.
    pub fn remove_stock(&mut self, item: ItemName, quantity: Decimal) -> Result<(), StateError> {
        let available = self.stock_of(item);
        if available < quantity {
            return Err(StateError::InsufficientStock(item));
        }
        self.stock.insert(item, available - quantity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    #[test]
    fn add_then_remove_drops_entry_at_zero() {
        let mut farm = FarmState::new("0xabc");
        farm.add_item(ItemName::Sunflower, dec(3, 0));
        farm.remove_item(ItemName::Sunflower, dec(3, 0)).unwrap();
        assert!(!farm.inventory.contains_key(&ItemName::Sunflower));
    }

    #[test]
    fn remove_more_than_held_fails_without_mutation() {
        let mut farm = FarmState::new("0xabc");
        farm.add_item(ItemName::Wood, dec(1, 0));
        let err = farm.remove_item(ItemName::Wood, dec(2, 0)).unwrap_err();
        assert_eq!(err, StateError::InsufficientInventory(ItemName::Wood));
        assert_eq!(farm.item_count(ItemName::Wood), dec(1, 0));
    }

    #[test]
    fn zero_add_never_creates_an_entry() {
        let mut farm = FarmState::new("0xabc");
        farm.add_item(ItemName::Potato, Decimal::ZERO);
        assert!(farm.inventory.is_empty());
    }

    #[test]
    fn debit_never_goes_negative() {
        let mut farm = FarmState::new("0xabc");
        farm.credit(dec(1, 0));
        assert_eq!(farm.debit(dec(15, 1)), Err(StateError::InsufficientBalance));
        assert_eq!(farm.balance, dec(1, 0));
        farm.debit(dec(1, 0)).unwrap();
        assert_eq!(farm.balance, Decimal::ZERO);
    }

    #[test]
    fn stock_is_consumed_but_entry_remains() {
        let mut farm = FarmState::new("0xabc");
        farm.stock.insert(ItemName::PotatoSeed, dec(7, 0));
        farm.remove_stock(ItemName::PotatoSeed, dec(5, 0)).unwrap();
        assert_eq!(farm.stock_of(ItemName::PotatoSeed), dec(2, 0));
        let err = farm.remove_stock(ItemName::PotatoSeed, dec(3, 0)).unwrap_err();
        assert_eq!(err, StateError::InsufficientStock(ItemName::PotatoSeed));
    }
}
