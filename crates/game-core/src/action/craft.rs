//! Crafting items from the shop: seeds, tools.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::action::{ActionError, FarmTransition};
use crate::catalog::{Catalog, ItemName};
use crate::state::{FarmState, StateError};

/// `item.crafted`: pay the recipe in ingredients and SFL, gain the item.
///
/// Limited editions carry `craftable = false` and are rejected here: the
/// save pipeline must never mint them, whatever the client claims.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftAction {
    pub item: ItemName,
    pub amount: Decimal,
}

impl FarmTransition for CraftAction {
    fn pre_validate(
        &self,
        state: &FarmState,
        catalog: &Catalog,
        _created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        if self.amount <= Decimal::ZERO || !self.amount.fract().is_zero() {
            return Err(ActionError::InvalidAmount);
        }
        let recipe = catalog
            .recipe(self.item)
            .filter(|recipe| recipe.craftable)
            .ok_or(ActionError::NotCraftable(self.item))?;

        for ingredient in &recipe.ingredients {
            if state.item_count(ingredient.item) < ingredient.amount * self.amount {
                return Err(StateError::InsufficientInventory(ingredient.item).into());
            }
        }
        if state.balance < recipe.sfl_price * self.amount {
            return Err(StateError::InsufficientBalance.into());
        }
        if catalog.is_stocked(self.item) && state.stock_of(self.item) < self.amount {
            return Err(StateError::InsufficientStock(self.item).into());
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut FarmState,
        catalog: &Catalog,
        _created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        let recipe = catalog
            .recipe(self.item)
            .filter(|recipe| recipe.craftable)
            .ok_or(ActionError::NotCraftable(self.item))?;

        for ingredient in &recipe.ingredients {
            state.remove_item(ingredient.item, ingredient.amount * self.amount)?;
        }
        state.debit(recipe.sfl_price * self.amount)?;
        if catalog.is_stocked(self.item) {
            state.remove_stock(self.item, self.amount)?;
        }
        state.add_item(self.item, self.amount);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::state::StateError;

    fn dec(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    fn shop_farm() -> FarmState {
        let mut farm = FarmState::new("0xfarmer");
        farm.credit(dec(20, 0));
        farm.stock.insert(ItemName::PotatoSeed, dec(7, 0));
        farm.stock.insert(ItemName::Pickaxe, dec(3, 0));
        farm
    }

    #[test]
    fn crafts_seeds_from_stock() {
        let mut farm = shop_farm();
        let now = Utc::now();
        let action = CraftAction {
            item: ItemName::PotatoSeed,
            amount: dec(5, 0),
        };

        action.pre_validate(&farm, &CATALOG, now).unwrap();
        action.apply(&mut farm, &CATALOG, now).unwrap();

        assert_eq!(farm.item_count(ItemName::PotatoSeed), dec(5, 0));
        assert_eq!(farm.stock_of(ItemName::PotatoSeed), dec(2, 0));
        // 20 - 5 * 0.02
        assert_eq!(farm.balance, dec(199, 1));
    }

    #[test]
    fn consumes_ingredients() {
        let mut farm = shop_farm();
        farm.add_item(ItemName::Wood, dec(5, 0));
        let now = Utc::now();
        let action = CraftAction {
            item: ItemName::Pickaxe,
            amount: dec(2, 0),
        };

        action.pre_validate(&farm, &CATALOG, now).unwrap();
        action.apply(&mut farm, &CATALOG, now).unwrap();

        assert_eq!(farm.item_count(ItemName::Wood), dec(1, 0));
        assert_eq!(farm.item_count(ItemName::Pickaxe), dec(2, 0));
        assert_eq!(farm.balance, dec(18, 0));
    }

    #[test]
    fn rejects_limited_items() {
        let farm = shop_farm();
        let action = CraftAction {
            item: ItemName::ChickenCoop,
            amount: Decimal::ONE,
        };
        let err = action.pre_validate(&farm, &CATALOG, Utc::now()).unwrap_err();
        assert_eq!(err, ActionError::NotCraftable(ItemName::ChickenCoop));
        assert_eq!(
            err.to_string(),
            "This item is not craftable: Chicken Coop"
        );
    }

    #[test]
    fn rejects_items_with_no_recipe() {
        let farm = shop_farm();
        let action = CraftAction {
            item: ItemName::Sunflower,
            amount: Decimal::ONE,
        };
        assert_eq!(
            action.pre_validate(&farm, &CATALOG, Utc::now()),
            Err(ActionError::NotCraftable(ItemName::Sunflower))
        );
    }

    #[test]
    fn rejects_fractional_and_non_positive_amounts() {
        let farm = shop_farm();
        for amount in [dec(5, 1), Decimal::ZERO, dec(-1, 0)] {
            let action = CraftAction {
                item: ItemName::PotatoSeed,
                amount,
            };
            assert_eq!(
                action.pre_validate(&farm, &CATALOG, Utc::now()),
                Err(ActionError::InvalidAmount)
            );
        }
    }

    #[test]
    fn enforces_stock_balance_and_ingredients() {
        let now = Utc::now();
        let mut farm = shop_farm();

        let over_stock = CraftAction {
            item: ItemName::PotatoSeed,
            amount: dec(8, 0),
        };
        assert_eq!(
            over_stock.pre_validate(&farm, &CATALOG, now),
            Err(ActionError::State(StateError::InsufficientStock(
                ItemName::PotatoSeed
            )))
        );

        farm.balance = dec(1, 2);
        let broke = CraftAction {
            item: ItemName::PotatoSeed,
            amount: dec(5, 0),
        };
        assert_eq!(
            broke.pre_validate(&farm, &CATALOG, now),
            Err(ActionError::State(StateError::InsufficientBalance))
        );

        farm.balance = dec(20, 0);
        let no_wood = CraftAction {
            item: ItemName::Pickaxe,
            amount: Decimal::ONE,
        };
        assert_eq!(
            no_wood.pre_validate(&farm, &CATALOG, now),
            Err(ActionError::State(StateError::InsufficientInventory(
                ItemName::Wood
            )))
        );
    }
}
