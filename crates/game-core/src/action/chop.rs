//! Chopping a tree for wood.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::action::{ActionError, FarmTransition};
use crate::catalog::{Catalog, ItemName};
use crate::config::GameConfig;
use crate::state::FarmState;

/// `tree.chopped`: spend an axe, take one wood off the tree.
///
/// An exhausted tree refills to the catalog default once its recovery
/// period has passed; the refill happens inside the same transition, so
/// a batch chopping a recovered tree sees the topped-up yield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChopAction {
    pub index: u32,
    pub item: ItemName,
}

impl ChopAction {
    fn recovered_at(&self, chopped_at: DateTime<Utc>, catalog: &Catalog) -> DateTime<Utc> {
        chopped_at + Duration::seconds(catalog.tree().recovery_seconds)
    }
}

impl FarmTransition for ChopAction {
    fn pre_validate(
        &self,
        state: &FarmState,
        catalog: &Catalog,
        created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        if self.item != ItemName::Axe {
            return Err(ActionError::InvalidTool);
        }
        if self.index >= GameConfig::TREE_COUNT {
            return Err(ActionError::InvalidIndex(self.index));
        }
        let tree = state
            .trees
            .get(&self.index)
            .ok_or(ActionError::InvalidIndex(self.index))?;
        if tree.wood.is_zero() && created_at < self.recovered_at(tree.chopped_at, catalog) {
            return Err(ActionError::TreeNotRecovered);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut FarmState,
        catalog: &Catalog,
        created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        state.remove_item(ItemName::Axe, Decimal::ONE)?;

        let template_wood = catalog.tree().wood;
        let recovery = Duration::seconds(catalog.tree().recovery_seconds);
        let tree = state
            .trees
            .get_mut(&self.index)
            .ok_or(ActionError::InvalidIndex(self.index))?;

        if tree.wood.is_zero() {
            if created_at < tree.chopped_at + recovery {
                return Err(ActionError::TreeNotRecovered);
            }
            tree.wood = template_wood;
        }

        tree.wood -= Decimal::ONE;
        if tree.wood.is_zero() {
            tree.chopped_at = created_at;
        }
        state.add_item(ItemName::Wood, Decimal::ONE);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::state::{StateError, Tree};

    fn axe() -> ChopAction {
        ChopAction {
            index: 0,
            item: ItemName::Axe,
        }
    }

    fn farm_with_tree(wood: i64, chopped_at: DateTime<Utc>) -> FarmState {
        let mut farm = FarmState::new("0xfarmer");
        farm.add_item(ItemName::Axe, Decimal::ONE);
        farm.trees.insert(
            0,
            Tree {
                chopped_at,
                wood: Decimal::new(wood, 0),
            },
        );
        farm
    }

    #[test]
    fn chops_a_tree_with_yield() {
        let now = Utc::now();
        let mut farm = farm_with_tree(3, now - Duration::hours(1));
        let action = axe();

        action.pre_validate(&farm, &CATALOG, now).unwrap();
        action.apply(&mut farm, &CATALOG, now).unwrap();

        assert_eq!(farm.item_count(ItemName::Wood), Decimal::ONE);
        assert!(!farm.inventory.contains_key(&ItemName::Axe));
        assert_eq!(farm.trees.get(&0).unwrap().wood, Decimal::new(2, 0));
    }

    #[test]
    fn exhausting_a_tree_records_the_chop_time() {
        let now = Utc::now();
        let mut farm = farm_with_tree(1, now - Duration::hours(3));
        let action = axe();
        action.apply(&mut farm, &CATALOG, now).unwrap();

        let tree = farm.trees.get(&0).unwrap();
        assert!(tree.wood.is_zero());
        assert_eq!(tree.chopped_at, now);
    }

    #[test]
    fn recovered_tree_refills_before_the_chop() {
        let now = Utc::now();
        // Exhausted 150 minutes ago; recovery is 120 minutes.
        let mut farm = farm_with_tree(0, now - Duration::minutes(150));
        let action = axe();

        action.pre_validate(&farm, &CATALOG, now).unwrap();
        action.apply(&mut farm, &CATALOG, now).unwrap();

        assert_eq!(farm.item_count(ItemName::Wood), Decimal::ONE);
        // Refilled to 3, then one taken.
        assert_eq!(farm.trees.get(&0).unwrap().wood, Decimal::new(2, 0));
    }

    #[test]
    fn unrecovered_tree_is_rejected() {
        let now = Utc::now();
        let farm = farm_with_tree(0, now - Duration::minutes(60));
        assert_eq!(
            axe().pre_validate(&farm, &CATALOG, now),
            Err(ActionError::TreeNotRecovered)
        );
    }

    #[test]
    fn chopping_needs_an_axe_in_inventory() {
        let now = Utc::now();
        let mut farm = farm_with_tree(3, now - Duration::hours(1));
        farm.remove_item(ItemName::Axe, Decimal::ONE).unwrap();
        assert_eq!(
            axe().apply(&mut farm, &CATALOG, now),
            Err(ActionError::State(StateError::InsufficientInventory(
                ItemName::Axe
            )))
        );
    }

    #[test]
    fn out_of_range_tree_index_is_invalid() {
        let now = Utc::now();
        let farm = farm_with_tree(3, now - Duration::hours(1));
        let action = ChopAction {
            index: GameConfig::TREE_COUNT,
            item: ItemName::Axe,
        };
        assert_eq!(
            action.pre_validate(&farm, &CATALOG, now),
            Err(ActionError::InvalidIndex(GameConfig::TREE_COUNT))
        );
    }

    #[test]
    fn only_an_axe_may_chop() {
        let now = Utc::now();
        let farm = farm_with_tree(3, now - Duration::hours(1));
        let action = ChopAction {
            index: 0,
            item: ItemName::Pickaxe,
        };
        assert_eq!(
            action.pre_validate(&farm, &CATALOG, now),
            Err(ActionError::InvalidTool)
        );
    }
}
