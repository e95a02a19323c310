//! Harvesting a grown field.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::action::{ActionError, FarmTransition};
use crate::catalog::Catalog;
use crate::state::FarmState;

/// `item.harvested`: clear the plot, gain one crop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestAction {
    pub index: u32,
}

impl FarmTransition for HarvestAction {
    fn pre_validate(
        &self,
        state: &FarmState,
        catalog: &Catalog,
        created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        let field = state.fields.get(&self.index).ok_or(ActionError::FieldEmpty)?;
        let profile = catalog
            .crop(field.item)
            .ok_or(ActionError::NotASeed(field.item))?;
        let ready_at = field.planted_at + Duration::seconds(profile.grow_seconds);
        if created_at < ready_at {
            return Err(ActionError::NotGrown);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut FarmState,
        catalog: &Catalog,
        _created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        let field = state
            .fields
            .remove(&self.index)
            .ok_or(ActionError::FieldEmpty)?;
        let profile = catalog
            .crop(field.item)
            .ok_or(ActionError::NotASeed(field.item))?;
        state.add_item(profile.harvests_into, Decimal::ONE);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ItemName, CATALOG};
    use crate::state::Field;

    fn farm_with_field(planted_at: DateTime<Utc>) -> FarmState {
        let mut farm = FarmState::new("0xfarmer");
        farm.fields.insert(
            4,
            Field {
                planted_at,
                item: ItemName::SunflowerSeed,
            },
        );
        farm
    }

    #[test]
    fn harvests_once_grown() {
        let now = Utc::now();
        let mut farm = farm_with_field(now - Duration::seconds(60));
        let action = HarvestAction { index: 4 };

        action.pre_validate(&farm, &CATALOG, now).unwrap();
        action.apply(&mut farm, &CATALOG, now).unwrap();

        assert!(farm.fields.is_empty());
        assert_eq!(farm.item_count(ItemName::Sunflower), Decimal::ONE);
    }

    #[test]
    fn rejects_unripe_field() {
        let now = Utc::now();
        let farm = farm_with_field(now - Duration::seconds(30));
        let action = HarvestAction { index: 4 };
        assert_eq!(
            action.pre_validate(&farm, &CATALOG, now),
            Err(ActionError::NotGrown)
        );
    }

    #[test]
    fn rejects_empty_field() {
        let farm = FarmState::new("0xfarmer");
        let action = HarvestAction { index: 4 };
        assert_eq!(
            action.pre_validate(&farm, &CATALOG, Utc::now()),
            Err(ActionError::FieldEmpty)
        );
    }
}
