//! Planting a seed into an empty field.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::action::{ActionError, FarmTransition};
use crate::catalog::{Catalog, ItemName};
use crate::config::GameConfig;
use crate::state::{FarmState, Field};

/// `item.planted`: consume one seed, occupy a plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantAction {
    pub index: u32,
    pub item: ItemName,
}

impl FarmTransition for PlantAction {
    fn pre_validate(
        &self,
        state: &FarmState,
        catalog: &Catalog,
        _created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        if self.index >= GameConfig::FIELD_COUNT {
            return Err(ActionError::InvalidIndex(self.index));
        }
        if catalog.crop(self.item).is_none() {
            return Err(ActionError::NotASeed(self.item));
        }
        if state.fields.contains_key(&self.index) {
            return Err(ActionError::FieldOccupied);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut FarmState,
        _catalog: &Catalog,
        created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        state.remove_item(self.item, Decimal::ONE)?;
        state.fields.insert(
            self.index,
            Field {
                planted_at: created_at,
                item: self.item,
            },
        );
        Ok(())
    }
}
