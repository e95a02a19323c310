//! Persisted farm document shapes.
//!
//! The repository stores quantities as decimal strings so documents stay
//! readable and portable across storage backends. Conversion to and from
//! the in-memory [`FarmState`] is lossless for finite decimals; strings
//! are normalized on write (no trailing zeros) and zero quantities are
//! dropped rather than stored.

use std::collections::BTreeMap;
use std::str::FromStr;

use farm_core::{FarmState, Field, ItemName, Tree};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::SessionToken;
use crate::types::{Address, FarmId};

/// A quantity string in a stored document failed to parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid decimal literal: {0}")]
pub struct DocumentError(String);

/// Farm document as held by the repository.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FarmDocument {
    pub id: FarmId,
    pub address: Address,
    pub session: SessionToken,
    #[serde(rename = "gameState")]
    pub game_state: GameStateDocument,
}

/// Serialized farm state with decimal-string quantities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameStateDocument {
    pub balance: String,
    pub inventory: BTreeMap<ItemName, String>,
    pub stock: BTreeMap<ItemName, String>,
    pub fields: BTreeMap<u32, Field>,
    pub trees: BTreeMap<u32, Tree>,
}

impl GameStateDocument {
    /// Serializes an in-memory state, dropping zero quantities.
    pub fn from_state(state: &FarmState) -> Self {
        let quantities = |entries: &BTreeMap<ItemName, Decimal>| {
            entries
                .iter()
                .filter(|(_, quantity)| !quantity.is_zero())
                .map(|(item, quantity)| (*item, decimal_string(quantity)))
                .collect()
        };

        Self {
            balance: decimal_string(&state.balance),
            inventory: quantities(&state.inventory),
            stock: quantities(&state.stock),
            fields: state.fields.clone(),
            trees: state.trees.clone(),
        }
    }

    /// Rehydrates the in-memory state for `address`.
    pub fn to_state(&self, address: impl Into<Address>) -> Result<FarmState, DocumentError> {
        let quantities = |entries: &BTreeMap<ItemName, String>| {
            entries
                .iter()
                .map(|(item, literal)| Ok((*item, parse_decimal(literal)?)))
                .filter(|entry| !matches!(entry, Ok((_, quantity)) if quantity.is_zero()))
                .collect::<Result<BTreeMap<_, _>, DocumentError>>()
        };

        Ok(FarmState {
            balance: parse_decimal(&self.balance)?,
            inventory: quantities(&self.inventory)?,
            stock: quantities(&self.stock)?,
            fields: self.fields.clone(),
            trees: self.trees.clone(),
            address: address.into(),
        })
    }
}

fn decimal_string(value: &Decimal) -> String {
    value.normalize().to_string()
}

fn parse_decimal(literal: &str) -> Result<Decimal, DocumentError> {
    Decimal::from_str(literal).map_err(|_| DocumentError(literal.to_string()))
}
