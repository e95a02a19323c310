//! Static item and recipe tables.
//!
//! The catalog is the read-only rulebook every save consults: the item
//! universe, seed growth times, crafting costs, sell prices, the tree
//! template, and the withdrawable/redeemable sets. It is built once at
//! process start and shared by all invocations; nothing in it changes at
//! runtime.
//!
//! Lookups keyed by [`ItemName`] are total where the contract requires it
//! (`definition`, `id_of`); category-scoped tables (`crop`, `recipe`,
//! `sell_price`) return `Option` so callers can surface precise errors.

mod crops;
mod items;
mod recipes;
mod trees;

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

pub use crops::CropProfile;
pub use items::{ItemCategory, ItemName};
pub use recipes::{Ingredient, Recipe};
pub use trees::TreeTemplate;

/// How an item quantity is represented on-chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitScale {
    /// One wei equals one unit (supply-limited game items).
    Whole,
    /// Fixed-point with 18 fractional digits (the SFL token).
    Token18,
}

/// Per-item facts shared by every table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemDefinition {
    pub name: ItemName,
    pub category: ItemCategory,
    /// Numeric id used by the on-chain inventory contract.
    pub on_chain_id: u32,
    pub unit: UnitScale,
}

/// Process-wide catalog instance.
pub static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::new);

/// Aggregated static tables.
pub struct Catalog {
    crops: BTreeMap<ItemName, CropProfile>,
    recipes: BTreeMap<ItemName, Recipe>,
    sell_prices: BTreeMap<ItemName, Decimal>,
    tree: TreeTemplate,
    withdrawable: BTreeSet<ItemName>,
    redeemable: BTreeSet<ItemName>,
}

impl Catalog {
    fn new() -> Self {
        let mut crops = BTreeMap::new();
        let mut recipes = BTreeMap::new();
        let mut sell_prices = BTreeMap::new();
        let mut withdrawable = BTreeSet::new();

        for item in ItemName::ALL {
            if let Some(profile) = crops::crop_profile(item) {
                crops.insert(item, profile);
            }
            if let Some(recipe) = recipes::recipe(item) {
                recipes.insert(item, recipe);
            }
            if let Some(price) = crops::sell_price(item) {
                sell_prices.insert(item, price);
            }
            if matches!(
                item.category(),
                ItemCategory::Tool | ItemCategory::Resource | ItemCategory::Limited
            ) {
                withdrawable.insert(item);
            }
        }

        let redeemable = BTreeSet::from([ItemName::EasterEgg]);

        Self {
            crops,
            recipes,
            sell_prices,
            tree: TreeTemplate::standard(),
            withdrawable,
            redeemable,
        }
    }

    /// Definition for any item. Total over [`ItemName`].
    pub fn definition(&self, item: ItemName) -> ItemDefinition {
        ItemDefinition {
            name: item,
            category: item.category(),
            on_chain_id: self.id_of(item),
            unit: UnitScale::Whole,
        }
    }

    /// On-chain numeric id for an item. Total over [`ItemName`].
    pub fn id_of(&self, item: ItemName) -> u32 {
        // ALL is the id list; position i carries id i + 1.
        let position = ItemName::ALL
            .iter()
            .position(|candidate| *candidate == item)
            .expect("ItemName::ALL covers every variant");
        position as u32 + 1
    }

    /// Item carrying the given on-chain id, if any.
    pub fn item_by_id(&self, id: u32) -> Option<ItemName> {
        if id == 0 {
            return None;
        }
        ItemName::ALL.get(id as usize - 1).copied()
    }

    /// Item at the given position of a positional on-chain inventory array.
    pub fn item_by_position(&self, position: usize) -> Option<ItemName> {
        ItemName::ALL.get(position).copied()
    }

    /// Number of entries a positional on-chain inventory array carries.
    pub fn inventory_len(&self) -> usize {
        ItemName::ALL.len()
    }

    /// Growth profile for a seed. `None` when the item is not a seed.
    pub fn crop(&self, seed: ItemName) -> Option<&CropProfile> {
        self.crops.get(&seed)
    }

    /// Recipe for an item. `None` when the item has no cost sheet at all.
    pub fn recipe(&self, item: ItemName) -> Option<&Recipe> {
        self.recipes.get(&item)
    }

    /// SFL sell price per unit. `None` when the item is not sellable.
    pub fn sell_price(&self, item: ItemName) -> Option<Decimal> {
        self.sell_prices.get(&item).copied()
    }

    /// Default tree yield and recovery.
    pub fn tree(&self) -> &TreeTemplate {
        &self.tree
    }

    /// Whether an item is carried from stock when crafted.
    pub fn is_stocked(&self, item: ItemName) -> bool {
        matches!(item.category(), ItemCategory::Seed | ItemCategory::Tool)
    }

    /// Whether an item may ever leave the farm to an on-chain balance.
    pub fn is_withdrawable(&self, item: ItemName) -> bool {
        self.withdrawable.contains(&item)
    }

    /// Whether an item may be claimed through `item.redeemed`.
    pub fn is_redeemable(&self, item: ItemName) -> bool {
        self.redeemable.contains(&item)
    }
}
