//! Crafting recipes for seeds, tools, and limited editions.

use rust_decimal::Decimal;

use super::items::ItemName;

/// One ingredient line of a recipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ingredient {
    pub item: ItemName,
    pub amount: Decimal,
}

impl Ingredient {
    pub const fn new(item: ItemName, amount: Decimal) -> Self {
        Self { item, amount }
    }
}

/// Cost sheet for producing one unit of an item.
///
/// Limited editions keep their recipe for display purposes but carry
/// `craftable = false`: the save pipeline must never mint them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub ingredients: Vec<Ingredient>,
    /// SFL debited per unit crafted.
    pub sfl_price: Decimal,
    /// Total on-chain supply, informational only.
    pub supply: Option<u64>,
    pub craftable: bool,
}

impl Recipe {
    fn craftable(sfl_price: Decimal, ingredients: Vec<Ingredient>) -> Self {
        Self {
            ingredients,
            sfl_price,
            supply: None,
            craftable: true,
        }
    }

    fn limited(sfl_price: Decimal, ingredients: Vec<Ingredient>, supply: u64) -> Self {
        Self {
            ingredients,
            sfl_price,
            supply: Some(supply),
            craftable: false,
        }
    }
}

fn wood(amount: i64) -> Ingredient {
    Ingredient::new(ItemName::Wood, Decimal::new(amount, 0))
}

fn stone(amount: i64) -> Ingredient {
    Ingredient::new(ItemName::Stone, Decimal::new(amount, 0))
}

fn iron(amount: i64) -> Ingredient {
    Ingredient::new(ItemName::Iron, Decimal::new(amount, 0))
}

/// Recipe for each craftable or limited item. Seeds cost SFL only.
pub(super) fn recipe(item: ItemName) -> Option<Recipe> {
    let recipe = match item {
        // Seeds
        ItemName::SunflowerSeed => Recipe::craftable(Decimal::new(1, 2), vec![]),
        ItemName::PotatoSeed => Recipe::craftable(Decimal::new(2, 2), vec![]),
        ItemName::PumpkinSeed => Recipe::craftable(Decimal::new(1, 1), vec![]),
        ItemName::BeetrootSeed => Recipe::craftable(Decimal::new(2, 1), vec![]),
        ItemName::CauliflowerSeed => Recipe::craftable(Decimal::new(5, 1), vec![]),
        ItemName::ParsnipSeed => Recipe::craftable(Decimal::ONE, vec![]),
        ItemName::RadishSeed => Recipe::craftable(Decimal::new(2, 0), vec![]),

        // Tools
        ItemName::Axe => Recipe::craftable(Decimal::new(5, 1), vec![]),
        ItemName::Pickaxe => Recipe::craftable(Decimal::ONE, vec![wood(2)]),
        ItemName::StonePickaxe => Recipe::craftable(Decimal::new(2, 0), vec![wood(2), stone(2)]),
        ItemName::IronPickaxe => Recipe::craftable(Decimal::new(5, 0), vec![wood(3), iron(3)]),

        // Limited editions: never craftable through the save pipeline.
        ItemName::ChickenCoop => Recipe::limited(Decimal::new(5, 0), vec![wood(10)], 1_000),
        ItemName::Scarecrow => Recipe::limited(Decimal::new(10, 0), vec![wood(5)], 5_000),
        ItemName::GoldenCauliflower => {
            Recipe::limited(Decimal::new(100, 0), vec![], 100)
        }
        ItemName::FarmCat => Recipe::limited(Decimal::new(50, 0), vec![], 500),
        ItemName::FarmDog => Recipe::limited(Decimal::new(75, 0), vec![], 500),
        ItemName::Gnome => Recipe::limited(Decimal::new(10, 0), vec![], 1_000),

        _ => return None,
    };
    Some(recipe)
}
