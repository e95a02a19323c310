//! The closed universe of item names and their categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad grouping that drives which tables an item participates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Plantable in a field; bought from stock.
    Seed,
    /// Harvested from a field; sellable for SFL.
    Crop,
    /// Craftable equipment; bought from stock.
    Tool,
    /// Gathered from the world (chopping, mining).
    Resource,
    /// Limited-edition decoration. Never produced by the save pipeline.
    Limited,
    /// Promotional item claimed via `item.redeemed`.
    Promotional,
}

/// Every item the engine knows about.
///
/// The set is closed: an unrecognized name in a request is a decoding
/// error, never a runtime branch. Wire names carry spaces, so each
/// variant declares its serde rename explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemName {
    // Seeds
    #[serde(rename = "Sunflower Seed")]
    SunflowerSeed,
    #[serde(rename = "Potato Seed")]
    PotatoSeed,
    #[serde(rename = "Pumpkin Seed")]
    PumpkinSeed,
    #[serde(rename = "Beetroot Seed")]
    BeetrootSeed,
    #[serde(rename = "Cauliflower Seed")]
    CauliflowerSeed,
    #[serde(rename = "Parsnip Seed")]
    ParsnipSeed,
    #[serde(rename = "Radish Seed")]
    RadishSeed,

    // Crops
    Sunflower,
    Potato,
    Pumpkin,
    Beetroot,
    Cauliflower,
    Parsnip,
    Radish,

    // Tools
    Axe,
    Pickaxe,
    #[serde(rename = "Stone Pickaxe")]
    StonePickaxe,
    #[serde(rename = "Iron Pickaxe")]
    IronPickaxe,

    // Resources
    Wood,
    Stone,
    Iron,
    Gold,
    Egg,

    // Limited editions
    #[serde(rename = "Chicken Coop")]
    ChickenCoop,
    Scarecrow,
    #[serde(rename = "Golden Cauliflower")]
    GoldenCauliflower,
    #[serde(rename = "Farm Cat")]
    FarmCat,
    #[serde(rename = "Farm Dog")]
    FarmDog,
    Gnome,

    // Promotional
    #[serde(rename = "Easter Egg")]
    EasterEgg,
}

impl ItemName {
    /// Every item in on-chain id order. Position `i` carries id `i + 1`.
    pub const ALL: [ItemName; 30] = [
        ItemName::SunflowerSeed,
        ItemName::PotatoSeed,
        ItemName::PumpkinSeed,
        ItemName::BeetrootSeed,
        ItemName::CauliflowerSeed,
        ItemName::ParsnipSeed,
        ItemName::RadishSeed,
        ItemName::Sunflower,
        ItemName::Potato,
        ItemName::Pumpkin,
        ItemName::Beetroot,
        ItemName::Cauliflower,
        ItemName::Parsnip,
        ItemName::Radish,
        ItemName::Axe,
        ItemName::Pickaxe,
        ItemName::StonePickaxe,
        ItemName::IronPickaxe,
        ItemName::Wood,
        ItemName::Stone,
        ItemName::Iron,
        ItemName::Gold,
        ItemName::Egg,
        ItemName::ChickenCoop,
        ItemName::Scarecrow,
        ItemName::GoldenCauliflower,
        ItemName::FarmCat,
        ItemName::FarmDog,
        ItemName::Gnome,
        ItemName::EasterEgg,
    ];

    /// The category this item belongs to.
    pub fn category(&self) -> ItemCategory {
        use ItemName::*;
        match self {
            SunflowerSeed | PotatoSeed | PumpkinSeed | BeetrootSeed | CauliflowerSeed
            | ParsnipSeed | RadishSeed => ItemCategory::Seed,

            Sunflower | Potato | Pumpkin | Beetroot | Cauliflower | Parsnip | Radish => {
                ItemCategory::Crop
            }

            Axe | Pickaxe | StonePickaxe | IronPickaxe => ItemCategory::Tool,

            Wood | Stone | Iron | Gold | Egg => ItemCategory::Resource,

            ChickenCoop | Scarecrow | GoldenCauliflower | FarmCat | FarmDog | Gnome => {
                ItemCategory::Limited
            }

            EasterEgg => ItemCategory::Promotional,
        }
    }

    /// Display name as it appears on the wire and in error messages.
    pub fn as_str(&self) -> &'static str {
        use ItemName::*;
        match self {
            SunflowerSeed => "Sunflower Seed",
            PotatoSeed => "Potato Seed",
            PumpkinSeed => "Pumpkin Seed",
            BeetrootSeed => "Beetroot Seed",
            CauliflowerSeed => "Cauliflower Seed",
            ParsnipSeed => "Parsnip Seed",
            RadishSeed => "Radish Seed",
            Sunflower => "Sunflower",
            Potato => "Potato",
            Pumpkin => "Pumpkin",
            Beetroot => "Beetroot",
            Cauliflower => "Cauliflower",
            Parsnip => "Parsnip",
            Radish => "Radish",
            Axe => "Axe",
            Pickaxe => "Pickaxe",
            StonePickaxe => "Stone Pickaxe",
            IronPickaxe => "Iron Pickaxe",
            Wood => "Wood",
            Stone => "Stone",
            Iron => "Iron",
            Gold => "Gold",
            Egg => "Egg",
            ChickenCoop => "Chicken Coop",
            Scarecrow => "Scarecrow",
            GoldenCauliflower => "Golden Cauliflower",
            FarmCat => "Farm Cat",
            FarmDog => "Farm Dog",
            Gnome => "Gnome",
            EasterEgg => "Easter Egg",
        }
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
