//! Seed growth table: what each seed becomes and how long it takes.

use rust_decimal::Decimal;

use super::items::ItemName;

/// Growth profile for a single seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropProfile {
    /// The crop added to inventory when the field is harvested.
    pub harvests_into: ItemName,
    /// Seconds between planting and the earliest valid harvest.
    pub grow_seconds: i64,
}

impl CropProfile {
    pub const fn new(harvests_into: ItemName, grow_seconds: i64) -> Self {
        Self {
            harvests_into,
            grow_seconds,
        }
    }
}

/// Sell price per unit for each crop, in SFL.
pub(super) fn sell_price(crop: ItemName) -> Option<Decimal> {
    let price = match crop {
        ItemName::Sunflower => Decimal::new(2, 2),
        ItemName::Potato => Decimal::new(14, 2),
        ItemName::Pumpkin => Decimal::new(4, 1),
        ItemName::Beetroot => Decimal::ONE,
        ItemName::Cauliflower => Decimal::new(2, 0),
        ItemName::Parsnip => Decimal::new(35, 1),
        ItemName::Radish => Decimal::new(6, 0),
        _ => return None,
    };
    Some(price)
}

/// Growth profile for each seed.
pub(super) fn crop_profile(seed: ItemName) -> Option<CropProfile> {
    let profile = match seed {
        ItemName::SunflowerSeed => CropProfile::new(ItemName::Sunflower, 60),
        ItemName::PotatoSeed => CropProfile::new(ItemName::Potato, 5 * 60),
        ItemName::PumpkinSeed => CropProfile::new(ItemName::Pumpkin, 60 * 60),
        ItemName::BeetrootSeed => CropProfile::new(ItemName::Beetroot, 4 * 60 * 60),
        ItemName::CauliflowerSeed => CropProfile::new(ItemName::Cauliflower, 8 * 60 * 60),
        ItemName::ParsnipSeed => CropProfile::new(ItemName::Parsnip, 12 * 60 * 60),
        ItemName::RadishSeed => CropProfile::new(ItemName::Radish, 24 * 60 * 60),
        _ => return None,
    };
    Some(profile)
}
