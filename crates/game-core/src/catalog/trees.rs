//! Default tree template used when topping trees back up after recovery.

use rust_decimal::Decimal;

/// Catalog defaults for every tree on a farm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeTemplate {
    /// Wood a fully recovered tree yields before it is exhausted.
    pub wood: Decimal,
    /// Seconds an exhausted tree needs before it refills.
    pub recovery_seconds: i64,
}

impl TreeTemplate {
    pub(super) fn standard() -> Self {
        Self {
            wood: Decimal::new(3, 0),
            recovery_seconds: 120 * 60,
        }
    }
}
