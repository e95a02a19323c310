//! Rounding rules for token-like quantities.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::GameConfig;

/// Rounds a quantity to SFL precision: half-even, 18 fractional digits.
///
/// Every value that enters [`crate::state::FarmState`] from a computation
/// that can exceed token precision (unit conversion, price multiplication)
/// passes through here so results are identical across platforms.
pub fn round_sfl(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        GameConfig::SFL_DECIMAL_PLACES,
        RoundingStrategy::MidpointNearestEven,
    )
}
