//! Wei to decimal conversion for on-chain amounts.

use farm_core::{round_sfl, UnitScale};
use rust_decimal::Decimal;
use thiserror::Error;

/// Failures converting an on-chain wei string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("invalid wei amount: {0}")]
    InvalidWei(String),

    #[error("wei amount out of range: {0}")]
    OutOfRange(String),
}

/// Converts a non-negative integer wei string to a decimal quantity.
///
/// Supply-limited items map one wei to one unit; the SFL token carries 18
/// fractional digits. Anything non-numeric, negative, or too large for
/// the decimal representation is rejected rather than truncated.
pub fn decimal_from_wei(wei: &str, unit: UnitScale) -> Result<Decimal, UnitsError> {
    let value: u128 = wei
        .trim()
        .parse()
        .map_err(|_| UnitsError::InvalidWei(wei.to_string()))?;
    let value = i128::try_from(value).map_err(|_| UnitsError::OutOfRange(wei.to_string()))?;

    let scale = match unit {
        UnitScale::Whole => 0,
        UnitScale::Token18 => 18,
    };
    Decimal::try_from_i128_with_scale(value, scale)
        .map(round_sfl)
        .map_err(|_| UnitsError::OutOfRange(wei.to_string()))
}
