//! Farm state model and its mutation helpers.

mod decimal;
mod error;
mod farm;

pub use decimal::round_sfl;
pub use error::StateError;
pub use farm::{FarmState, Field, Tree};
