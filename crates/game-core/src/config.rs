//! Fixed layout constants for every farm.

/// Farm-wide constants. These are rules of the game, not deployment
/// configuration; changing them changes what counts as a valid save.
pub struct GameConfig;

impl GameConfig {
    /// Number of crop plots a farm carries. Valid indices are `0..FIELD_COUNT`.
    pub const FIELD_COUNT: u32 = 17;

    /// Number of trees a farm carries. Valid indices are `0..TREE_COUNT`.
    pub const TREE_COUNT: u32 = 5;

    /// Fractional digits of the SFL token, matching the on-chain ERC-20.
    pub const SFL_DECIMAL_PLACES: u32 = 18;
}
