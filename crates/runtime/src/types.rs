//! Common type aliases used throughout the runtime.

/// Farm NFT identifier.
pub type FarmId = u64;

/// Hex wallet address, `0x`-prefixed.
pub type Address = String;

/// Integer token amount in wei, as a decimal string.
pub type WeiAmount = String;
