//! Blockchain facade traits and their in-memory mocks.

mod mock;
mod traits;

pub use mock::{MockChain, MockSigner, MockWallet};
pub use traits::{
    ChainError, ChainReader, WalletVerifier, WithdrawPayload, WithdrawSignature, WithdrawSigner,
};
