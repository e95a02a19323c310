//! On-chain read and signing facades.
//!
//! The engine never talks to the blockchain directly; these traits are
//! the entire surface it consumes. Real implementations wrap contract
//! clients, the mocks in [`super::mock`] run the same flows in-memory.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::SessionToken;
use crate::types::{Address, FarmId, WeiAmount};

/// Failures from chain reads or the signer service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The node or signer could not be reached. Retryable.
    #[error("chain unavailable: {0}")]
    Unavailable(String),
}

/// Read-only view of on-chain truth.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// SFL token balance of `address`, in wei.
    async fn load_balance(&self, address: &str) -> Result<WeiAmount, ChainError>;

    /// Item holdings of `address`, positional in catalog id order.
    async fn load_inventory(&self, address: &str) -> Result<Vec<WeiAmount>, ChainError>;

    /// Owner of the farm NFT, `None` when it was never minted.
    async fn owner_of(&self, farm_id: FarmId) -> Result<Option<Address>, ChainError>;
}

/// Payload handed to the external signer for a withdrawal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawPayload {
    pub sender: Address,
    pub farm_id: FarmId,
    pub session_id: SessionToken,
    pub sfl: Decimal,
    pub ids: Vec<u32>,
    pub amounts: Vec<WeiAmount>,
    /// Withdrawal tax in basis points.
    pub tax: u32,
}

/// Signature bundle the on-chain contract will accept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawSignature {
    pub signature: String,
    /// Unix timestamp after which the signature expires.
    pub deadline: u64,
}

/// External signing service for withdrawals.
#[async_trait]
pub trait WithdrawSigner: Send + Sync {
    async fn withdraw_signature(
        &self,
        payload: &WithdrawPayload,
    ) -> Result<WithdrawSignature, ChainError>;
}

/// Wallet signature verification, performed upstream of the engine.
pub trait WalletVerifier: Send + Sync {
    fn verify(&self, address: &str, signature: &str, message: &str) -> bool;
}
