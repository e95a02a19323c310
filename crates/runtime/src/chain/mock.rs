//! Mock chain, signer, and wallet for testing without a network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::chain::traits::{
    ChainError, ChainReader, WalletVerifier, WithdrawPayload, WithdrawSignature, WithdrawSigner,
};
use crate::types::{Address, FarmId, WeiAmount};

/// In-memory chain state: ownerships, balances, and item holdings.
///
/// Addresses without seeded entries read as zero balance and an empty
/// inventory, matching a wallet that never touched the contracts.
#[derive(Clone, Default)]
pub struct MockChain {
    owners: Arc<Mutex<HashMap<FarmId, Address>>>,
    balances: Arc<Mutex<HashMap<Address, WeiAmount>>>,
    inventories: Arc<Mutex<HashMap<Address, Vec<WeiAmount>>>>,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_owner(&self, farm_id: FarmId, owner: impl Into<Address>) {
        self.owners
            .lock()
            .expect("mock chain lock")
            .insert(farm_id, owner.into());
    }

    pub fn set_balance(&self, address: impl Into<Address>, wei: impl Into<WeiAmount>) {
        self.balances
            .lock()
            .expect("mock chain lock")
            .insert(address.into(), wei.into());
    }

    pub fn set_inventory(&self, address: impl Into<Address>, wei: Vec<WeiAmount>) {
        self.inventories
            .lock()
            .expect("mock chain lock")
            .insert(address.into(), wei);
    }
}

#[async_trait]
impl ChainReader for MockChain {
    async fn load_balance(&self, address: &str) -> Result<WeiAmount, ChainError> {
        Ok(self
            .balances
            .lock()
            .expect("mock chain lock")
            .get(address)
            .cloned()
            .unwrap_or_else(|| "0".to_string()))
    }

    async fn load_inventory(&self, address: &str) -> Result<Vec<WeiAmount>, ChainError> {
        Ok(self
            .inventories
            .lock()
            .expect("mock chain lock")
            .get(address)
            .cloned()
            .unwrap_or_default())
    }

    async fn owner_of(&self, farm_id: FarmId) -> Result<Option<Address>, ChainError> {
        Ok(self
            .owners
            .lock()
            .expect("mock chain lock")
            .get(&farm_id)
            .cloned())
    }
}

/// Signer that stamps every payload with a fixed signature and deadline.
#[derive(Clone)]
pub struct MockSigner {
    signature: String,
    deadline: u64,
    requests: Arc<Mutex<Vec<WithdrawPayload>>>,
}

impl Default for MockSigner {
    fn default() -> Self {
        Self {
            signature: "0xmocked-withdraw-signature".to_string(),
            deadline: 1_800_000_000,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockSigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads this signer has been asked to sign, in order.
    pub fn requests(&self) -> Vec<WithdrawPayload> {
        self.requests.lock().expect("mock signer lock").clone()
    }
}

#[async_trait]
impl WithdrawSigner for MockSigner {
    async fn withdraw_signature(
        &self,
        payload: &WithdrawPayload,
    ) -> Result<WithdrawSignature, ChainError> {
        self.requests
            .lock()
            .expect("mock signer lock")
            .push(payload.clone());
        Ok(WithdrawSignature {
            signature: self.signature.clone(),
            deadline: self.deadline,
        })
    }
}

/// Wallet verifier with a fixed verdict.
#[derive(Clone, Copy)]
pub struct MockWallet {
    valid: bool,
}

impl MockWallet {
    /// Accepts every signature.
    pub fn accepting() -> Self {
        Self { valid: true }
    }

    /// Rejects every signature.
    pub fn rejecting() -> Self {
        Self { valid: false }
    }
}

impl WalletVerifier for MockWallet {
    fn verify(&self, _address: &str, _signature: &str, _message: &str) -> bool {
        self.valid
    }
}
