//! The withdrawal preparer: tax, validation, and the signing payload.
//!
//! Withdrawals never mutate the farm. The on-chain contract moves the
//! items; a later save observes the change through reconcile.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info};

use farm_core::CATALOG;

use crate::chain::{ChainReader, WalletVerifier, WithdrawPayload, WithdrawSignature, WithdrawSigner};
use crate::config::RuntimeConfig;
use crate::error::WithdrawError;
use crate::repository::FarmRepository;
use crate::session::SessionToken;
use crate::types::{Address, FarmId, WeiAmount};

/// Withdrawal tax brackets as `(upper bound in SFL, basis points)`.
/// Amounts at or above the last bound pay [`TAX_FLOOR_BPS`].
pub const TAX_BRACKETS: [(i64, u32); 5] = [
    (10, 3_000),
    (100, 2_500),
    (1_000, 2_000),
    (10_000, 1_500),
    (100_000, 1_000),
];

/// Minimum withdrawal tax in basis points.
pub const TAX_FLOOR_BPS: u32 = 500;

/// Tax charged on an SFL withdrawal, in basis points.
pub fn tax_basis_points(sfl: Decimal) -> u32 {
    for (bound, bps) in TAX_BRACKETS {
        if sfl < Decimal::new(bound, 0) {
            return bps;
        }
    }
    TAX_FLOOR_BPS
}

/// A client request to move holdings to its on-chain wallet.
#[derive(Clone, Debug)]
pub struct WithdrawRequest {
    pub farm_id: FarmId,
    pub session_id: SessionToken,
    pub sender: Address,
    pub signature: String,
    /// SFL amount leaving the farm.
    pub sfl: Decimal,
    /// On-chain item ids being withdrawn. May be empty: an empty
    /// withdrawal is a legal no-op that still consumes a signature.
    pub ids: Vec<u32>,
    /// Wei amounts, parallel to `ids`.
    pub amounts: Vec<WeiAmount>,
}

/// Message the wallet signature must cover for a withdrawal.
pub fn withdraw_message(farm_id: FarmId, session: &SessionToken) -> String {
    format!("withdraw:{farm_id}:{session}")
}

/// Validates withdrawal requests and relays them to the external signer.
pub struct WithdrawPipeline {
    repository: Arc<dyn FarmRepository>,
    chain: Arc<dyn ChainReader>,
    signer: Arc<dyn WithdrawSigner>,
    wallet: Arc<dyn WalletVerifier>,
    config: RuntimeConfig,
}

impl WithdrawPipeline {
    pub fn new(
        repository: Arc<dyn FarmRepository>,
        chain: Arc<dyn ChainReader>,
        signer: Arc<dyn WithdrawSigner>,
        wallet: Arc<dyn WalletVerifier>,
        config: RuntimeConfig,
    ) -> Self {
        Self {
            repository,
            chain,
            signer,
            wallet,
            config,
        }
    }

    /// Computes the tax and returns the signer's bundle verbatim.
    pub async fn prepare(
        &self,
        request: WithdrawRequest,
    ) -> Result<WithdrawSignature, WithdrawError> {
        debug!(farm_id = request.farm_id, ids = request.ids.len(), "withdrawal requested");

        self.repository
            .get_farm_by_id(request.farm_id)
            .await?
            .ok_or(WithdrawError::FarmNotFound)?;

        let owner = self
            .chain
            .owner_of(request.farm_id)
            .await?
            .ok_or(WithdrawError::FarmNotFound)?;
        if !owner.eq_ignore_ascii_case(&request.sender) {
            return Err(WithdrawError::NotOwner);
        }

        if !self.config.allows(&request.sender) {
            return Err(WithdrawError::NotWhitelisted);
        }

        let message = withdraw_message(request.farm_id, &request.session_id);
        if !self.wallet.verify(&request.sender, &request.signature, &message) {
            return Err(WithdrawError::BadSignature);
        }

        // The on-chain contract checks this as well; assert it here too.
        if request.ids.len() != request.amounts.len() {
            return Err(WithdrawError::LengthMismatch);
        }

        for id in &request.ids {
            let item = CATALOG
                .item_by_id(*id)
                .ok_or(WithdrawError::UnknownItem(*id))?;
            if !CATALOG.is_withdrawable(item) {
                return Err(WithdrawError::NotWithdrawable(item));
            }
        }

        let tax = tax_basis_points(request.sfl);
        let payload = WithdrawPayload {
            sender: request.sender,
            farm_id: request.farm_id,
            session_id: request.session_id,
            sfl: request.sfl,
            ids: request.ids,
            amounts: request.amounts,
            tax,
        };

        let bundle = self.signer.withdraw_signature(&payload).await?;
        info!(farm_id = payload.farm_id, tax, "withdrawal signed");
        Ok(bundle)
    }
}
