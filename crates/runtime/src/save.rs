//! The save pipeline: load, reconcile, gate, replay, persist, audit.
//!
//! One invocation handles one batch for one farm, start to finish. All
//! pure computation is synchronous; only the repository, chain, and
//! event-log calls suspend. Failure anywhere is terminal: no partial
//! state is persisted and no audit entry is written.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use farm_core::{replay, verify_batch, Action, FarmState, CATALOG};
use tracing::{debug, info};

use crate::chain::{ChainReader, WalletVerifier};
use crate::config::RuntimeConfig;
use crate::error::SaveError;
use crate::reconcile::{reconcile, OnChainHoldings};
use crate::repository::{EventStore, FarmRepository, FarmUpdate, GameStateDocument};
use crate::session::SessionToken;
use crate::types::{Address, FarmId};

/// A client-submitted batch of actions to persist.
#[derive(Clone, Debug)]
pub struct SaveRequest {
    pub farm_id: FarmId,
    /// Session token the client loaded with its last snapshot.
    pub session_id: SessionToken,
    pub sender: Address,
    pub signature: String,
    pub actions: Vec<Action>,
}

/// Message the wallet signature must cover for a save.
pub fn save_message(farm_id: FarmId, session: &SessionToken) -> String {
    format!("save:{farm_id}:{session}")
}

/// Orchestrates saves over the consumed facades.
pub struct SavePipeline {
    repository: Arc<dyn FarmRepository>,
    events: Arc<dyn EventStore>,
    chain: Arc<dyn ChainReader>,
    wallet: Arc<dyn WalletVerifier>,
    config: RuntimeConfig,
}

impl SavePipeline {
    pub fn new(
        repository: Arc<dyn FarmRepository>,
        events: Arc<dyn EventStore>,
        chain: Arc<dyn ChainReader>,
        wallet: Arc<dyn WalletVerifier>,
        config: RuntimeConfig,
    ) -> Self {
        Self {
            repository,
            events,
            chain,
            wallet,
            config,
        }
    }

    /// Runs a save against the current wall clock.
    pub async fn save(&self, request: SaveRequest) -> Result<FarmState, SaveError> {
        self.save_at(request, Utc::now()).await
    }

    /// Runs a save with an explicit `now`, the clock every temporal and
    /// growth check is measured against.
    pub async fn save_at(
        &self,
        request: SaveRequest,
        now: DateTime<Utc>,
    ) -> Result<FarmState, SaveError> {
        debug!(farm_id = request.farm_id, actions = request.actions.len(), "save requested");

        let farm = self
            .repository
            .get_farm_by_id(request.farm_id)
            .await?
            .ok_or(SaveError::FarmNotFound)?;

        let owner = self
            .chain
            .owner_of(request.farm_id)
            .await?
            .ok_or(SaveError::FarmNotFound)?;
        if !owner.eq_ignore_ascii_case(&request.sender) {
            return Err(SaveError::NotOwner);
        }

        if !self.config.allows(&request.sender) {
            return Err(SaveError::NotWhitelisted);
        }

        let message = save_message(request.farm_id, &request.session_id);
        if !self.wallet.verify(&request.sender, &request.signature, &message) {
            return Err(SaveError::BadSignature);
        }

        let mut state = farm.game_state.to_state(farm.address.clone())?;

        let holdings = OnChainHoldings {
            balance_wei: self.chain.load_balance(&farm.address).await?,
            inventory_wei: self.chain.load_inventory(&farm.address).await?,
        };
        reconcile(&mut state, &holdings, &CATALOG)?;

        verify_batch(&request.actions, now)?;
        let next = replay(&state, &request.actions, &CATALOG)?;

        let new_session = SessionToken::generate();
        self.repository
            .update_game_state(FarmUpdate {
                id: request.farm_id,
                expected_session: request.session_id,
                new_session,
                game_state: GameStateDocument::from_state(&next),
            })
            .await?;

        self.events
            .append(request.farm_id, new_session, &request.actions)
            .await?;

        info!(
            farm_id = request.farm_id,
            actions = request.actions.len(),
            %new_session,
            "farm saved"
        );
        Ok(next)
    }
}
