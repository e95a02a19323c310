//! Repository trait definitions.

use async_trait::async_trait;
use farm_core::Action;

use crate::repository::types::{FarmDocument, GameStateDocument};
use crate::repository::RepositoryError;
use crate::session::SessionToken;
use crate::types::FarmId;

/// Atomic farm document update with compare-and-swap on the session.
#[derive(Clone, Debug)]
pub struct FarmUpdate {
    pub id: FarmId,
    /// Token the caller loaded; the update fails unless it still matches.
    pub expected_session: SessionToken,
    /// Freshly generated token committed with the new state.
    pub new_session: SessionToken,
    pub game_state: GameStateDocument,
}

/// Key/value store of farm documents.
///
/// Implementations must be linearizable per farm key; the save pipeline
/// relies on the session compare-and-swap as its only concurrency control.
#[async_trait]
pub trait FarmRepository: Send + Sync {
    async fn get_farm_by_id(&self, id: FarmId) -> Result<Option<FarmDocument>, RepositoryError>;

    /// Persists a new game state, failing with [`RepositoryError::Conflict`]
    /// when the stored session no longer matches `expected_session`.
    async fn update_game_state(&self, update: FarmUpdate) -> Result<(), RepositoryError>;
}

/// Append-only audit log of replayed actions.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn append(
        &self,
        farm_id: FarmId,
        session: SessionToken,
        actions: &[Action],
    ) -> Result<(), RepositoryError>;
}
