//! In-memory repository implementations for tests and local runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use farm_core::Action;

use crate::repository::traits::{EventStore, FarmRepository, FarmUpdate};
use crate::repository::types::FarmDocument;
use crate::repository::RepositoryError;
use crate::session::SessionToken;
use crate::types::FarmId;

/// Farm store backed by a mutex-guarded map.
#[derive(Clone, Default)]
pub struct InMemoryFarmRepository {
    farms: Arc<Mutex<HashMap<FarmId, FarmDocument>>>,
}

impl InMemoryFarmRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a farm document, replacing any existing one.
    pub fn insert(&self, document: FarmDocument) {
        self.farms
            .lock()
            .expect("farm store lock")
            .insert(document.id, document);
    }

    /// Current document for assertions in tests.
    pub fn document(&self, id: FarmId) -> Option<FarmDocument> {
        self.farms.lock().expect("farm store lock").get(&id).cloned()
    }
}

#[async_trait]
impl FarmRepository for InMemoryFarmRepository {
    async fn get_farm_by_id(&self, id: FarmId) -> Result<Option<FarmDocument>, RepositoryError> {
        Ok(self.farms.lock().expect("farm store lock").get(&id).cloned())
    }

    async fn update_game_state(&self, update: FarmUpdate) -> Result<(), RepositoryError> {
        let mut farms = self.farms.lock().expect("farm store lock");
        let document = farms.get_mut(&update.id).ok_or(RepositoryError::Conflict)?;
        if document.session != update.expected_session {
            return Err(RepositoryError::Conflict);
        }
        document.session = update.new_session;
        document.game_state = update.game_state;
        Ok(())
    }
}

/// One audit entry per committed save.
#[derive(Clone, Debug)]
pub struct AuditEntry {
    pub farm_id: FarmId,
    pub session: SessionToken,
    pub actions: Vec<Action>,
}

/// Append-only in-memory event log.
#[derive(Clone, Default)]
pub struct InMemoryEventStore {
    entries: Arc<Mutex<Vec<AuditEntry>>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().expect("event store lock").clone()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(
        &self,
        farm_id: FarmId,
        session: SessionToken,
        actions: &[Action],
    ) -> Result<(), RepositoryError> {
        self.entries
            .lock()
            .expect("event store lock")
            .push(AuditEntry {
                farm_id,
                session,
                actions: actions.to_vec(),
            });
        Ok(())
    }
}
