//! Repository layer for farm documents and the action audit log.
//!
//! - `traits`: consumed interfaces (farm store with session CAS, event log)
//! - `types`: persisted document shapes
//! - `memory`: in-memory implementations (tests, local runs)

mod error;
mod memory;
mod traits;
mod types;

pub use error::RepositoryError;
pub use memory::{AuditEntry, InMemoryEventStore, InMemoryFarmRepository};
pub use traits::{EventStore, FarmRepository, FarmUpdate};
pub use types::{DocumentError, FarmDocument, GameStateDocument};
