//! Save and withdrawal orchestration over the deterministic farm core.
//!
//! This crate wires the pure rules in `farm-core` to the consumed
//! infrastructure: the farm repository with its session compare-and-swap,
//! the audit event log, on-chain reads, and the withdrawal signer.
//!
//! Modules are organized by responsibility:
//! - [`save`] and [`withdraw`] host the two request pipelines
//! - [`reconcile`] merges on-chain truth into the loaded state
//! - [`repository`] and [`chain`] define the consumed interfaces along
//!   with in-memory/mock implementations
//! - [`units`], [`session`], [`config`], [`types`] provide the shared
//!   building blocks

pub mod chain;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod repository;
pub mod save;
pub mod session;
pub mod types;
pub mod units;
pub mod withdraw;

pub use chain::{
    ChainError, ChainReader, MockChain, MockSigner, MockWallet, WalletVerifier, WithdrawPayload,
    WithdrawSignature, WithdrawSigner,
};
pub use config::{Network, RuntimeConfig};
pub use error::{SaveError, WithdrawError};
pub use reconcile::{reconcile, OnChainHoldings};
pub use repository::{
    AuditEntry, DocumentError, EventStore, FarmDocument, FarmRepository, FarmUpdate,
    GameStateDocument, InMemoryEventStore, InMemoryFarmRepository, RepositoryError,
};
pub use save::{save_message, SavePipeline, SaveRequest};
pub use session::SessionToken;
pub use types::{Address, FarmId, WeiAmount};
pub use units::{decimal_from_wei, UnitsError};
pub use withdraw::{
    tax_basis_points, withdraw_message, WithdrawPipeline, WithdrawRequest, TAX_BRACKETS,
    TAX_FLOOR_BPS,
};
