//! Deterministic farm rules shared by the save and withdrawal paths.
//!
//! `farm-core` defines the canonical game rules: the static item catalog,
//! the farm state aggregate with decimal arithmetic, the temporal gate
//! that screens action batches, and the per-action transitions driven by
//! [`engine::FarmEngine`]. Everything here is pure and synchronous; I/O
//! and on-chain concerns live in the runtime crate.
pub mod action;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod state;
pub mod temporal;

pub use action::{
    Action, ActionError, ActionKind, ChopAction, CraftAction, FarmTransition, HarvestAction,
    PlantAction, RedeemAction, SellAction,
};
pub use catalog::{
    Catalog, CropProfile, Ingredient, ItemCategory, ItemDefinition, ItemName, Recipe, TreeTemplate,
    UnitScale, CATALOG,
};
pub use config::GameConfig;
pub use engine::{replay, FarmEngine};
pub use state::{round_sfl, FarmState, Field, StateError, Tree};
pub use temporal::{verify_batch, TemporalError};
