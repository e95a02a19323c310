//! Action replay pipeline.
//!
//! The [`FarmEngine`] is the authoritative reducer for [`FarmState`]: every
//! state mutation flows through the same validate-then-apply pipeline, one
//! action at a time, in the order the batch was submitted. [`replay`] wraps
//! the engine for the save path: it works on a copy and returns the next
//! state only when the whole batch succeeds.

use chrono::{DateTime, Utc};

use crate::action::{Action, ActionError, ActionKind, FarmTransition};
use crate::catalog::Catalog;
use crate::state::FarmState;

/// Drives action transitions against a mutable farm state.
pub struct FarmEngine<'a> {
    state: &'a mut FarmState,
    catalog: &'a Catalog,
}

impl<'a> FarmEngine<'a> {
    pub fn new(state: &'a mut FarmState, catalog: &'a Catalog) -> Self {
        Self { state, catalog }
    }

    /// Executes a single action through the validate-then-apply pipeline.
    pub fn execute(&mut self, action: &Action) -> Result<(), ActionError> {
        match &action.kind {
            ActionKind::Plant(transition) => self.drive(transition, action.created_at),
            ActionKind::Harvest(transition) => self.drive(transition, action.created_at),
            ActionKind::Chop(transition) => self.drive(transition, action.created_at),
            ActionKind::Craft(transition) => self.drive(transition, action.created_at),
            ActionKind::Sell(transition) => self.drive(transition, action.created_at),
            ActionKind::Redeem(transition) => self.drive(transition, action.created_at),
        }
    }

    fn drive<T: FarmTransition>(
        &mut self,
        transition: &T,
        created_at: DateTime<Utc>,
    ) -> Result<(), ActionError> {
        transition.pre_validate(self.state, self.catalog, created_at)?;
        transition.apply(self.state, self.catalog, created_at)
    }
}

/// Replays a batch against a working copy of `state`.
///
/// Actions are applied in the received order (the temporal gate has
/// already established it is chronological). The first failing action
/// aborts the batch and the original state is left untouched.
pub fn replay(
    state: &FarmState,
    actions: &[Action],
    catalog: &Catalog,
) -> Result<FarmState, ActionError> {
    let mut next = state.clone();
    let mut engine = FarmEngine::new(&mut next, catalog);
    for action in actions {
        engine.execute(action)?;
    }
    Ok(next)
}
