//! Temporal plausibility gate for action batches.
//!
//! A batch is replayed only if its timestamps could have been produced by
//! a human playing in real time: chronologically ordered, recent, tightly
//! bounded, and not machine-gunned. Every threshold is a named constant;
//! the checks run in the order they are listed so the first violated rule
//! wins.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::action::Action;

/// Allowed client clock skew into the future.
pub const MAX_CLOCK_SKEW_MS: i64 = 60_000;

/// Oldest the first action of a batch may be relative to now.
pub const MAX_BATCH_AGE_MS: i64 = 5 * 60_000;

/// Widest span a single batch may cover.
pub const MAX_BATCH_RANGE_MS: i64 = 2 * 60_000;

/// Minimum spacing between consecutive actions.
pub const MIN_ACTION_GAP_MS: i64 = 10;

/// Window length for the burst check.
pub const DENSITY_WINDOW_MS: i64 = 300;

/// Actions allowed inside one density window.
pub const DENSITY_MAX_ACTIONS: usize = 2;

/// Rejections produced by the gate. Messages are stable API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TemporalError {
    #[error("Events must be in chronological order")]
    OutOfOrder,

    #[error("Event cannot be in the future")]
    InFuture,

    #[error("Event is too old")]
    TooOld,

    #[error("Event range is too large")]
    RangeTooLarge,

    #[error("Event fired too quickly")]
    GapTooSmall,

    #[error("Too many events in a short time")]
    TooDense,
}

/// Validates the timing of a batch against `now`.
///
/// An empty batch passes vacuously. The batch itself is not mutated and
/// no state is consulted; rejection leaves the farm untouched.
pub fn verify_batch(actions: &[Action], now: DateTime<Utc>) -> Result<(), TemporalError> {
    let (first, last) = match (actions.first(), actions.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Ok(()),
    };

    for pair in actions.windows(2) {
        if pair[1].created_at < pair[0].created_at {
            return Err(TemporalError::OutOfOrder);
        }
    }

    if millis_between(now, last.created_at) > MAX_CLOCK_SKEW_MS {
        return Err(TemporalError::InFuture);
    }

    if millis_between(first.created_at, now) > MAX_BATCH_AGE_MS {
        return Err(TemporalError::TooOld);
    }

    if millis_between(first.created_at, last.created_at) > MAX_BATCH_RANGE_MS {
        return Err(TemporalError::RangeTooLarge);
    }

    for pair in actions.windows(2) {
        if millis_between(pair[0].created_at, pair[1].created_at) < MIN_ACTION_GAP_MS {
            return Err(TemporalError::GapTooSmall);
        }
    }

    // Burst check: a run of DENSITY_MAX_ACTIONS + 1 actions where every
    // consecutive gap is under the window means more than
    // DENSITY_MAX_ACTIONS landed "in a short time".
    for run in actions.windows(DENSITY_MAX_ACTIONS + 1) {
        let dense = run
            .windows(2)
            .all(|pair| millis_between(pair[0].created_at, pair[1].created_at) < DENSITY_WINDOW_MS);
        if dense {
            return Err(TemporalError::TooDense);
        }
    }

    Ok(())
}

fn millis_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later - earlier).num_milliseconds()
}
