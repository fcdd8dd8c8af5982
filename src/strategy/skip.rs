//! Skip distance between two spins.
//!
//! Counts how many pockets the ball travelled from the previous winning
//! number to the current one, following the spin direction.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::types::{CalcError, Direction};
use crate::wheel::{self, POCKETS};

/// Acceptable skip distances, clockwise.
pub const CLOCKWISE_WINDOW: RangeInclusive<u8> = 10..=22;

/// Acceptable skip distances, counter-clockwise. Wider than clockwise on purpose.
pub const COUNTER_CLOCKWISE_WINDOW: RangeInclusive<u8> = 8..=24;

/// Acceptable skip window for a direction.
pub fn acceptable_window(direction: Direction) -> RangeInclusive<u8> {
    match direction {
        Direction::Clockwise => CLOCKWISE_WINDOW,
        Direction::CounterClockwise => COUNTER_CLOCKWISE_WINDOW,
    }
}

/// Whether `skip` falls inside the direction's window.
pub fn is_acceptable(skip: u8, direction: Direction) -> bool {
    acceptable_window(direction).contains(&skip)
}

/// Pockets travelled from `previous` to `current`, always in `0..=36`.
///
/// Fails with [`CalcError::InvalidNumber`] if either value is not a pocket.
pub fn compute_skip_distance(
    previous: i64,
    current: i64,
    direction: Direction,
) -> Result<u8, CalcError> {
    let from = wheel::position_of(previous)
        .ok_or_else(|| CalcError::InvalidNumber(previous.to_string()))?;
    let to = wheel::position_of(current)
        .ok_or_else(|| CalcError::InvalidNumber(current.to_string()))?;

    let skip = match direction {
        Direction::Clockwise => (to + POCKETS - from) % POCKETS,
        Direction::CounterClockwise => (from + POCKETS - to) % POCKETS,
    };

    debug!(previous, current, %direction, from, to, skip, "Skip distance computed");

    // POCKETS fits in a u8
    Ok(skip as u8)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
