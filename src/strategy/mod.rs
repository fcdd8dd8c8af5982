//! Strategy engine: skip distance, stake sizing and sector selection.

pub mod sector;
pub mod sizing;
pub mod skip;

use tracing::debug;

use crate::types::{BetRecommendation, CalcError, CalculationInput};
use crate::wheel;

pub use skip::compute_skip_distance;

/// Evaluate one pair of spins into a bet recommendation.
///
/// Steps:
/// 1. Skip distance from previous to current (fails on off-wheel numbers).
/// 2. Check it against the direction's acceptable window.
/// 3. Size the per-number and total stake from the bankroll.
/// 4. Build the 17-pocket sector, only when the skip is acceptable.
///
/// Pure: the same input always gives the same output.
pub fn evaluate_bet(input: &CalculationInput) -> Result<BetRecommendation, CalcError> {
    let skip_distance = compute_skip_distance(input.previous, input.current, input.direction)?;
    let is_valid = skip::is_acceptable(skip_distance, input.direction);
    let stake = sizing::size_stake(input.bankroll);

    let sector = if is_valid {
        // Lookup already succeeded inside compute_skip_distance
        let base = wheel::position_of(input.previous)
            .ok_or_else(|| CalcError::InvalidNumber(input.previous.to_string()))?;
        sector::build_sector(base, skip_distance, input.direction)
    } else {
        debug!(
            skip_distance,
            direction = %input.direction,
            window = ?skip::acceptable_window(input.direction),
            "Skip outside acceptable window, no sector"
        );
        Vec::new()
    };

    Ok(BetRecommendation {
        skip_distance,
        is_valid,
        bet_per_number: stake.per_number,
        total_bet: stake.total,
        sector,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
