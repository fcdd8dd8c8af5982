//! Flat per-number stake sizing.
//!
//! One step of 0.10 per full 100 of bankroll, clamped to [0.10, 5.00].
//! A bankroll under 100 (including zero or negative) sizes to the floor.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::sector::SECTOR_SIZE;

/// Bankroll needed for each additional stake step.
pub const BANKROLL_UNIT: Decimal = dec!(100);
/// Stake added per bankroll unit.
pub const STAKE_STEP: Decimal = dec!(0.1);
pub const MIN_STAKE: Decimal = dec!(0.1);
pub const MAX_STAKE: Decimal = dec!(5.0);

/// Stake sized for one sector bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stake {
    pub per_number: Decimal,
    pub total: Decimal,
}

/// Per-number stake for a bankroll.
pub fn bet_per_number(bankroll: Decimal) -> Decimal {
    let steps = (bankroll / BANKROLL_UNIT).floor();
    (steps * STAKE_STEP).clamp(MIN_STAKE, MAX_STAKE)
}

/// Size the full sector bet: the per-number stake on every sector pocket.
pub fn size_stake(bankroll: Decimal) -> Stake {
    let per_number = bet_per_number(bankroll);
    let total = per_number * Decimal::from(SECTOR_SIZE);

    debug!(
        bankroll = %bankroll,
        per_number = format!("${:.2}", per_number),
        total = format!("${:.2}", total),
        "Stake sized"
    );

    Stake { per_number, total }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
