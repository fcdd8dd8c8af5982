//! Shared types for the sector calculator.
//!
//! The input is an immutable value passed into the calculation and the
//! recommendation is an immutable value coming out of it. Nothing in here
//! holds state between calls.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Spin direction of the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "CW")]
    Clockwise,
    #[serde(rename = "CCW")]
    CounterClockwise,
}

impl Direction {
    pub const ALL: &'static [Direction] = &[Direction::Clockwise, Direction::CounterClockwise];

    /// Short wire name ("CW" / "CCW").
    pub fn code(&self) -> &'static str {
        match self {
            Direction::Clockwise => "CW",
            Direction::CounterClockwise => "CCW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown spin direction: {0} (expected CW or CCW)")]
pub struct ParseDirectionError(pub String);

/// Case-insensitive; accepts the short codes and the spelled-out names.
impl std::str::FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cw" | "clockwise" => Ok(Direction::Clockwise),
            "ccw" | "counterclockwise" | "counter-clockwise" | "anticlockwise" => {
                Ok(Direction::CounterClockwise)
            }
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One calculation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    pub previous: i64,
    pub current: i64,
    pub direction: Direction,
    /// Negative and zero bankrolls are allowed; they size to the minimum stake.
    pub bankroll: Decimal,
}

/// A wheel number as it arrives over the wire: JSON integer, JSON float, or text.
/// Anything else (booleans, arrays, objects) lands in `Other` and is rejected
/// as an invalid number rather than as a malformed body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl NumberField {
    /// Reduce to an integer. Fractional and non-numeric values are rejected.
    pub fn to_integer(&self) -> Result<i64, CalcError> {
        match self {
            NumberField::Integer(n) => Ok(*n),
            NumberField::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64 {
                    Ok(*f as i64)
                } else {
                    Err(CalcError::InvalidNumber(f.to_string()))
                }
            }
            NumberField::Text(s) => parse_wheel_number(s),
            NumberField::Other(v) => Err(CalcError::InvalidNumber(v.to_string())),
        }
    }
}

/// Parse a wheel number typed by a human. Surrounding whitespace is ignored.
///
/// This is numeric parsing only; whether the value is actually a pocket is
/// decided later by the position lookup. An empty field is rejected rather
/// than coerced to pocket 0 the way a browser's `Number("")` would.
pub fn parse_wheel_number(raw: &str) -> Result<i64, CalcError> {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }
    // "5.0" is still five
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => Ok(f as i64),
        _ => Err(CalcError::InvalidNumber(raw.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Bankroll
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid bankroll: {0}")]
pub struct ParseBankrollError(pub String);

/// Convert a float bankroll to a decimal, saturating at the decimal range.
/// Any bankroll that large already sizes to the maximum stake. `None` for NaN.
pub fn saturating_bankroll(value: f64) -> Option<Decimal> {
    if value.is_nan() {
        return None;
    }
    Some(Decimal::from_f64(value).unwrap_or(if value > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    }))
}

/// Parse a bankroll typed by a human: plain decimal, scientific notation, or
/// any finite or infinite float (saturated).
pub fn parse_bankroll(raw: &str) -> Result<Decimal, ParseBankrollError> {
    let trimmed = raw.trim();
    if let Ok(d) = Decimal::from_str(trimmed) {
        return Ok(d);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(saturating_bankroll)
        .ok_or_else(|| ParseBankrollError(raw.to_string()))
}

/// Serde helper for an optional numeric bankroll that may exceed the decimal range.
pub fn deserialize_bankroll<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(v) => saturating_bankroll(v)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("bankroll is not a number")),
    }
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// Outcome of a successful evaluation.
///
/// `bet_per_number` and `total_bet` are reported even when the skip distance
/// is outside the acceptable window; `sector` is empty in that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRecommendation {
    pub skip_distance: u8,
    pub is_valid: bool,
    pub bet_per_number: Decimal,
    pub total_bet: Decimal,
    pub sector: Vec<u8>,
}

impl BetRecommendation {
    /// Human-readable result text.
    pub fn summary(&self) -> String {
        if !self.is_valid {
            return format!(
                "Skip distance {} is outside the optimal range. No bet recommended.",
                self.skip_distance
            );
        }
        let sector = self
            .sector
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Skip Distance: {}\nBet per Number: ${:.2}\nTotal Bet: ${:.2}\nBet on Sector: {}",
            self.skip_distance, self.bet_per_number, self.total_bet, sector
        )
    }
}

impl fmt::Display for BetRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skip={} valid={} per_number=${:.2} total=${:.2} sector={:?}",
            self.skip_distance, self.is_valid, self.bet_per_number, self.total_bet, self.sector
        )
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Calculation errors. Returned as values, never raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Not a numeric value, not an integer, or not a pocket on the wheel.
    #[error("Invalid number input: {0}")]
    InvalidNumber(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
