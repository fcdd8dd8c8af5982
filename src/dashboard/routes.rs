//! Calculator API route handlers.
//!
//! All endpoints return JSON. State is shared via `Arc<DashboardState>` and
//! is read-only once the server starts.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::DefaultsConfig;
use crate::strategy::{self, skip};
use crate::types::{
    self, BetRecommendation, CalcError, CalculationInput, Direction, NumberField,
};
use crate::wheel::WHEEL_LAYOUT;

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct DashboardState {
    pub defaults: DefaultsConfig,
}

impl DashboardState {
    pub fn new(defaults: DefaultsConfig) -> Self {
        Self { defaults }
    }
}

pub type AppState = Arc<DashboardState>;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body of `POST /api/evaluate`. Direction and bankroll fall back to the
/// configured defaults when left out.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    #[serde(default)]
    pub previous_number: Option<NumberField>,
    #[serde(default)]
    pub current_number: Option<NumberField>,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default, deserialize_with = "types::deserialize_bankroll")]
    pub bankroll: Option<rust_decimal::Decimal>,
}

impl EvaluateRequest {
    /// Resolve into a calculation input. Missing or non-numeric wheel numbers
    /// are `InvalidNumber`.
    pub fn into_input(self, defaults: &DefaultsConfig) -> Result<CalculationInput, CalcError> {
        Ok(CalculationInput {
            previous: required_number(self.previous_number)?,
            current: required_number(self.current_number)?,
            direction: self.direction.unwrap_or(defaults.direction),
            bankroll: self.bankroll.unwrap_or(defaults.bankroll),
        })
    }
}

fn required_number(field: Option<NumberField>) -> Result<i64, CalcError> {
    field
        .ok_or_else(|| CalcError::InvalidNumber(String::new()))?
        .to_integer()
}

/// Either the recommendation or an error message, never both.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EvaluateResponse {
    Recommendation(BetRecommendation),
    Error { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct SkipWindow {
    pub direction: Direction,
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelResponse {
    pub layout: Vec<u8>,
    pub sector_size: u8,
    pub windows: Vec<SkipWindow>,
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// POST /api/evaluate
///
/// Every failure, including a body that does not parse, answers with `{error}`.
pub async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Evaluation body rejected");
            return (
                rejection.status(),
                Json(EvaluateResponse::Error {
                    error: rejection.body_text(),
                }),
            );
        }
    };

    let result = req
        .into_input(&state.defaults)
        .and_then(|input| strategy::evaluate_bet(&input));

    match result {
        Ok(rec) => {
            info!(recommendation = %rec, "Bet evaluated");
            (StatusCode::OK, Json(EvaluateResponse::Recommendation(rec)))
        }
        Err(e) => {
            warn!(error = %e, "Evaluation rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(EvaluateResponse::Error {
                    error: e.to_string(),
                }),
            )
        }
    }
}

/// GET /api/wheel
pub async fn get_wheel() -> Json<WheelResponse> {
    let windows = Direction::ALL
        .iter()
        .map(|&direction| {
            let window = skip::acceptable_window(direction);
            SkipWindow {
                direction,
                min: *window.start(),
                max: *window.end(),
            }
        })
        .collect();

    Json(WheelResponse {
        layout: WHEEL_LAYOUT.to_vec(),
        sector_size: strategy::sector::SECTOR_SIZE,
        windows,
    })
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
