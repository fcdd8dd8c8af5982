//! HTTP API tests against the full router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tower::ServiceExt;

use sector_calc::config::DefaultsConfig;
use sector_calc::dashboard::{build_router, DashboardState};
use sector_calc::types::Direction;

fn app_with(defaults: DefaultsConfig) -> Router {
    build_router(Arc::new(DashboardState::new(defaults)), "*").unwrap()
}

async fn evaluate(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 10_000).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn configured_defaults_fill_missing_fields() {
    let app = app_with(DefaultsConfig {
        direction: Direction::Clockwise,
        bankroll: dec!(5000),
    });
    // 0 -> 5 clockwise is 19 pockets, inside 10..=22
    let (status, json) = evaluate(app, r#"{"previousNumber": 0, "currentNumber": 5}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["skipDistance"], 19);
    assert_eq!(json["isValid"], true);
    assert_eq!(json["betPerNumber"].as_f64(), Some(5.0));
    assert_eq!(json["totalBet"].as_f64(), Some(85.0));
}

#[tokio::test]
async fn invalid_skip_still_reports_stake() {
    let app = app_with(DefaultsConfig::default());
    let (status, json) = evaluate(
        app,
        r#"{"previousNumber": 0, "currentNumber": 0, "direction": "CCW", "bankroll": 100}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["isValid"], false);
    assert_eq!(json["totalBet"].as_f64(), Some(1.7));
    assert_eq!(json["sector"], serde_json::json!([]));
}

#[tokio::test]
async fn string_numbers_are_accepted() {
    let app = app_with(DefaultsConfig::default());
    let (status, json) = evaluate(
        app,
        r#"{"previousNumber": "0", "currentNumber": " 5 ", "direction": "CCW", "bankroll": 250}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["skipDistance"], 18);
}

#[tokio::test]
async fn non_numeric_input_is_an_error() {
    let app = app_with(DefaultsConfig::default());
    let (status, json) =
        evaluate(app, r#"{"previousNumber": "", "currentNumber": 5}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().starts_with("Invalid number input"));
}

#[tokio::test]
async fn off_wheel_number_is_an_error() {
    let app = app_with(DefaultsConfig::default());
    let (status, json) = evaluate(
        app,
        r#"{"previousNumber": 0, "currentNumber": 37, "direction": "CW", "bankroll": 100}"#,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json, serde_json::json!({"error": "Invalid number input: 37"}));
}

#[tokio::test]
async fn non_number_json_types_are_an_error() {
    for body in [
        r#"{"previousNumber": true, "currentNumber": 5}"#,
        r#"{"previousNumber": [0], "currentNumber": 5}"#,
        r#"{"previousNumber": 0, "currentNumber": {"n": 5}}"#,
    ] {
        let app = app_with(DefaultsConfig::default());
        let (status, json) = evaluate(app, body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
        assert!(
            json["error"].as_str().unwrap().starts_with("Invalid number input"),
            "{body}"
        );
    }
}

#[tokio::test]
async fn malformed_body_still_answers_with_error_json() {
    let app = app_with(DefaultsConfig::default());
    let (status, json) = evaluate(app, r#"{"previousNumber": 0, "direction": "UP"}"#).await;
    assert!(status.is_client_error());
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn huge_bankroll_saturates_at_max_stake() {
    let app = app_with(DefaultsConfig::default());
    let (status, json) = evaluate(
        app,
        r#"{"previousNumber": 0, "currentNumber": 5, "direction": "CCW", "bankroll": 1e30}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["betPerNumber"].as_f64(), Some(5.0));
    assert_eq!(json["totalBet"].as_f64(), Some(85.0));
}
