//! Roulette sector betting calculator.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod wheel;
pub mod strategy;
pub mod dashboard;
