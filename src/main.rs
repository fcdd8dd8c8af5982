//! Roulette sector betting calculator.
//!
//! Entry point. Loads configuration, initialises structured logging, then
//! either serves the calculator over HTTP or evaluates a single pair of
//! spins from the command line.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, warn};

use sector_calc::config::AppConfig;
use sector_calc::dashboard::{self, DashboardState};
use sector_calc::strategy;
use sector_calc::types::{parse_bankroll, parse_wheel_number, CalculationInput, Direction};
use sector_calc::wheel;

#[derive(Parser)]
#[command(name = "sector-calc")]
#[command(about = "Skip-distance sector betting calculator for a European roulette wheel")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the calculator page and JSON API
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Evaluate one pair of spins and print the recommendation
    Eval {
        /// Previous winning number
        #[arg(long, allow_hyphen_values = true)]
        previous: String,
        /// Current winning number
        #[arg(long, allow_hyphen_values = true)]
        current: String,
        /// Spin direction (CW or CCW); defaults to the configured direction
        #[arg(short, long)]
        direction: Option<Direction>,
        /// Bankroll (plain or scientific, e.g. 1e4); defaults to the configured bankroll
        #[arg(short, long, allow_hyphen_values = true, value_parser = parse_bankroll)]
        bankroll: Option<Decimal>,
        /// Print the JSON response instead of the text summary
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let cli = Cli::parse();
    let cfg = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Serve { port } => run_server(cfg, port).await,
        Commands::Eval {
            previous,
            current,
            direction,
            bankroll,
            json,
        } => run_eval(&cfg, &previous, &current, direction, bankroll, json),
    }
}

async fn run_server(mut cfg: AppConfig, port: Option<u16>) -> Result<()> {
    if let Some(port) = port {
        cfg.server.port = port;
    }

    info!(
        name = %cfg.app.name,
        default_direction = %cfg.defaults.direction,
        default_bankroll = %cfg.defaults.bankroll,
        "Calculator starting up"
    );

    let addr = cfg.bind_addr();
    let state = Arc::new(DashboardState::new(cfg.defaults.clone()));
    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            warn!("Failed to listen for Ctrl+C; server will run until killed");
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received.");
    };

    dashboard::serve(state, &addr, &cfg.server.cors_origin, shutdown).await?;
    info!("Calculator shut down cleanly.");
    Ok(())
}

fn run_eval(
    cfg: &AppConfig,
    previous: &str,
    current: &str,
    direction: Option<Direction>,
    bankroll: Option<Decimal>,
    json: bool,
) -> Result<()> {
    let parsed = parse_wheel_number(previous)
        .and_then(|p| parse_wheel_number(current).map(|c| (p, c)))
        .and_then(|(previous, current)| {
            strategy::evaluate_bet(&CalculationInput {
                previous,
                current,
                direction: direction.unwrap_or(cfg.defaults.direction),
                bankroll: bankroll.unwrap_or(cfg.defaults.bankroll),
            })
        });

    let rec = match parsed {
        Ok(rec) => rec,
        Err(e) => {
            if json {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
            }
            bail!(e);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
        return Ok(());
    }

    println!("{}", rec.summary());
    if rec.is_valid {
        println!();
        println!("Visual Wheel Overlay");
        println!("{}", wheel::render_overlay(&rec.sector, 6));
    }
    Ok(())
}

/// Initialise the `tracing` subscriber.
///
/// Logs go to stderr so `eval --json` output stays machine-readable.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sector_calc=info"));

    let json_logging = std::env::var("SECTOR_CALC_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
