//! kds-eta - ready-time and delivery arrival predictions for the kitchen display
//!
//! Reads an order snapshot, prints predictions as JSON on stdout.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kds_eta::cli::{Cli, Command};
use kds_eta::config::Config;
use kds_eta::handlers::{self, SnapshotError};
use kds_eta::types::ErrorResponse;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            print_error("CONFIG_ERROR", &e);
            return ExitCode::FAILURE;
        }
    };

    let _guard = init_logging(&config.logs_dir);
    info!("Configuration loaded");

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Prediction failed: {:#}", e);
            let code = e
                .downcast_ref::<SnapshotError>()
                .map(SnapshotError::code)
                .unwrap_or("PREDICTION_FAILED");
            print_error(code, &e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Some(Command::Predict(args)) => {
            let response = handlers::predict::handle_predict(&args, config, chrono::Utc::now())?;
            print_json(&response, args.pretty)
        }
        Some(Command::ZoneEta { zones, zone }) => {
            let response = handlers::zones::handle_zone_eta(&zones, &zone)?;
            print_json(&response, false)
        }
        // arg_required_else_help prints help before we get here
        None => Ok(()),
    }
}

/// Logs go to stderr and a daily rolling file; stdout carries only JSON.
fn init_logging(logs_dir: &str) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,kds_eta=debug".into()),
    );
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if std::fs::create_dir_all(logs_dir).is_err() {
        tracing_subscriber::registry().with(filter).with(stderr_layer).init();
        return None;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, logs_dir, "kds-eta.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Some(guard)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn print_error(code: &str, err: &anyhow::Error) {
    let response = ErrorResponse::new(code, format!("{err:#}"));
    match serde_json::to_string(&response) {
        Ok(text) => println!("{text}"),
        Err(_) => eprintln!("{code}: {err:#}"),
    }
}
