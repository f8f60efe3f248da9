//! CLI argument parsing for the kds-eta binary.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kds-eta",
    about = "Kitchen ready-time and delivery arrival predictions",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Predict ready and arrival times for an order snapshot
    Predict(PredictArgs),
    /// Print the delivery estimate for one zone
    ZoneEta {
        /// Zone time CSV (zone_id,eta_minutes,distance_km)
        #[arg(long)]
        zones: PathBuf,
        /// Zone id to look up
        #[arg(long)]
        zone: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Snapshot JSON file, or `-` for stdin
    #[arg(long)]
    pub snapshot: PathBuf,
    /// Extra zone time rows from a CSV file
    #[arg(long)]
    pub zones: Option<PathBuf>,
    /// Simulate from this instant (RFC 3339) instead of the current time
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
    /// Override the number of kitchen operators
    #[arg(long, allow_negative_numbers = true)]
    pub operators: Option<i32>,
    /// Override the number of riders
    #[arg(long, allow_negative_numbers = true)]
    pub riders: Option<i32>,
    /// Include timeline buckets in the output
    #[arg(long)]
    pub timeline: bool,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
