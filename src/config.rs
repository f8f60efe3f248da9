//! Configuration management

use std::str::FromStr;

use anyhow::{self, Context, Result};
use chrono::FixedOffset;

use crate::defaults::*;
use crate::services::capacity::{parse_weekday_counts, CapacityPolicy};
use crate::services::prediction::EngineSettings;
use crate::services::production_time::PrepMinutes;
use crate::services::ready_schedule::ProductionSettings;
use crate::services::timeline::TimelineOptions;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Prep and rider constants fed to the engine
    pub engine: EngineSettings,

    /// Staff on shift per day
    pub capacity: CapacityPolicy,

    /// Kitchen display timeline layout
    pub timeline: TimelineOptions,

    /// Local offset of the shop, used for labels and the service date
    pub utc_offset: FixedOffset,

    /// Directory for rolling log files
    pub logs_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prep_minutes = PrepMinutes {
            small: minutes_var(&lookup, "KDS_PREP_MINUTES_SMALL", DEFAULT_PREP_MINUTES_SMALL)?,
            medium: minutes_var(&lookup, "KDS_PREP_MINUTES_MEDIUM", DEFAULT_PREP_MINUTES_MEDIUM)?,
            large: minutes_var(&lookup, "KDS_PREP_MINUTES_LARGE", DEFAULT_PREP_MINUTES_LARGE)?,
            individual: minutes_var(&lookup, "KDS_PREP_MINUTES_INDIVIDUAL", DEFAULT_PREP_MINUTES_INDIVIDUAL)?,
            slice: minutes_var(&lookup, "KDS_PREP_MINUTES_SLICE", DEFAULT_PREP_MINUTES_SLICE)?,
        };
        let handoff_minutes = minutes_var(&lookup, "KDS_HANDOFF_MINUTES", DEFAULT_HANDOFF_MINUTES)?;
        let rider_return_minutes =
            parse_var(&lookup, "KDS_RIDER_RETURN_MINUTES", DEFAULT_RIDER_RETURN_MINUTES)?;

        let operators = parse_var(&lookup, "KDS_OPERATORS", DEFAULT_OPERATOR_COUNT)?;
        let riders = parse_var(&lookup, "KDS_RIDERS", DEFAULT_RIDER_COUNT)?;
        let operators_by_weekday = parse_weekday_counts(&lookup("KDS_OPERATORS_BY_WEEKDAY").unwrap_or_default())
            .context("KDS_OPERATORS_BY_WEEKDAY must look like `fri=3,sat=4`")?;
        let riders_by_weekday = parse_weekday_counts(&lookup("KDS_RIDERS_BY_WEEKDAY").unwrap_or_default())
            .context("KDS_RIDERS_BY_WEEKDAY must look like `fri=3,sat=4`")?;

        let offset_minutes: i32 = parse_var(&lookup, "KDS_UTC_OFFSET_MINUTES", DEFAULT_UTC_OFFSET_MINUTES)?;
        let utc_offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .with_context(|| format!("KDS_UTC_OFFSET_MINUTES out of range: {offset_minutes}"))?;

        let timeline = TimelineOptions {
            slot_minutes: parse_var(&lookup, "KDS_TIMELINE_SLOT_MINUTES", DEFAULT_TIMELINE_SLOT_MINUTES)?,
            min_slots: parse_var(&lookup, "KDS_TIMELINE_MIN_SLOTS", DEFAULT_TIMELINE_MIN_SLOTS)?,
            display_offset: utc_offset,
        };

        let logs_dir = lookup("LOGS_DIR").unwrap_or_else(|| DEFAULT_LOGS_DIR.to_string());

        Ok(Self {
            engine: EngineSettings {
                production: ProductionSettings {
                    prep_minutes,
                    handoff_minutes,
                },
                rider_return_minutes,
            },
            capacity: CapacityPolicy::new(operators, riders)
                .with_operators_by_weekday(operators_by_weekday)
                .with_riders_by_weekday(riders_by_weekday),
            timeline,
            utc_offset,
            logs_dir,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value: {raw:?}")),
        _ => Ok(default),
    }
}

/// Minute constants must be finite and not negative
fn minutes_var<F>(lookup: &F, name: &str, default: f64) -> Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let minutes: f64 = parse_var(lookup, name, default)?;
    if !minutes.is_finite() || minutes < 0.0 {
        anyhow::bail!("{name} must be a non-negative number of minutes (got {minutes})");
    }
    Ok(minutes)
}
