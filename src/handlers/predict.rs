//! Prediction handler

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::read_input;
use super::zones::load_zone_csv;
use super::SnapshotError;
use crate::cli::PredictArgs;
use crate::config::Config;
use crate::services::prediction::{predict, Capacity};
use crate::services::timeline::build_timeline_buckets;
use crate::services::zone_index::ZoneIndex;
use crate::types::{PredictRequest, PredictResponse, ZoneTimeRaw};

/// Handle `predict`: load the snapshot (and optional zone CSV) and run the engine.
pub fn handle_predict(args: &PredictArgs, config: &Config, wall_clock: DateTime<Utc>) -> Result<PredictResponse> {
    let text = read_input(&args.snapshot)?;
    let request: PredictRequest = serde_json::from_str(&text).map_err(|source| SnapshotError::Json {
        path: args.snapshot.clone(),
        source,
    })?;

    let extra_zones = match &args.zones {
        Some(path) => load_zone_csv(path)?,
        None => Vec::new(),
    };

    debug!(
        orders = request.orders.len(),
        zone_rows = request.zone_times.len() + extra_zones.len(),
        "Snapshot loaded"
    );

    Ok(build_response(request, extra_zones, args, config, wall_clock))
}

/// Run the engine on an already-parsed snapshot.
///
/// Counts resolve as CLI override, then snapshot value, then the staffing
/// policy for the local date of `now`. Zone rows from the snapshot come
/// before CSV rows, so the snapshot wins for duplicated zones.
pub fn build_response(
    request: PredictRequest,
    extra_zones: Vec<ZoneTimeRaw>,
    args: &PredictArgs,
    config: &Config,
    wall_clock: DateTime<Utc>,
) -> PredictResponse {
    let now = args.now.or(request.now).unwrap_or(wall_clock);
    let service_date = now.with_timezone(&config.utc_offset).date_naive();
    let policy = config.capacity.capacity_for(service_date);

    let capacity = Capacity {
        operators: args.operators.or(request.operator_count).unwrap_or(policy.operators),
        riders: args.riders.or(request.rider_count).unwrap_or(policy.riders),
    };

    let zones = ZoneIndex::build(request.zone_times.into_iter().chain(extra_zones));
    let report = predict(&request.orders, &zones, capacity, &config.engine, now);

    let timeline = args
        .timeline
        .then(|| build_timeline_buckets(&report.ready, now, &config.timeline));

    let with_arrival = report.etas.iter().filter(|e| e.arrive_at.is_some()).count();
    info!(
        orders = report.etas.len(),
        with_arrival,
        operators = capacity.operators,
        riders = capacity.riders,
        %now,
        "Predictions computed"
    );

    PredictResponse {
        now,
        operator_count: capacity.operators,
        rider_count: capacity.riders,
        orders: report.etas,
        timeline,
    }
}
