//! Zone time CSV loading and single-zone lookups

use std::io::Read;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, info};

use super::{read_input, SnapshotError};
use crate::services::delivery_time::estimate_delivery_minutes;
use crate::services::zone_index::ZoneIndex;
use crate::types::{ZoneEtaResponse, ZoneTimeRaw};

/// One CSV row; blank cells are absent values
#[derive(Debug, Deserialize)]
struct ZoneCsvRow {
    zone_id: Option<String>,
    eta_minutes: Option<f64>,
    distance_km: Option<f64>,
}

impl From<ZoneCsvRow> for ZoneTimeRaw {
    fn from(row: ZoneCsvRow) -> Self {
        ZoneTimeRaw {
            zone_id: row.zone_id,
            eta_minutes: row.eta_minutes,
            distance_km: row.distance_km,
        }
    }
}

/// Parse zone rows from CSV with a `zone_id,eta_minutes,distance_km` header.
pub fn read_zone_csv<R: Read>(reader: R) -> Result<Vec<ZoneTimeRaw>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: ZoneCsvRow = result?;
        rows.push(row.into());
    }
    Ok(rows)
}

/// Load zone rows from a CSV file (or stdin with `-`)
pub fn load_zone_csv(path: &Path) -> Result<Vec<ZoneTimeRaw>, SnapshotError> {
    let content = read_input(path)?;
    let rows = read_zone_csv(content.as_bytes()).map_err(|source| SnapshotError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {} zone rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Handle `zone-eta`: estimate delivery minutes for one zone
pub fn handle_zone_eta(zones_path: &Path, zone_id: &str) -> Result<ZoneEtaResponse> {
    let index = ZoneIndex::build(load_zone_csv(zones_path)?);
    let eta_minutes = estimate_delivery_minutes(&index, Some(zone_id));

    info!(zone_id, ?eta_minutes, zones = index.len(), "Zone estimate");

    Ok(ZoneEtaResponse {
        zone_id: zone_id.to_string(),
        eta_minutes,
    })
}
