//! Delivery zone travel estimates

use serde::{Deserialize, Serialize};

/// One row of the zone-time source, typically one per (zone, serving location)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneTimeRaw {
    #[serde(default)]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub eta_minutes: Option<f64>,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

/// Travel estimate retained for a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneTime {
    pub zone_id: String,
    pub eta_minutes: Option<f64>,
    pub distance_km: Option<f64>,
}
