//! Request/response envelopes for the prediction surface

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{OrderEta, OrderSnapshot, TimelineBucket, ZoneTimeRaw};

/// Snapshot handed over by the order repository for one prediction run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    #[serde(default)]
    pub orders: Vec<OrderSnapshot>,
    #[serde(default)]
    pub zone_times: Vec<ZoneTimeRaw>,
    #[serde(default)]
    pub operator_count: Option<i32>,
    #[serde(default)]
    pub rider_count: Option<i32>,
    /// Clock to simulate from; the caller's wall clock when absent
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// Predictions for every order of the snapshot, in snapshot order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub now: DateTime<Utc>,
    pub operator_count: i32,
    pub rider_count: i32,
    pub orders: Vec<OrderEta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineBucket>>,
}

/// Delivery estimate for a single zone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneEtaResponse {
    pub zone_id: String,
    pub eta_minutes: Option<u32>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}
