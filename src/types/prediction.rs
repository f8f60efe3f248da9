//! Prediction output types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a ready time came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReadyBasis {
    /// Order already finalized; its recorded timestamp is used as-is
    Historical,
    /// Simulated on the given virtual operator
    Simulated { operator: usize },
}

/// Predicted "food ready" instant for one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyPrediction {
    pub order_id: String,
    pub ready_at: DateTime<Utc>,
    pub is_delivery: bool,
    pub zone_id: Option<String>,
    pub basis: ReadyBasis,
}

/// Predicted "arrived at customer" instant for one order.
///
/// `arrive_at` is `None` for non-delivery orders and for unknown zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalPrediction {
    pub order_id: String,
    pub arrive_at: Option<DateTime<Utc>>,
    pub rider: Option<usize>,
    pub eta_minutes: Option<u32>,
}

impl ArrivalPrediction {
    pub fn unknown(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            arrive_at: None,
            rider: None,
            eta_minutes: None,
        }
    }
}

/// Both predictions merged for one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEta {
    pub order_id: String,
    pub is_delivery: bool,
    pub ready_at: DateTime<Utc>,
    pub arrive_at: Option<DateTime<Utc>>,
    pub operator: Option<usize>,
    pub rider: Option<usize>,
}

/// One time slot of the kitchen display timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBucket {
    pub slot_start: DateTime<Utc>,
    pub slot_end: DateTime<Utc>,
    /// "HH:MM" in the display offset
    pub label: String,
    pub order_ids: Vec<String>,
    pub count: usize,
    pub is_past: bool,
    pub is_current: bool,
}
