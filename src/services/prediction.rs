//! Full prediction run: ready times, then arrivals, merged per order.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dispatch_schedule::predict_arrivals;
use super::ready_schedule::{predict_ready, ProductionSettings};
use super::zone_index::ZoneIndex;
use crate::defaults::{DEFAULT_OPERATOR_COUNT, DEFAULT_RIDER_COUNT, DEFAULT_RIDER_RETURN_MINUTES};
use crate::types::{ArrivalPrediction, OrderEta, OrderSnapshot, ReadyBasis, ReadyPrediction};

/// Constants injected into both scheduling passes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSettings {
    pub production: ProductionSettings,
    pub rider_return_minutes: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            production: ProductionSettings::default(),
            rider_return_minutes: DEFAULT_RIDER_RETURN_MINUTES,
        }
    }
}

/// Workers available for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    pub operators: i32,
    pub riders: i32,
}

impl Default for Capacity {
    fn default() -> Self {
        Self {
            operators: DEFAULT_OPERATOR_COUNT,
            riders: DEFAULT_RIDER_COUNT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PredictionReport {
    /// Sorted by ready time
    pub ready: Vec<ReadyPrediction>,
    /// Parallel to `ready`
    pub arrivals: Vec<ArrivalPrediction>,
    /// One per input order, in input order
    pub etas: Vec<OrderEta>,
}

/// Run both passes over a snapshot of orders.
pub fn predict(
    orders: &[OrderSnapshot],
    zones: &ZoneIndex,
    capacity: Capacity,
    settings: &EngineSettings,
    now: DateTime<Utc>,
) -> PredictionReport {
    let ready = predict_ready(orders, capacity.operators, now, &settings.production);
    let arrivals = predict_arrivals(&ready, capacity.riders, zones, settings.rider_return_minutes);

    let by_order: HashMap<&str, (&ReadyPrediction, &ArrivalPrediction)> = ready
        .iter()
        .zip(&arrivals)
        .map(|(r, a)| (r.order_id.as_str(), (r, a)))
        .collect();

    let etas = orders
        .iter()
        .filter_map(|o| by_order.get(o.id.as_str()))
        .map(|(r, a)| OrderEta {
            order_id: r.order_id.clone(),
            is_delivery: r.is_delivery,
            ready_at: r.ready_at,
            arrive_at: a.arrive_at,
            operator: match r.basis {
                ReadyBasis::Simulated { operator } => Some(operator),
                ReadyBasis::Historical => None,
            },
            rider: a.rider,
        })
        .collect();

    PredictionReport { ready, arrivals, etas }
}
