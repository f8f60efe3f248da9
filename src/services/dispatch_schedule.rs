//! Arrival prediction for delivery orders.
//!
//! Riders form one shared pool. A delivery leaves when both the food is ready
//! and a rider is back at base; the rider is then busy for the trip out plus
//! the configured return leg.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, trace};

use super::delivery_time::estimate_delivery_minutes;
use super::workers::{add_to_instant, clamp_worker_count, first_min_index};
use super::zone_index::ZoneIndex;
use crate::types::{ArrivalPrediction, ReadyPrediction};

/// Predict arrival at the customer for each ready prediction.
///
/// Returns exactly one entry per input, in input order. Non-delivery orders
/// and orders whose zone has no usable estimate get `arrive_at = None` and do
/// not occupy a rider. `rider_count` below 1 is treated as 1.
pub fn predict_arrivals(
    ready: &[ReadyPrediction],
    rider_count: i32,
    zones: &ZoneIndex,
    return_minutes: u32,
) -> Vec<ArrivalPrediction> {
    let mut deliveries: Vec<&ReadyPrediction> = ready.iter().filter(|r| r.is_delivery).collect();
    deliveries.sort_by_key(|r| r.ready_at);

    let riders = clamp_worker_count(rider_count, deliveries.len());
    // None = free from the start
    let mut free_at: Vec<Option<DateTime<Utc>>> = vec![None; riders];

    let mut dispatched: HashMap<&str, ArrivalPrediction> = HashMap::with_capacity(deliveries.len());
    let mut unknown_zone = 0usize;

    for order in &deliveries {
        let Some(eta_minutes) = estimate_delivery_minutes(zones, order.zone_id.as_deref()) else {
            debug!(
                order_id = %order.order_id,
                zone_id = ?order.zone_id,
                "No delivery estimate for zone, arrival left unknown"
            );
            unknown_zone += 1;
            continue;
        };

        let rider = first_min_index(&free_at);
        let dispatch_at = match free_at[rider] {
            Some(free) => order.ready_at.max(free),
            None => order.ready_at,
        };
        let trip = Duration::minutes(i64::from(eta_minutes));
        let arrive_at = add_to_instant(dispatch_at, trip);
        free_at[rider] = Some(add_to_instant(
            dispatch_at,
            Duration::minutes(i64::from(eta_minutes) + i64::from(return_minutes)),
        ));

        trace!(
            order_id = %order.order_id,
            rider,
            eta_minutes,
            %dispatch_at,
            %arrive_at,
            "Dispatched order"
        );

        dispatched.insert(
            order.order_id.as_str(),
            ArrivalPrediction {
                order_id: order.order_id.clone(),
                arrive_at: Some(arrive_at),
                rider: Some(rider),
                eta_minutes: Some(eta_minutes),
            },
        );
    }

    debug!(
        deliveries = deliveries.len(),
        unknown_zone,
        riders,
        "Dispatch pass complete"
    );

    ready
        .iter()
        .map(|r| {
            dispatched
                .get(r.order_id.as_str())
                .cloned()
                .unwrap_or_else(|| ArrivalPrediction::unknown(r.order_id.clone()))
        })
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
