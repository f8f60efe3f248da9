//! Delivery travel time per zone.

use super::zone_index::ZoneIndex;

/// Estimates below this are not believable and get raised to it
pub const MIN_DELIVERY_MINUTES: u32 = 5;

/// Distance heuristic: minutes per km
const MINUTES_PER_KM: f64 = 3.5;

/// Distance heuristic: fixed overhead per trip
const BASE_TRIP_MINUTES: f64 = 5.0;

/// Travel minutes from the shop to the customer's zone, or `None` when unknown.
///
/// A direct ETA wins over distance. Zero counts as "not set" for both fields,
/// so a zone with `eta_minutes == 0` falls through to its distance.
pub fn estimate_delivery_minutes(index: &ZoneIndex, zone_id: Option<&str>) -> Option<u32> {
    let zone_id = zone_id.filter(|id| !id.is_empty())?;
    let zone = index.lookup(zone_id)?;

    if let Some(eta) = zone.eta_minutes.filter(|v| is_set(*v)) {
        return Some(clamp_minutes(eta.round()));
    }

    if let Some(km) = zone.distance_km.filter(|v| is_set(*v)) {
        return Some(clamp_minutes((km * MINUTES_PER_KM + BASE_TRIP_MINUTES).round()));
    }

    None
}

fn is_set(v: f64) -> bool {
    v.is_finite() && v != 0.0
}

fn clamp_minutes(minutes: f64) -> u32 {
    // `as` saturates; negatives become 0 and are raised by the max
    (minutes as u32).max(MIN_DELIVERY_MINUTES)
}
