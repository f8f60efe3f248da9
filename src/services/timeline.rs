//! Timeline buckets for the kitchen display.
//!
//! Groups pending ready times into fixed slots aligned on the Unix epoch,
//! newest slot first. Finalized orders are not on the timeline.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::defaults::{
    DEFAULT_TIMELINE_MIN_SLOTS, DEFAULT_TIMELINE_SLOT_MINUTES, DEFAULT_UTC_OFFSET_MINUTES,
    MAX_TIMELINE_SLOTS,
};
use crate::types::{ReadyBasis, ReadyPrediction, TimelineBucket};

/// Shortest slot the display supports
pub const MIN_SLOT_MINUTES: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineOptions {
    pub slot_minutes: u32,
    pub min_slots: u32,
    /// Offset used for the "HH:MM" labels
    pub display_offset: FixedOffset,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            slot_minutes: DEFAULT_TIMELINE_SLOT_MINUTES,
            min_slots: DEFAULT_TIMELINE_MIN_SLOTS,
            display_offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60).unwrap_or(Utc.fix()),
        }
    }
}

pub fn build_timeline_buckets(
    ready: &[ReadyPrediction],
    now: DateTime<Utc>,
    options: &TimelineOptions,
) -> Vec<TimelineBucket> {
    let pending: Vec<(&str, i64)> = ready
        .iter()
        .filter(|p| matches!(p.basis, ReadyBasis::Simulated { .. }))
        .map(|p| (p.order_id.as_str(), p.ready_at.timestamp_millis()))
        .collect();

    if pending.is_empty() {
        return Vec::new();
    }

    let slot_ms = i64::from(options.slot_minutes.max(MIN_SLOT_MINUTES)) * 60_000;
    let now_ms = now.timestamp_millis();

    let floor_to_slot = |ms: i64| ms.div_euclid(slot_ms) * slot_ms;
    let ceil_to_slot = |ms: i64| -((-ms).div_euclid(slot_ms)) * slot_ms;

    let earliest = pending.iter().map(|(_, ms)| *ms).fold(now_ms, i64::min);
    let latest = pending.iter().map(|(_, ms)| *ms).fold(now_ms, i64::max);

    let range_start = floor_to_slot(earliest);
    let range_end = ceil_to_slot(latest);
    let total_slots = ((range_end - range_start) / slot_ms + 1)
        .max(i64::from(options.min_slots))
        .min(MAX_TIMELINE_SLOTS);
    let last_slot = range_start + (total_slots - 1) * slot_ms;

    // Anything past the horizon is shown in the newest slot
    let mut by_slot: HashMap<i64, Vec<String>> = HashMap::new();
    for (id, ms) in &pending {
        by_slot
            .entry(floor_to_slot(*ms).min(last_slot))
            .or_default()
            .push(id.to_string());
    }

    let mut buckets = Vec::with_capacity(total_slots as usize);
    let mut cursor = last_slot;
    while cursor >= range_start {
        let slot_end_ms = cursor + slot_ms;
        if let (Some(slot_start), Some(slot_end)) = (
            DateTime::<Utc>::from_timestamp_millis(cursor),
            DateTime::<Utc>::from_timestamp_millis(slot_end_ms),
        ) {
            let order_ids = by_slot.remove(&cursor).unwrap_or_default();
            buckets.push(TimelineBucket {
                slot_start,
                slot_end,
                label: slot_start
                    .with_timezone(&options.display_offset)
                    .format("%H:%M")
                    .to_string(),
                count: order_ids.len(),
                order_ids,
                is_past: slot_end_ms <= now_ms,
                is_current: cursor <= now_ms && now_ms < slot_end_ms,
            });
        }
        cursor -= slot_ms;
    }

    buckets
}
