//! Helpers for the per-pass worker arrays (operator loads, rider free-at).

use chrono::{DateTime, Duration, Utc};

/// Worker counts below one are treated as one. Counts above `demand` are
/// cut to it: extra workers stay idle and never change an assignment.
pub fn clamp_worker_count(count: i32, demand: usize) -> usize {
    (count.max(1) as usize).min(demand.max(1))
}

/// Index of the smallest slot; ties go to the lowest index.
pub fn first_min_index<T: Ord>(slots: &[T]) -> usize {
    slots
        .iter()
        .enumerate()
        .min_by_key(|(_, slot)| *slot)
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Fractional minutes as a duration, at millisecond resolution.
pub fn minutes_to_duration(minutes: f64) -> Duration {
    if !minutes.is_finite() {
        return Duration::zero();
    }
    let ms = (minutes * 60_000.0).round() as i64;
    Duration::try_milliseconds(ms).unwrap_or(Duration::MAX)
}

/// `a + b`, pinned to `Duration::MAX` instead of overflowing.
pub fn add_durations(a: Duration, b: Duration) -> Duration {
    a.checked_add(&b).unwrap_or(Duration::MAX)
}

/// `at + offset`, pinned to the last representable instant instead of overflowing.
pub fn add_to_instant(at: DateTime<Utc>, offset: Duration) -> DateTime<Utc> {
    at.checked_add_signed(offset).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_worker_count() {
        assert_eq!(clamp_worker_count(-3, 10), 1);
        assert_eq!(clamp_worker_count(0, 10), 1);
        assert_eq!(clamp_worker_count(1, 10), 1);
        assert_eq!(clamp_worker_count(4, 10), 4);
    }

    #[test]
    fn test_clamp_worker_count_caps_at_demand() {
        assert_eq!(clamp_worker_count(i32::MAX, 3), 3);
        assert_eq!(clamp_worker_count(i32::MAX, 0), 1);
        assert_eq!(clamp_worker_count(5, 5), 5);
    }

    #[test]
    fn test_first_min_index_prefers_lowest_index_on_tie() {
        assert_eq!(first_min_index(&[3, 1, 1, 2]), 1);
        assert_eq!(first_min_index(&[0, 0, 0]), 0);
        assert_eq!(first_min_index(&[5, 4, 3]), 2);
    }

    #[test]
    fn test_first_min_index_none_sorts_first() {
        let slots = [Some(10), None, None];
        assert_eq!(first_min_index(&slots), 1);
    }

    #[test]
    fn test_minutes_to_duration() {
        assert_eq!(minutes_to_duration(1.5), Duration::seconds(90));
        assert_eq!(minutes_to_duration(10.0), Duration::minutes(10));
        assert_eq!(minutes_to_duration(f64::NAN), Duration::zero());
    }

    #[test]
    fn test_additions_saturate() {
        assert_eq!(add_durations(Duration::MAX, Duration::minutes(1)), Duration::MAX);
        assert_eq!(
            add_to_instant(DateTime::<Utc>::MAX_UTC, Duration::minutes(1)),
            DateTime::<Utc>::MAX_UTC
        );
    }
}
