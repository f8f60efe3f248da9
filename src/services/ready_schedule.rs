//! Ready-time prediction for in-flight orders.
//!
//! Simulates N kitchen operators working in parallel. Orders are taken in
//! arrival order and each one goes to the operator with the least work
//! assigned so far. Finalized orders keep their recorded timestamp and do not
//! take any operator time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::production_time::{estimate_prep_minutes, PrepMinutes};
use super::size_codec::parse_size_counts;
use super::workers::{add_durations, add_to_instant, clamp_worker_count, first_min_index, minutes_to_duration};
use crate::defaults::DEFAULT_HANDOFF_MINUTES;
use crate::types::{OrderSnapshot, ReadyBasis, ReadyPrediction};

/// Injected prep-time constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSettings {
    pub prep_minutes: PrepMinutes,
    pub handoff_minutes: f64,
}

impl Default for ProductionSettings {
    fn default() -> Self {
        Self {
            prep_minutes: PrepMinutes::default(),
            handoff_minutes: DEFAULT_HANDOFF_MINUTES,
        }
    }
}

/// What an order needs from the kitchen
enum KitchenWork {
    /// Already finalized at this instant
    Done(DateTime<Utc>),
    /// Still needs this much operator time
    Prep { time: Duration, pizzas: u32 },
}

impl KitchenWork {
    fn of(order: &OrderSnapshot, settings: &ProductionSettings) -> Self {
        match order.finalized_at {
            Some(at) => KitchenWork::Done(at),
            None => {
                let counts = parse_size_counts(&order.size);
                let minutes = estimate_prep_minutes(&counts, &settings.prep_minutes, settings.handoff_minutes);
                KitchenWork::Prep {
                    time: minutes_to_duration(minutes),
                    pizzas: counts.total(),
                }
            }
        }
    }
}

/// Predict when each order's food will be ready.
///
/// Returns one prediction per input order, sorted by `ready_at` (stable).
/// `operator_count` below 1 is treated as 1.
pub fn predict_ready(
    orders: &[OrderSnapshot],
    operator_count: i32,
    now: DateTime<Utc>,
    settings: &ProductionSettings,
) -> Vec<ReadyPrediction> {
    let operators = clamp_worker_count(operator_count, orders.len());
    let mut load = vec![Duration::zero(); operators];

    let mut queue: Vec<&OrderSnapshot> = orders.iter().collect();
    queue.sort_by_key(|o| o.created_at);

    let mut predictions = Vec::with_capacity(orders.len());
    let mut simulated = 0usize;
    let mut pizzas_queued = 0u64;

    for order in queue {
        let (ready_at, basis) = match KitchenWork::of(order, settings) {
            KitchenWork::Done(at) => (at, ReadyBasis::Historical),
            KitchenWork::Prep { time: prep, pizzas } => {
                let operator = first_min_index(&load);
                let start_at = add_to_instant(order.created_at.max(now), load[operator]);
                load[operator] = add_durations(load[operator], prep);
                simulated += 1;
                pizzas_queued += u64::from(pizzas);

                trace!(
                    order_id = %order.id,
                    operator,
                    pizzas,
                    prep_minutes = prep.num_milliseconds() as f64 / 60_000.0,
                    %start_at,
                    "Assigned order to operator"
                );
                (add_to_instant(start_at, prep), ReadyBasis::Simulated { operator })
            }
        };

        predictions.push(ReadyPrediction {
            order_id: order.id.clone(),
            ready_at,
            is_delivery: order.is_delivery(),
            zone_id: order.delivery_zone_id.clone(),
            basis,
        });
    }

    predictions.sort_by_key(|p| p.ready_at);

    debug!(
        orders = orders.len(),
        simulated,
        pizzas_queued,
        operators,
        "Ready-time pass complete"
    );
    predictions
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use serde_json::json;

    /// Minutes after 19:00 UTC on a fixed service day.
    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 19, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    /// One size with 1 min per pizza and no handoff, so `n` pizzas take `n` minutes.
    fn unit_settings() -> ProductionSettings {
        ProductionSettings {
            prep_minutes: PrepMinutes {
                small: 1.0,
                medium: 1.0,
                large: 1.0,
                individual: 1.0,
                slice: 1.0,
            },
            handoff_minutes: 0.0,
        }
    }

    fn order(id: &str, created: i64, prep_minutes: u32) -> OrderSnapshot {
        OrderSnapshot {
            id: id.to_string(),
            created_at: at(created),
            finalized_at: None,
            size: json!({ "M": prep_minutes }),
            has_rider: false,
            take_away: false,
            delivery_zone_id: None,
        }
    }

    fn find<'a>(preds: &'a [ReadyPrediction], id: &str) -> &'a ReadyPrediction {
        preds.iter().find(|p| p.order_id == id).unwrap()
    }

    // -----------------------------------------------------------------------
    // 1. Basic assignment
    // -----------------------------------------------------------------------
    #[test]
    fn empty_input_gives_no_predictions() {
        assert!(predict_ready(&[], 3, at(0), &unit_settings()).is_empty());
    }

    #[test]
    fn two_operators_take_first_two_orders_in_parallel() {
        // A, B at t=0 (10 min each), C at t=5 (5 min); now = t=0.
        let orders = vec![order("A", 0, 10), order("B", 0, 10), order("C", 5, 5)];
        let preds = predict_ready(&orders, 2, at(0), &unit_settings());

        assert_eq!(preds.len(), 3);
        assert_eq!(find(&preds, "A").ready_at, at(10));
        assert_eq!(find(&preds, "A").basis, ReadyBasis::Simulated { operator: 0 });
        assert_eq!(find(&preds, "B").ready_at, at(10));
        assert_eq!(find(&preds, "B").basis, ReadyBasis::Simulated { operator: 1 });

        // Both operators carry 10 min; C goes to operator 0:
        // max(created 5, now 0) + load 10 + prep 5.
        let c = find(&preds, "C");
        assert_eq!(c.basis, ReadyBasis::Simulated { operator: 0 });
        assert_eq!(c.ready_at, at(20));
    }

    #[test]
    fn later_order_goes_to_idle_operator() {
        let orders = vec![order("A", 0, 10), order("C", 5, 5)];
        let preds = predict_ready(&orders, 2, at(0), &unit_settings());

        let c = find(&preds, "C");
        assert_eq!(c.basis, ReadyBasis::Simulated { operator: 1 });
        assert_eq!(c.ready_at, at(10));
    }

    #[test]
    fn now_later_than_creation_shifts_start() {
        let orders = vec![order("A", 0, 10)];
        let preds = predict_ready(&orders, 1, at(30), &unit_settings());
        assert_eq!(preds[0].ready_at, at(40));
    }

    #[test]
    fn orders_are_taken_by_creation_time_not_input_order() {
        let orders = vec![order("late", 10, 4), order("early", 0, 6)];
        let preds = predict_ready(&orders, 1, at(0), &unit_settings());

        assert_eq!(find(&preds, "early").ready_at, at(6));
        // max(10, 0) + load 6 + 4
        assert_eq!(find(&preds, "late").ready_at, at(20));
    }

    #[test]
    fn equal_creation_keeps_input_order() {
        let orders = vec![order("first", 0, 5), order("second", 0, 5)];
        let preds = predict_ready(&orders, 1, at(0), &unit_settings());

        assert_eq!(find(&preds, "first").ready_at, at(5));
        assert_eq!(find(&preds, "second").ready_at, at(10));
    }

    #[test]
    fn output_is_sorted_by_ready_time() {
        let orders = vec![order("big", 0, 30), order("small", 0, 2), order("mid", 0, 10)];
        let preds = predict_ready(&orders, 3, at(0), &unit_settings());

        let ids: Vec<&str> = preds.iter().map(|p| p.order_id.as_str()).collect();
        assert_eq!(ids, vec!["small", "mid", "big"]);
    }

    // -----------------------------------------------------------------------
    // 2. Historical orders
    // -----------------------------------------------------------------------
    #[test]
    fn finalized_order_uses_recorded_time_and_no_capacity() {
        let mut done = order("done", 0, 50);
        done.finalized_at = Some(at(3));
        let orders = vec![done, order("next", 0, 10)];

        let preds = predict_ready(&orders, 1, at(0), &unit_settings());

        let d = find(&preds, "done");
        assert_eq!(d.ready_at, at(3));
        assert_eq!(d.basis, ReadyBasis::Historical);
        // The single operator was not consumed by the finalized order.
        assert_eq!(find(&preds, "next").ready_at, at(10));
    }

    // -----------------------------------------------------------------------
    // 3. Degenerate inputs
    // -----------------------------------------------------------------------
    #[test]
    fn non_positive_operator_count_acts_as_one() {
        let orders = vec![order("A", 0, 5), order("B", 0, 5)];
        for count in [0, -4] {
            let preds = predict_ready(&orders, count, at(0), &unit_settings());
            assert_eq!(find(&preds, "B").ready_at, at(10));
            assert_eq!(find(&preds, "B").basis, ReadyBasis::Simulated { operator: 0 });
        }
    }

    #[test]
    fn malformed_size_costs_only_handoff() {
        let mut bad = order("bad", 0, 0);
        bad.size = json!("{{{");
        let settings = ProductionSettings {
            handoff_minutes: 4.0,
            ..unit_settings()
        };

        let preds = predict_ready(&[bad], 1, at(0), &settings);
        assert_eq!(preds[0].ready_at, at(4));
    }

    #[test]
    fn delivery_flag_and_zone_are_carried() {
        let mut o = order("d", 0, 5);
        o.has_rider = true;
        o.delivery_zone_id = Some("centro".into());
        let mut pickup = order("p", 0, 5);
        pickup.has_rider = true;
        pickup.take_away = true;

        let preds = predict_ready(&[o, pickup], 2, at(0), &unit_settings());
        assert!(find(&preds, "d").is_delivery);
        assert_eq!(find(&preds, "d").zone_id.as_deref(), Some("centro"));
        assert!(!find(&preds, "p").is_delivery);
    }

    #[test]
    fn huge_operator_count_matches_one_per_order() {
        let orders = vec![order("A", 0, 5), order("B", 0, 7), order("C", 3, 2)];

        let capped = predict_ready(&orders, i32::MAX, at(0), &unit_settings());
        let exact = predict_ready(&orders, orders.len() as i32, at(0), &unit_settings());
        assert_eq!(capped, exact);
        assert_eq!(find(&capped, "C").ready_at, at(5));
    }

    // -----------------------------------------------------------------------
    // 4. Properties
    // -----------------------------------------------------------------------
    proptest! {
        #[test]
        fn single_operator_is_fifo(
            jobs in prop::collection::vec((0i64..120, 1u32..30), 1..20),
            now in 0i64..60,
        ) {
            let orders: Vec<OrderSnapshot> = jobs
                .iter()
                .enumerate()
                .map(|(i, (created, prep))| order(&format!("o{i}"), *created, *prep))
                .collect();
            let preds = predict_ready(&orders, 1, at(now), &unit_settings());

            let mut queue: Vec<&OrderSnapshot> = orders.iter().collect();
            queue.sort_by_key(|o| o.created_at);

            let mut backlog = 0i64;
            for o in queue {
                let prep = parse_size_counts(&o.size).medium as i64;
                let expected = o.created_at.max(at(now)) + Duration::minutes(backlog + prep);
                prop_assert_eq!(find(&preds, &o.id).ready_at, expected);
                backlog += prep;
            }
        }

        #[test]
        fn equal_jobs_stay_balanced(n_orders in 1usize..40, operators in 1i32..8, prep in 1u32..20) {
            let orders: Vec<OrderSnapshot> = (0..n_orders)
                .map(|i| order(&format!("o{i}"), 0, prep))
                .collect();
            let preds = predict_ready(&orders, operators, at(0), &unit_settings());

            let mut per_operator = vec![0u32; operators as usize];
            for p in &preds {
                if let ReadyBasis::Simulated { operator } = p.basis {
                    per_operator[operator] += prep;
                }
            }
            let max = *per_operator.iter().max().unwrap();
            let min = *per_operator.iter().min().unwrap();
            prop_assert!(max - min <= prep);
        }

        #[test]
        fn finalized_always_wins(operators in -2i32..6, handoff in 0.0f64..20.0, finalized in 0i64..500) {
            let mut o = order("f", 0, 10);
            o.finalized_at = Some(at(finalized));
            let settings = ProductionSettings { handoff_minutes: handoff, ..ProductionSettings::default() };

            let preds = predict_ready(&[o, order("x", 0, 3)], operators, at(0), &settings);
            prop_assert_eq!(find(&preds, "f").ready_at, at(finalized));
        }
    }
}
