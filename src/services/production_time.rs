//! Kitchen prep time per order.

use serde::{Deserialize, Serialize};

use crate::defaults::{
    DEFAULT_PREP_MINUTES_INDIVIDUAL, DEFAULT_PREP_MINUTES_LARGE, DEFAULT_PREP_MINUTES_MEDIUM,
    DEFAULT_PREP_MINUTES_SLICE, DEFAULT_PREP_MINUTES_SMALL,
};
use crate::types::{PizzaSize, SizeCounts};

/// Shortest prep time any order can have
pub const MIN_PREP_MINUTES: f64 = 1.0;

/// Prep minutes per pizza, one coefficient per size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepMinutes {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    pub individual: f64,
    pub slice: f64,
}

impl Default for PrepMinutes {
    fn default() -> Self {
        Self {
            small: DEFAULT_PREP_MINUTES_SMALL,
            medium: DEFAULT_PREP_MINUTES_MEDIUM,
            large: DEFAULT_PREP_MINUTES_LARGE,
            individual: DEFAULT_PREP_MINUTES_INDIVIDUAL,
            slice: DEFAULT_PREP_MINUTES_SLICE,
        }
    }
}

impl PrepMinutes {
    pub fn get(&self, size: PizzaSize) -> f64 {
        match size {
            PizzaSize::Small => self.small,
            PizzaSize::Medium => self.medium,
            PizzaSize::Large => self.large,
            PizzaSize::Individual => self.individual,
            PizzaSize::Slice => self.slice,
        }
    }
}

/// Prep minutes for one order: per-size work plus the handoff overhead,
/// never less than [`MIN_PREP_MINUTES`].
///
/// Non-finite coefficients contribute nothing.
pub fn estimate_prep_minutes(counts: &SizeCounts, per_size: &PrepMinutes, handoff_minutes: f64) -> f64 {
    let work: f64 = PizzaSize::ALL
        .iter()
        .map(|size| f64::from(counts.get(*size)) * finite_or_zero(per_size.get(*size)))
        .sum();

    let minutes = work + finite_or_zero(handoff_minutes);
    if minutes.is_finite() {
        minutes.max(MIN_PREP_MINUTES)
    } else {
        MIN_PREP_MINUTES
    }
}

fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}
