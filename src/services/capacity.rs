//! Staffing policy: how many operators and riders work on a given day.
//!
//! A default count plus optional per-weekday overrides, e.g. more riders on
//! Friday and Saturday nights.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

use super::prediction::Capacity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeekdayCountsError {
    #[error("expected `weekday=count`, got `{0}`")]
    MissingSeparator(String),
    #[error("unknown weekday `{0}`")]
    UnknownWeekday(String),
    #[error("invalid count `{value}` for {weekday}")]
    InvalidCount { weekday: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapacityPolicy {
    default_operators: i32,
    default_riders: i32,
    operators_by_weekday: HashMap<Weekday, i32>,
    riders_by_weekday: HashMap<Weekday, i32>,
}

impl CapacityPolicy {
    pub fn new(default_operators: i32, default_riders: i32) -> Self {
        Self {
            default_operators,
            default_riders,
            operators_by_weekday: HashMap::new(),
            riders_by_weekday: HashMap::new(),
        }
    }

    pub fn with_operators_by_weekday(mut self, overrides: HashMap<Weekday, i32>) -> Self {
        self.operators_by_weekday = overrides;
        self
    }

    pub fn with_riders_by_weekday(mut self, overrides: HashMap<Weekday, i32>) -> Self {
        self.riders_by_weekday = overrides;
        self
    }

    pub fn operator_count(&self, date: NaiveDate) -> i32 {
        self.operators_by_weekday
            .get(&date.weekday())
            .copied()
            .unwrap_or(self.default_operators)
            .max(1)
    }

    pub fn rider_count(&self, date: NaiveDate) -> i32 {
        self.riders_by_weekday
            .get(&date.weekday())
            .copied()
            .unwrap_or(self.default_riders)
            .max(1)
    }

    pub fn capacity_for(&self, date: NaiveDate) -> Capacity {
        Capacity {
            operators: self.operator_count(date),
            riders: self.rider_count(date),
        }
    }
}

/// Parse overrides written as `fri=3,sat=4`. Blank input means no overrides.
pub fn parse_weekday_counts(input: &str) -> Result<HashMap<Weekday, i32>, WeekdayCountsError> {
    let mut counts = HashMap::new();

    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (day, value) = entry
            .split_once('=')
            .ok_or_else(|| WeekdayCountsError::MissingSeparator(entry.to_string()))?;

        let weekday: Weekday = day
            .trim()
            .parse()
            .map_err(|_| WeekdayCountsError::UnknownWeekday(day.trim().to_string()))?;

        let count: i32 = value
            .trim()
            .parse()
            .map_err(|_| WeekdayCountsError::InvalidCount {
                weekday: day.trim().to_string(),
                value: value.trim().to_string(),
            })?;

        counts.insert(weekday, count);
    }

    Ok(counts)
}
