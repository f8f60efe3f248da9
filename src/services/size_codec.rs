//! Size distribution codec.
//!
//! Orders store their pizza sizes as a compact JSON object keyed by size
//! abbreviation (`{"F":1,"M":2}`), usually as text in a column. Parsing never
//! fails: anything unreadable becomes zero.

use serde_json::{Map, Value};

use crate::types::{PizzaSize, SizeCounts};

/// Parse a raw size value, either the JSON text or an already-decoded object.
pub fn parse_size_counts(raw: &Value) -> SizeCounts {
    match raw {
        Value::String(text) => parse_size_counts_str(text),
        Value::Object(map) => counts_from_map(map),
        _ => SizeCounts::default(),
    }
}

/// Parse the JSON text form of a size column.
pub fn parse_size_counts_str(text: &str) -> SizeCounts {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => counts_from_map(&map),
        _ => SizeCounts::default(),
    }
}

fn counts_from_map(map: &Map<String, Value>) -> SizeCounts {
    let mut counts = SizeCounts::default();
    for size in PizzaSize::ALL {
        let count = map.get(size.abbreviation()).map(coerce_count).unwrap_or(0);
        counts.set(size, count);
    }
    counts
}

/// Coerce one field to a non-negative integer count.
fn coerce_count(value: &Value) -> u32 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };

    if !n.is_finite() || n <= 0.0 {
        return 0;
    }
    // `as` saturates at u32::MAX
    n.trunc() as u32
}
