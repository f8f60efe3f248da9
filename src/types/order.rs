//! Order snapshot types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pizza size categories counted on an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PizzaSize {
    Small,
    Medium,
    Large,
    Individual,
    Slice,
}

impl PizzaSize {
    pub const ALL: [PizzaSize; 5] = [
        PizzaSize::Small,
        PizzaSize::Medium,
        PizzaSize::Large,
        PizzaSize::Individual,
        PizzaSize::Slice,
    ];

    /// Key used in the serialized size column
    pub const fn abbreviation(self) -> &'static str {
        match self {
            PizzaSize::Small => "P",
            PizzaSize::Medium => "M",
            PizzaSize::Large => "F",
            PizzaSize::Individual => "I",
            PizzaSize::Slice => "FT",
        }
    }
}

/// Number of pizzas of each size on one order.
///
/// Always fully populated; anything unreadable is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeCounts {
    #[serde(rename = "P", default)]
    pub small: u32,
    #[serde(rename = "M", default)]
    pub medium: u32,
    #[serde(rename = "F", default)]
    pub large: u32,
    #[serde(rename = "I", default)]
    pub individual: u32,
    #[serde(rename = "FT", default)]
    pub slice: u32,
}

impl SizeCounts {
    pub fn get(&self, size: PizzaSize) -> u32 {
        match size {
            PizzaSize::Small => self.small,
            PizzaSize::Medium => self.medium,
            PizzaSize::Large => self.large,
            PizzaSize::Individual => self.individual,
            PizzaSize::Slice => self.slice,
        }
    }

    pub fn set(&mut self, size: PizzaSize, count: u32) {
        match size {
            PizzaSize::Small => self.small = count,
            PizzaSize::Medium => self.medium = count,
            PizzaSize::Large => self.large = count,
            PizzaSize::Individual => self.individual = count,
            PizzaSize::Slice => self.slice = count,
        }
    }

    /// Total number of pizzas across all sizes
    pub fn total(&self) -> u32 {
        PizzaSize::ALL
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(self.get(*s)))
    }
}

/// Read-only view of an in-flight order, as loaded by the order repository
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub finalized_at: Option<DateTime<Utc>>,
    /// Serialized size distribution, either the stored JSON text or the object itself
    #[serde(default, alias = "sizeCounts")]
    pub size: serde_json::Value,
    #[serde(default)]
    pub has_rider: bool,
    #[serde(default)]
    pub take_away: bool,
    #[serde(default)]
    pub delivery_zone_id: Option<String>,
}

impl OrderSnapshot {
    /// A rider is booked and the customer is not picking up
    pub fn is_delivery(&self) -> bool {
        self.has_rider && !self.take_away
    }
}
