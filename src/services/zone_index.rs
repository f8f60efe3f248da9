//! Lookup table of delivery zone travel estimates.
//!
//! The source list may carry several rows per zone (one per serving
//! location). The first row seen for a zone is kept and later rows are
//! dropped, even when they carry more data.

use std::collections::HashMap;

use crate::types::{ZoneTime, ZoneTimeRaw};

#[derive(Debug, Clone, Default)]
pub struct ZoneIndex {
    zones: HashMap<String, ZoneTime>,
}

impl ZoneIndex {
    /// Build the index from raw rows in input order. Rows without a zone id are skipped.
    pub fn build<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = ZoneTimeRaw>,
    {
        let mut zones: HashMap<String, ZoneTime> = HashMap::new();

        for row in raw {
            let zone_id = match row.zone_id {
                Some(id) if !id.is_empty() => id,
                _ => continue,
            };

            zones.entry(zone_id.clone()).or_insert(ZoneTime {
                zone_id,
                eta_minutes: row.eta_minutes,
                distance_km: row.distance_km,
            });
        }

        Self { zones }
    }

    pub fn lookup(&self, zone_id: &str) -> Option<&ZoneTime> {
        self.zones.get(zone_id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
