//! Prediction engine

pub mod capacity;
pub mod delivery_time;
pub mod dispatch_schedule;
pub mod prediction;
pub mod production_time;
pub mod ready_schedule;
pub mod size_codec;
pub mod timeline;
pub mod workers;
pub mod zone_index;
