pub const DEFAULT_PREP_MINUTES_SMALL: f64 = 8.0;
pub const DEFAULT_PREP_MINUTES_MEDIUM: f64 = 10.0;
pub const DEFAULT_PREP_MINUTES_LARGE: f64 = 12.0;
pub const DEFAULT_PREP_MINUTES_INDIVIDUAL: f64 = 6.0;
pub const DEFAULT_PREP_MINUTES_SLICE: f64 = 2.0;

pub const DEFAULT_HANDOFF_MINUTES: f64 = 3.0;
pub const DEFAULT_RIDER_RETURN_MINUTES: u32 = 10;

pub const DEFAULT_OPERATOR_COUNT: i32 = 2;
pub const DEFAULT_RIDER_COUNT: i32 = 2;

pub const DEFAULT_TIMELINE_SLOT_MINUTES: u32 = 30;
pub const DEFAULT_TIMELINE_MIN_SLOTS: u32 = 6;
/// One day of 15-minute slots
pub const MAX_TIMELINE_SLOTS: i64 = 96;

/// Brasília time, UTC-03:00
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = -180;

pub const DEFAULT_LOGS_DIR: &str = "logs";
