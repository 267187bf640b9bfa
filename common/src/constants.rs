/// Seconds between two status advances of the simulated order feed.
pub const DEFAULT_ADVANCE_INTERVAL_SECS: u64 = 5;
/// Probability that the feed skips a tick instead of advancing.
pub const STALL_PROBABILITY: f32 = 0.25;

pub const CURRENCY_SYMBOL: &str = "$";
pub const STAGE_TIME_FORMAT: &str = "%-I:%M %p";

pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
pub const ADVANCE_INTERVAL_ENV: &str = "ORDER_ADVANCE_SECS";

pub const EMPTY_SEQUENCE_MESSAGE: &str = "No order statuses to display.";
pub const UNKNOWN_STATUS_MESSAGE: &str = "Error: Invalid order status provided.";
pub const DUPLICATE_STAGE_MESSAGE: &str = "Error: The stage list repeats a stage.";
