use std::time::Duration;

pub const WINDOW_SIZE: Duration = Duration::from_secs(5 * 60);
pub const ERROR_RATE_THRESHOLD: f64 = 0.10;
pub const TOP_N: usize = 5;
pub const ERROR_STATUS_MIN: u32 = 400;
pub const ERROR_STATUS_MAX: u32 = 599;

/// Timestamp layout inside the square brackets, e.g. `10/Oct/2024:13:55:36 +0000`.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

pub const LATENCY_BUCKETS_MS: &[u64] = &[1, 5, 10, 25, 50, 100, 250, 500, 1000];
