use crate::config::ConfigError;
use crate::monitor::constants::{
    ERROR_RATE_THRESHOLD, ERROR_STATUS_MAX, ERROR_STATUS_MIN, TOP_N, WINDOW_SIZE,
};
use chrono::TimeDelta;
use std::time::Duration;

/// Inclusive range of HTTP status codes counted as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorStatusRange {
    pub min: u32,
    pub max: u32,
}

impl ErrorStatusRange {
    pub fn contains(&self, status: u32) -> bool {
        (self.min..=self.max).contains(&status)
    }
}

impl Default for ErrorStatusRange {
    fn default() -> Self {
        Self {
            min: ERROR_STATUS_MIN,
            max: ERROR_STATUS_MAX,
        }
    }
}

/// Settings shared by the window aggregator, the threshold alerter and the
/// statistics reporter.
///
/// The command line always runs with [`MonitorConfig::default`]. Use
/// [`MonitorConfig::new`] to build a validated non-default configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    pub window_size: Duration,
    pub error_threshold: f64,
    pub top_n: usize,
    pub error_status: ErrorStatusRange,
}

impl MonitorConfig {
    pub fn new(
        window_size: Duration,
        error_threshold: f64,
        top_n: usize,
        error_status: ErrorStatusRange,
    ) -> Result<Self, ConfigError> {
        if window_size.is_zero() {
            return Err(ConfigError::EmptyWindow);
        }
        if TimeDelta::from_std(window_size).is_err() {
            return Err(ConfigError::WindowTooLarge {
                window: window_size,
            });
        }
        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&error_threshold) {
            return Err(ConfigError::InvalidThreshold {
                threshold: error_threshold,
            });
        }
        if top_n == 0 {
            return Err(ConfigError::EmptyTopN);
        }
        if error_status.min > error_status.max {
            return Err(ConfigError::InvertedStatusRange {
                min: error_status.min,
                max: error_status.max,
            });
        }

        Ok(Self {
            window_size,
            error_threshold,
            top_n,
            error_status,
        })
    }

    pub fn is_error(&self, status: u32) -> bool {
        self.error_status.contains(status)
    }

    /// Window size as a signed delta, for timestamp arithmetic.
    pub(crate) fn window_delta(&self) -> TimeDelta {
        TimeDelta::from_std(self.window_size).unwrap_or(TimeDelta::MAX)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            error_threshold: ERROR_RATE_THRESHOLD,
            top_n: TOP_N,
            error_status: ErrorStatusRange::default(),
        }
    }
}
