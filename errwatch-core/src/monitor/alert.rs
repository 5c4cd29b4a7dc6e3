use crate::config::MonitorConfig;
use crate::monitor::types::Event;
use crate::monitor::window::{SealedWindow, seal_windows};
use chrono::{DateTime, FixedOffset};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct AlertRecord {
    pub window_start: DateTime<FixedOffset>,
    pub error_rate: f64,
    pub members: usize,
}

pub struct ThresholdAlerter {
    threshold: f64,
}

impl ThresholdAlerter {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            threshold: config.error_threshold,
        }
    }

    /// Strictly greater: a rate equal to the threshold does not alert.
    pub fn exceeds(&self, error_rate: f64) -> bool {
        error_rate > self.threshold
    }

    pub fn evaluate(&self, window: &SealedWindow<'_>) -> Option<AlertRecord> {
        let error_rate = window.error_rate();

        debug!(
            start = %window.start_time,
            members = window.members.len(),
            errors = window.error_count,
            error_rate,
            "window sealed"
        );

        self.exceeds(error_rate).then(|| AlertRecord {
            window_start: window.start_time,
            error_rate,
            members: window.members.len(),
        })
    }
}

/// Sweeps an ordered event stream and returns one alert per window whose error
/// rate exceeds the configured threshold, in window order.
pub fn sweep(events: &[Event], config: &MonitorConfig) -> Vec<AlertRecord> {
    let alerter = ThresholdAlerter::new(config);

    seal_windows(events, config)
        .iter()
        .filter_map(|w| alerter.evaluate(w))
        .collect()
}
