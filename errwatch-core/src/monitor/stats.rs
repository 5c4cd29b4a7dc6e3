use crate::config::MonitorConfig;
use crate::monitor::histogram::{LatencyBucket, LatencyHistogram};
use crate::monitor::types::Event;
use ahash::RandomState;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusClasses {
    pub informational: u64,
    pub success: u64,
    pub redirect: u64,
    pub client_error: u64,
    pub server_error: u64,
}

impl StatusClasses {
    fn record(&mut self, status: u32) {
        match status {
            100..=199 => self.informational += 1,
            200..=299 => self.success += 1,
            300..=399 => self.redirect += 1,
            400..=499 => self.client_error += 1,
            500..=599 => self.server_error += 1,
            _ => {}
        }
    }
}

/// Batch summary over a whole event stream.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub total_events: usize,
    /// Most frequent source addresses, most requests first. Equal counts keep
    /// the order in which the addresses first appeared in the stream.
    pub top_sources: Vec<(String, u64)>,
    pub error_percentage: f64,
    pub average_get_bytes: f64,

    pub status: StatusClasses,
    pub latency: Vec<LatencyBucket>,
    pub p95_ms: u64,
    pub p99_ms: u64,
}

struct SourceTally {
    first_seen: usize,
    count: u64,
}

impl StatsReport {
    pub fn from_events(events: &[Event], config: &MonitorConfig) -> Self {
        let mut latency = LatencyHistogram::default();
        let mut status = StatusClasses::default();
        let mut errors = 0usize;
        let mut get_requests = 0u64;
        let mut get_bytes = 0u128;

        for e in events {
            latency.record(e.request_duration_ms);
            status.record(e.status_code);

            if config.is_error(e.status_code) {
                errors += 1;
            }
            if e.request_line.starts_with("GET") {
                get_requests += 1;
                get_bytes += u128::from(e.bytes_sent);
            }
        }

        let error_percentage = if events.is_empty() {
            0.0
        } else {
            100.0 * errors as f64 / events.len() as f64
        };

        let average_get_bytes = if get_requests == 0 {
            0.0
        } else {
            get_bytes as f64 / get_requests as f64
        };

        Self {
            total_events: events.len(),
            top_sources: top_sources(events, config.top_n),
            error_percentage,
            average_get_bytes,
            status,
            p95_ms: latency.percentile(0.95),
            p99_ms: latency.percentile(0.99),
            latency: latency.buckets(),
        }
    }
}

pub fn top_sources(events: &[Event], n: usize) -> Vec<(String, u64)> {
    let mut tallies: HashMap<&str, SourceTally, RandomState> = HashMap::default();

    for (idx, e) in events.iter().enumerate() {
        tallies
            .entry(e.source_address.as_str())
            .or_insert(SourceTally {
                first_seen: idx,
                count: 0,
            })
            .count += 1;
    }

    let mut ranked: Vec<_> = tallies.into_iter().collect();
    ranked.sort_by(|(_, a), (_, b)| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.first_seen.cmp(&b.first_seen))
    });

    ranked
        .into_iter()
        .take(n)
        .map(|(addr, tally)| (addr.to_string(), tally.count))
        .collect()
}
