use crate::monitor::constants::LATENCY_BUCKETS_MS;

/// Fixed-bucket histogram of request durations, with one overflow bucket past
/// the last bound.
#[derive(Debug, Clone)]
pub struct LatencyHistogram {
    bounds: &'static [u64],
    counts: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyBucket {
    pub label: String,
    /// Inclusive upper bound; `None` for the overflow bucket.
    pub upper_ms: Option<u64>,
    pub count: u64,
}

impl Default for LatencyHistogram {
    fn default() -> Self {
        Self::new(LATENCY_BUCKETS_MS)
    }
}

impl LatencyHistogram {
    pub fn new(bounds: &'static [u64]) -> Self {
        Self {
            bounds,
            counts: vec![0; bounds.len() + 1],
        }
    }

    pub fn record(&mut self, duration_ms: u64) {
        let idx = self
            .bounds
            .iter()
            .position(|b| duration_ms <= *b)
            .unwrap_or(self.bounds.len());
        self.counts[idx] += 1;
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn buckets(&self) -> Vec<LatencyBucket> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, count)| {
                let upper_ms = self.bounds.get(i).copied();
                let label = match (i, upper_ms) {
                    (0, Some(upper)) => format!("0–{upper}ms"),
                    (_, Some(upper)) => format!("{}–{upper}ms", self.bounds[i - 1] + 1),
                    (_, None) => match self.bounds.last() {
                        Some(last) => format!(">{last}ms"),
                        None => "all".to_string(),
                    },
                };

                LatencyBucket {
                    label,
                    upper_ms,
                    count: *count,
                }
            })
            .collect()
    }

    /// Upper bound of the bucket holding the `pct` quantile. Samples in the
    /// overflow bucket report one past the last bound. Returns 0 when empty.
    pub fn percentile(&self, pct: f64) -> u64 {
        let total = self.total();
        if total == 0 {
            return 0;
        }

        let target = (total as f64 * pct).ceil() as u64;
        let mut running = 0;

        for (i, count) in self.counts.iter().enumerate() {
            running += count;
            if running >= target {
                return match self.bounds.get(i) {
                    Some(upper) => *upper,
                    None => self.bounds.last().map_or(0, |b| b.saturating_add(1)),
                };
            }
        }

        0
    }
}
