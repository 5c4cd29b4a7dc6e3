use chrono::{DateTime, FixedOffset};

/// One access-log record that matched the record grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub timestamp: DateTime<FixedOffset>,
    pub source_address: String,
    pub action_label: String,
    pub domain: String,
    pub request_line: String,
    pub status_code: u32,
    pub bytes_sent: u64,
    pub request_duration_ms: u64,
}
