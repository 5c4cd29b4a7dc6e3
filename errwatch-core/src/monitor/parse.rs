use crate::monitor::constants::TIMESTAMP_FORMAT;
use crate::monitor::types::Event;
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

// ip - action [timestamp] "domain" "request" status bytes duration
static RECORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+) - (\w+) "#,
        r#"\[([0-9]{2}/\w{3}/[0-9]{4}:[0-9]{2}:[0-9]{2}:[0-9]{2} [+-][0-9]{4})\] "#,
        r#""([^"]+)" "([^"]+)" ([0-9]+) ([0-9]+) ([0-9]+)$"#,
    ))
    .expect("record pattern is valid")
});

/// Parses one access-log line into an [`Event`].
///
/// Returns `None` for anything that does not match the record grammar exactly,
/// including timestamps that name an impossible date or a leap second, and
/// numeric fields that overflow. Surrounding whitespace is ignored.
pub fn parse_line(line: &str) -> Option<Event> {
    let caps = RECORD.captures(line.trim())?;

    // chrono maps second 60 to a leap second; reject it.
    let timestamp = DateTime::parse_from_str(&caps[3], TIMESTAMP_FORMAT)
        .ok()
        .filter(|ts| ts.timestamp_subsec_nanos() < 1_000_000_000)?;

    Some(Event {
        timestamp,
        source_address: caps[1].to_string(),
        action_label: caps[2].to_string(),
        domain: caps[4].to_string(),
        request_line: caps[5].to_string(),
        status_code: caps[6].parse().ok()?,
        bytes_sent: caps[7].parse().ok()?,
        request_duration_ms: caps[8].parse().ok()?,
    })
}
