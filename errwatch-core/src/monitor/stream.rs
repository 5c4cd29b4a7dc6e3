use crate::monitor::error::MonitorError;
use crate::monitor::parse::parse_line;
use crate::monitor::types::Event;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses every line, drops the ones that do not match, and orders the rest by
/// timestamp. Events with equal timestamps keep their input order.
pub fn build_event_stream<I>(lines: I) -> Vec<Event>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut events: Vec<Event> = lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect();

    // Vec::sort_by_key is stable.
    events.sort_by_key(|e| e.timestamp);
    events
}

/// Reads an access log from disk and builds its ordered event stream.
///
/// The whole file is read before anything is parsed, so a read failure never
/// produces a partial stream. `\n`, `\r\n` and bare `\r` all end a line. Lines that are not valid UTF-8 are dropped like
/// any other unparseable line.
pub fn load_events(path: &Path) -> Result<Vec<Event>, MonitorError> {
    let raw = fs::read(path).map_err(|e| MonitorError::read_input(path, e))?;

    let raw_lines: Vec<&[u8]> = raw
        .split(|b| matches!(*b, b'\n' | b'\r'))
        .filter(|line| !line.trim_ascii().is_empty())
        .collect();

    let events = build_event_stream(
        raw_lines
            .iter()
            .filter_map(|line| std::str::from_utf8(line).ok()),
    );

    debug!(
        path = %path.display(),
        lines = raw_lines.len(),
        events = events.len(),
        dropped = raw_lines.len() - events.len(),
        "event stream built"
    );

    Ok(events)
}
