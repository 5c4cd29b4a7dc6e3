//! Access-Log Error-Rate Monitor
//!
//! Reads an access log in one fixed textual format and reports on it two ways:
//!
//! - **Alerts**: the ordered event stream is cut into 5-minute windows and every window
//!   whose share of 4xx/5xx responses exceeds the threshold produces one alert line
//! - **Stats**: a batch summary of the whole stream (top requesters, overall error
//!   percentage, average GET response size, status classes and request durations)
//!
//! Lines that do not match the record format are dropped quietly. The only fatal
//! condition is an input file that cannot be read, and that is detected before any
//! output is written.
//!
//! Windows are anchored at the first event that lands in them rather than on a
//! wall-clock grid, so boundaries drift with the data. A window is sealed when an
//! event falls past its span or the stream ends, and only sealed, non-empty windows
//! are evaluated.
//!
//! The overall data processing architecture is:
//!
//! access log
//! parse_line
//! Event (sorted by timestamp)
//! WindowAggregator -> SealedWindow -> ThresholdAlerter -> AlertRecord
//! StatsReport -> render_stats
//!

mod alert;
pub mod constants;
mod error;
mod histogram;
mod parse;
mod render;
mod run;
mod stats;
mod stream;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use alert::{AlertRecord, ThresholdAlerter, sweep};
pub use error::MonitorError;
pub use histogram::{LatencyBucket, LatencyHistogram};
pub use parse::parse_line;
pub use render::{render_alert, render_stats};
pub use run::{MonitorMode, RunSummary, run_monitor, run_monitor_to};
pub use stats::{StatsReport, StatusClasses, top_sources};
pub use stream::{build_event_stream, load_events};
pub use types::Event;
pub use window::{SealedWindow, Window, WindowAggregator, WindowState, seal_windows};
