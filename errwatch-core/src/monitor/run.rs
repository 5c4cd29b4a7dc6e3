use crate::config::MonitorConfig;
use crate::logging::RenderMode;
use crate::monitor::alert::sweep;
use crate::monitor::render::{render_alert, render_stats};
use crate::monitor::stats::StatsReport;
use crate::monitor::stream::load_events;
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorMode {
    Alerts,
    Stats,
    All,
}

impl MonitorMode {
    fn alerts(self) -> bool {
        matches!(self, MonitorMode::Alerts | MonitorMode::All)
    }

    fn stats(self) -> bool {
        matches!(self, MonitorMode::Stats | MonitorMode::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub events: usize,
    pub alerts: usize,
}

pub fn run_monitor(path: &Path, mode: MonitorMode, render: RenderMode) -> Result<RunSummary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_monitor_to(path, mode, &MonitorConfig::default(), render, &mut out)
}

/// Loads `path` and writes alerts and/or the statistics report to `out`.
///
/// Nothing is written when the input cannot be read.
pub fn run_monitor_to<W: Write>(
    path: &Path,
    mode: MonitorMode,
    config: &MonitorConfig,
    render: RenderMode,
    out: &mut W,
) -> Result<RunSummary> {
    let events = load_events(path)?;
    let mut alerts = 0;

    if mode.alerts() {
        for alert in sweep(&events, config) {
            writeln!(out, "{}", render_alert(&alert, render))?;
            alerts += 1;
        }
    }

    if mode.stats() {
        let report = StatsReport::from_events(&events, config);
        write!(out, "{}", render_stats(&report, config, render))?;
    }

    out.flush()?;

    info!(
        path = %path.display(),
        events = events.len(),
        alerts,
        "monitor run complete"
    );

    Ok(RunSummary {
        events: events.len(),
        alerts,
    })
}
