use errwatch_core::config::MonitorConfig;
use errwatch_core::logging::RenderMode;
use errwatch_core::monitor::{MonitorMode, RunSummary, run_monitor_to};
use std::path::{Path, PathBuf};

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Runs the monitor over `path` with the default configuration and returns
/// the summary and everything written to stdout.
pub fn run_fixture(path: &Path, mode: MonitorMode) -> (RunSummary, String) {
    let mut out = Vec::new();

    let summary = run_monitor_to(
        path,
        mode,
        &MonitorConfig::default(),
        RenderMode::Plain,
        &mut out,
    )
    .expect("monitor run failed");

    (
        summary,
        String::from_utf8(out).expect("monitor output is UTF-8"),
    )
}
