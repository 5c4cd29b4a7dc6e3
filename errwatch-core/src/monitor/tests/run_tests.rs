use crate::config::MonitorConfig;
use crate::logging::RenderMode;
use crate::monitor::tests::test_helpers::{RawRecord, ts_plus};
use crate::monitor::{MonitorMode, RunSummary, run_monitor_to};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_log(path: &Path) {
    let lines = [
        RawRecord::new(ts_plus(0)).status(500).build(),
        RawRecord::new(ts_plus(30)).status(200).build(),
        "malformed".to_string(),
        RawRecord::new(ts_plus(600)).status(200).build(),
    ];
    fs::write(path, lines.join("\n")).unwrap();
}

fn run(path: &Path, mode: MonitorMode) -> (RunSummary, String) {
    let mut out = Vec::new();
    let summary = run_monitor_to(
        path,
        mode,
        &MonitorConfig::default(),
        RenderMode::Plain,
        &mut out,
    )
    .unwrap();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn alerts_mode_prints_only_alert_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    write_log(&path);

    let (summary, out) = run(&path, MonitorMode::Alerts);

    assert_eq!(summary, RunSummary { events: 3, alerts: 1 });
    assert_eq!(
        out,
        "ALERT! Error rate 50.00% exceeds threshold at 2024-10-10 13:55:36 +00:00\n"
    );
}

#[test]
fn stats_mode_prints_only_the_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    write_log(&path);

    let (summary, out) = run(&path, MonitorMode::Stats);

    assert_eq!(summary.alerts, 0);
    assert!(!out.contains("ALERT!"));
    assert!(out.contains("192.168.1.10: 3 requests\n"));
    assert!(out.contains("Error responses in the 400-599 range: 33.33%\n"));
}

#[test]
fn all_mode_prints_alerts_before_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    write_log(&path);

    let (_, out) = run(&path, MonitorMode::All);

    let alert_at = out.find("ALERT!").unwrap();
    let report_at = out.find("=== Log Statistics Summary ===").unwrap();
    assert!(alert_at < report_at);
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.log");
    let mut out = Vec::new();

    let result = run_monitor_to(
        &path,
        MonitorMode::All,
        &MonitorConfig::default(),
        RenderMode::Plain,
        &mut out,
    );

    assert!(result.is_err());
    assert!(out.is_empty());
}
