use crate::config::MonitorConfig;
use crate::logging::RenderMode;
use crate::monitor::tests::test_helpers::{BASE_TS, RawRecord};
use crate::monitor::{AlertRecord, StatsReport, render_alert, render_stats};
use pretty_assertions::assert_eq;

#[test]
fn alert_line_shows_rate_as_percentage_and_window_start() {
    let event = RawRecord::new(BASE_TS).event();
    let alert = AlertRecord {
        window_start: event.timestamp,
        error_rate: 0.4,
        members: 5,
    };

    assert_eq!(
        render_alert(&alert, RenderMode::Plain),
        "ALERT! Error rate 40.00% exceeds threshold at 2024-10-10 13:55:36 +00:00"
    );
}

#[test]
fn pretty_alert_keeps_the_same_text() {
    let event = RawRecord::new(BASE_TS).event();
    let alert = AlertRecord {
        window_start: event.timestamp,
        error_rate: 1.0,
        members: 1,
    };

    let pretty = render_alert(&alert, RenderMode::Pretty);

    assert!(pretty.contains("\x1b["));
    assert!(pretty.contains("ALERT!"));
    assert!(pretty.ends_with("Error rate 100.00% exceeds threshold at 2024-10-10 13:55:36 +00:00"));
}

#[test]
fn empty_report_renders_zero_values() {
    let cfg = MonitorConfig::default();
    let report = StatsReport::from_events(&[], &cfg);

    let out = render_stats(&report, &cfg, RenderMode::Plain);

    assert_eq!(
        out,
        "\n=== Log Statistics Summary ===\n\
         \nTop 5 IPs by request count:\n\
         \nError responses in the 400-599 range: 0.00%\n\
         \nAverage response size for GET requests: 0.00 bytes\n\
         \nStatus: 1xx=0 2xx=0 3xx=0 4xx=0 5xx=0\n\
         \nRequest duration: <no samples>\n"
    );
}

#[test]
fn report_lists_sources_and_formats_two_decimals() {
    let cfg = MonitorConfig::default();
    let events = vec![
        RawRecord::new(BASE_TS).ip("10.0.0.1").bytes(100).event(),
        RawRecord::new(BASE_TS).ip("10.0.0.1").bytes(200).status(404).event(),
        RawRecord::new(BASE_TS).ip("10.0.0.2").bytes(101).event(),
    ];
    let report = StatsReport::from_events(&events, &cfg);

    let out = render_stats(&report, &cfg, RenderMode::Plain);

    assert!(out.contains("Top 5 IPs by request count:\n10.0.0.1: 2 requests\n10.0.0.2: 1 requests\n"));
    assert!(out.contains("Error responses in the 400-599 range: 33.33%\n"));
    assert!(out.contains("Average response size for GET requests: 133.67 bytes\n"));
    assert!(out.contains("Status: 1xx=0 2xx=2 3xx=0 4xx=1 5xx=0\n"));
    assert!(out.contains("Request duration:\n"));
    assert!(out.contains("Duration p95 ≈ 25ms | p99 ≈ 25ms\n"));
}
