use crate::config::MonitorConfig;
use crate::logging::RenderMode;
use crate::monitor::alert::AlertRecord;
use crate::monitor::stats::StatsReport;
use owo_colors::OwoColorize;

pub fn render_alert(alert: &AlertRecord, mode: RenderMode) -> String {
    let marker = match mode {
        RenderMode::Plain => "ALERT!".to_string(),
        RenderMode::Pretty => "ALERT!".red().bold().to_string(),
    };

    format!(
        "{marker} Error rate {:.2}% exceeds threshold at {}",
        alert.error_rate * 100.0,
        alert.window_start
    )
}

fn heading(text: &str, mode: RenderMode) -> String {
    match mode {
        RenderMode::Plain => text.to_string(),
        RenderMode::Pretty => text.bold().to_string(),
    }
}

pub fn render_stats(report: &StatsReport, config: &MonitorConfig, mode: RenderMode) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n",
        heading("=== Log Statistics Summary ===", mode)
    ));

    out.push_str(&format!(
        "\n{}\n",
        heading(
            &format!("Top {} IPs by request count:", config.top_n),
            mode
        )
    ));
    for (addr, count) in &report.top_sources {
        out.push_str(&format!("{addr}: {count} requests\n"));
    }

    out.push_str(&format!(
        "\nError responses in the {}-{} range: {:.2}%\n",
        config.error_status.min, config.error_status.max, report.error_percentage
    ));

    out.push_str(&format!(
        "\nAverage response size for GET requests: {:.2} bytes\n",
        report.average_get_bytes
    ));

    let s = &report.status;
    out.push_str(&format!(
        "\nStatus: 1xx={} 2xx={} 3xx={} 4xx={} 5xx={}\n",
        s.informational, s.success, s.redirect, s.client_error, s.server_error
    ));

    let total_latency: u64 = report.latency.iter().map(|b| b.count).sum();
    if total_latency > 0 {
        out.push_str(&format!("\n{}\n", heading("Request duration:", mode)));
        for bucket in &report.latency {
            let pct = (bucket.count as f64 / total_latency as f64) * 100.0;
            let bars = (pct / 5.0).floor() as usize;
            out.push_str(&format!(
                "  {:<12} {:<20} {:>5.1}%\n",
                bucket.label,
                "█".repeat(bars),
                pct
            ));
        }
        out.push_str(&format!(
            "Duration p95 ≈ {}ms | p99 ≈ {}ms\n",
            report.p95_ms, report.p99_ms
        ));
    } else {
        out.push_str("\nRequest duration: <no samples>\n");
    }

    out
}
