use clap::{Parser, Subcommand};
use errwatch_core::logging::{RenderMode, default_render_mode, init_logging};
use errwatch_core::monitor::{MonitorMode, run_monitor};
use std::path::PathBuf;

const DEFAULT_LOG: &str = "access.log";

#[derive(Parser, Debug)]
#[command(
    name = "errwatch",
    version,
    about = "errwatch: access-log error-rate monitor"
)]
struct Cli {
    /// Never colour the output, even on a terminal
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one line per 5-minute window whose error rate exceeds 10%
    Alerts {
        /// Path to the access log
        #[arg(default_value = DEFAULT_LOG)]
        file: PathBuf,
    },

    /// Print the batch statistics report
    Stats {
        #[arg(default_value = DEFAULT_LOG)]
        file: PathBuf,
    },

    /// Print alerts followed by the statistics report (default)
    Run {
        #[arg(default_value = DEFAULT_LOG)]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let render = if cli.plain {
        RenderMode::Plain
    } else {
        default_render_mode()
    };

    let (mode, file) = match cli.command {
        Some(Command::Alerts { file }) => (MonitorMode::Alerts, file),
        Some(Command::Stats { file }) => (MonitorMode::Stats, file),
        Some(Command::Run { file }) => (MonitorMode::All, file),
        None => (MonitorMode::All, PathBuf::from(DEFAULT_LOG)),
    };

    if let Err(e) = run_monitor(&file, mode, render) {
        eprintln!("errwatch: {e:#}");
        std::process::exit(1);
    }
}
