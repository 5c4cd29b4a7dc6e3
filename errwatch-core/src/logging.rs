use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostic logging on stderr with environment-based filtering
///
/// stdout carries alerts and the statistics report, so every diagnostic goes to stderr:
/// - Uses `RUST_LOG` for level filtering (defaults to "warn" if not set)
/// - Emits flattened JSON when stderr is redirected, compact text on a terminal
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if io::stderr().is_terminal() {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init();
    }
}

pub fn default_render_mode() -> RenderMode {
    if io::stdout().is_terminal() {
        RenderMode::Pretty
    } else {
        RenderMode::Plain
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Plain,
    Pretty,
}
