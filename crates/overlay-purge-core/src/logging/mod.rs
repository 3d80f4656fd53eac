use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging at the given level (`error`, `warn`, `info`, `debug`, `trace`).
///
/// Lines go to stderr with a timestamp and level. Levels are colour-coded only
/// when stderr is a terminal, so redirected output stays free of escape codes.
/// `RUST_LOG` directives still apply on top of the default one.
pub fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .with(EnvFilter::from_default_env().add_directive(default_directive(level)))
        .init();
}

/// Build the `overlay_purge=<level>` directive, falling back to `info` for unknown levels.
fn default_directive(level: &str) -> tracing_subscriber::filter::Directive {
    let level = match level.trim().to_ascii_lowercase().as_str() {
        l @ ("error" | "warn" | "info" | "debug" | "trace") => l.to_string(),
        _ => "info".to_string(),
    };
    format!("overlay_purge={level}")
        .parse()
        .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
}
