use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber.
/// - Respects `RUST_LOG` if set, otherwise uses `level`
/// - Writes to stderr so log lines stay out of the menu on stdout
/// - Safe to call more than once; later calls are ignored
pub fn init(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
