use tracing_subscriber::EnvFilter;

/// Initialize tracing from `RUST_LOG` (default `warn`).
///
/// Output always goes to stderr; stdout carries paths and listings that the
/// shell integration parses.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
