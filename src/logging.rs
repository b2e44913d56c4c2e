use tracing_subscriber::{fmt, EnvFilter};

/// Install the console subscriber; `RUST_LOG` overrides the `info` default.
///
/// Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
