//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level`; `log_format` selects between
/// human-readable text and one JSON object per line.
pub fn init(log_level: &str, log_format: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
