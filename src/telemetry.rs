//! Tracing subscriber setup shared by every subcommand.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogConfig;

/// Install the global subscriber. `RUST_LOG` wins over `config.filter`.
///
/// Output goes to stderr so the console's stdout carries only screens.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
