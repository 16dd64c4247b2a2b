use ferrule_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. `RUST_LOG` wins over the configured
/// level. Logs go to stderr so `check --json` output stays parseable.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Logging initialized at level: {}", config.logging.level);
}
