//! tracing-subscriber setup

use anyhow::{Context, Result};
use orm_demos::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global subscriber. `RUST_LOG` overrides `logging.level`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid log filter '{}'", config.level))?,
    };

    let registry = tracing_subscriber::registry();
    if config.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(true)
            .with_filter(env_filter);
        registry.with(fmt_layer).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(env_filter);
        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}
