//! Tracing subscriber bootstrap.

use anyhow::Context;
use shelf_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(&settings.level)))
        .with_context(|| format!("invalid log level '{}'", settings.level))?;

    let registry = tracing_subscriber::registry().with(filter);

    match settings.log_format {
        LogFormat::Pretty => registry.with(fmt::layer()).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    }
    .with_context(|| "failed to install tracing subscriber")?;

    tracing::debug!(format = ?settings.log_format, "telemetry initialized");
    Ok(())
}

fn default_directives(level: &str) -> String {
    format!("{level},shelf::access=info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_log_stays_visible_at_quiet_levels() {
        assert_eq!(default_directives("warn"), "warn,shelf::access=info");
    }
}
