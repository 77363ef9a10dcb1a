use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

/// Installs the global subscriber; `RUST_LOG` overrides the configured
/// directives. Fails if a subscriber is already installed.
pub fn init_tracing(config: &TracingConfig, port: u16) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directives()));

    // Exactly one of the two is Some.
    let json_layer = config.json_format.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_file(true)
            .with_line_number(true)
    });
    let pretty_layer = (!config.json_format).then(|| fmt::layer().compact().with_target(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()?;

    tracing::info!(
        port,
        environment = %config.environment,
        json_format = config.json_format,
        "ECG analysis server initialized"
    );
    Ok(())
}
