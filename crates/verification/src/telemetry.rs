use crate::config::{AppEnvironment, TelemetryConfig};
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("tracing subscriber could not be installed")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global subscriber for the verification service.
///
/// `RUST_LOG` wins over the configured level so operators can raise
/// verbosity without redeploying. Development keeps ANSI colors for local
/// runs; test and production log plain compact lines for collection.
pub fn init(environment: AppEnvironment, config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::Filter {
                value: config.log_level.clone(),
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(environment == AppEnvironment::Development)
        .try_init()
        .map_err(TelemetryError::Install)
}
