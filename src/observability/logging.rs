//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config, overridable via `RUST_LOG`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Directive used when `RUST_LOG` is not set.
pub fn default_directive(config: &ObservabilityConfig) -> String {
    format!(
        "locale_gateway={level},tower_http={level}",
        level = config.log_level
    )
}

/// Install the global tracing subscriber.
///
/// Calling this twice is harmless; the second call leaves the first subscriber in place.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(config).into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        let config = ObservabilityConfig {
            log_level: "debug".to_string(),
            ..ObservabilityConfig::default()
        };
        assert_eq!(
            default_directive(&config),
            "locale_gateway=debug,tower_http=debug"
        );
    }
}
