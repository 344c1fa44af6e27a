//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the locale registry is well formed (default is supported)
//! - Validate bypass patterns and addresses
//! - Detect bypass prefixes that would shadow a locale prefix
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::locale::{LocaleCode, RegistryError};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("locales: {0}")]
    Locales(#[from] RegistryError),

    #[error("{field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("{field}: {value:?} shadows the locale prefix /{locale}")]
    ShadowsLocale {
        field: &'static str,
        value: String,
        locale: LocaleCode,
    },
}

impl ValidationError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.locales.registry() {
        errors.push(ValidationError::Locales(e));
    }

    validate_cookie_name(&config.locales.cookie_name, &mut errors);

    for (field, value) in config.bypass.prefixes() {
        validate_bypass_path(field, value, &config.locales.supported, &mut errors);
    }

    validate_socket_addr("listener.bind_address", &config.listener.bind_address, &mut errors);
    validate_socket_addr("upstream.address", &config.upstream.address, &mut errors);
    if config.observability.metrics_enabled {
        validate_socket_addr(
            "observability.metrics_address",
            &config.observability.metrics_address,
            &mut errors,
        );
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::invalid("timeouts.request_secs", "must be greater than zero"));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::invalid(
            "observability.log_level",
            format!("expected one of {}", LOG_LEVELS.join(", ")),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_cookie_name(name: &str, errors: &mut Vec<ValidationError>) {
    if name.is_empty() {
        errors.push(ValidationError::invalid("locales.cookie_name", "must not be empty"));
    } else if name
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || matches!(c, ';' | '=' | ','))
    {
        errors.push(ValidationError::invalid(
            "locales.cookie_name",
            "must not contain whitespace, ';', '=' or ','",
        ));
    }
}

fn validate_bypass_path(
    field: &'static str,
    value: &str,
    locales: &[LocaleCode],
    errors: &mut Vec<ValidationError>,
) {
    if !value.starts_with('/') || value.len() < 2 {
        errors.push(ValidationError::invalid(field, "must start with '/' and name a segment"));
        return;
    }
    if value.ends_with('/') {
        errors.push(ValidationError::invalid(field, "must not end with '/'"));
        return;
    }

    let first_segment = value[1..].split('/').next().unwrap_or_default();
    if let Some(locale) = locales.iter().find(|l| l.as_str() == first_segment) {
        errors.push(ValidationError::ShadowsLocale {
            field,
            value: value.to_string(),
            locale: *locale,
        });
    }
}

fn validate_socket_addr(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if let Err(e) = value.parse::<SocketAddr>() {
        errors.push(ValidationError::invalid(field, format!("{value:?} is not a socket address ({e})")));
    }
}

pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
