//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::locale::{LocaleCode, LocaleRegistry, RegistryError};

/// Root configuration for the locale gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Supported locales, default locale and preference cookie.
    pub locales: LocaleConfig,

    /// Paths exempt from locale enforcement.
    pub bypass: BypassConfig,

    /// Redirect response settings.
    pub redirect: RedirectConfig,

    /// Web application that receives every non-redirected request.
    pub upstream: UpstreamConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Supported locale codes, in order.
    pub supported: Vec<LocaleCode>,

    /// Locale used when no valid preference is stored.
    pub default: LocaleCode,

    /// Cookie carrying the visitor's stored locale preference.
    pub cookie_name: String,
}

impl LocaleConfig {
    /// Build the runtime registry from this section.
    pub fn registry(&self) -> Result<LocaleRegistry, RegistryError> {
        LocaleRegistry::new(self.supported.clone(), self.default)
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            supported: LocaleCode::ALL.to_vec(),
            default: LocaleCode::Ka,
            cookie_name: "NEXT_LOCALE".to_string(),
        }
    }
}

/// Bypass patterns. Prefixes match on whole path segments.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BypassConfig {
    /// Framework-internal path prefix.
    pub internal_prefix: String,

    /// Static asset path prefix.
    pub static_prefix: String,

    /// Favicon path.
    pub favicon: String,

    /// API path prefix.
    pub api_prefix: String,
}

impl BypassConfig {
    /// All prefix-style entries, for validation.
    pub fn prefixes(&self) -> [(&'static str, &str); 4] {
        [
            ("bypass.internal_prefix", self.internal_prefix.as_str()),
            ("bypass.static_prefix", self.static_prefix.as_str()),
            ("bypass.favicon", self.favicon.as_str()),
            ("bypass.api_prefix", self.api_prefix.as_str()),
        ]
    }
}

impl Default for BypassConfig {
    fn default() -> Self {
        Self {
            internal_prefix: "/_next".to_string(),
            static_prefix: "/static".to_string(),
            favicon: "/favicon.ico".to_string(),
            api_prefix: "/api".to_string(),
        }
    }
}

/// Redirect configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Use 308 Permanent Redirect instead of 307 Temporary Redirect.
    pub permanent: bool,
}

/// Upstream application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Upstream address (e.g., "127.0.0.1:3000").
    pub address: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.locales.default, LocaleCode::Ka);
        assert_eq!(config.locales.cookie_name, "NEXT_LOCALE");
        assert_eq!(config.bypass.api_prefix, "/api");
        assert!(!config.redirect.permanent);
    }

    #[test]
    fn test_partial_sections() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [locales]
            supported = ["en", "ru"]
            default = "en"

            [bypass]
            api_prefix = "/rest"
            "#,
        )
        .unwrap();

        assert_eq!(config.locales.supported, vec![LocaleCode::En, LocaleCode::Ru]);
        assert_eq!(config.locales.cookie_name, "NEXT_LOCALE");
        assert_eq!(config.bypass.api_prefix, "/rest");
        assert_eq!(config.bypass.internal_prefix, "/_next");

        let registry = config.locales.registry().unwrap();
        assert_eq!(registry.default_locale(), LocaleCode::En);
    }

    #[test]
    fn test_unknown_locale_code_fails_to_parse() {
        let result: Result<GatewayConfig, _> = toml::from_str(
            r#"
            [locales]
            supported = ["ka", "de"]
            "#,
        );
        assert!(result.is_err());
    }
}
