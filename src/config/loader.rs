//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{join_errors, validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<GatewayConfig, ConfigError> {
    let config: GatewayConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleCode;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [locales]
            supported = ["ka", "en"]
            default = "en"
            cookie_name = "lang"
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.locales.default, LocaleCode::En);
        assert_eq!(config.locales.cookie_name, "lang");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[locales\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let err = parse_config(
            r#"
            [locales]
            supported = ["en"]
            default = "ru"

            [upstream]
            address = "nowhere"
            "#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("default locale ru"));
        assert!(message.contains("upstream.address"));
    }
}
