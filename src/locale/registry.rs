//! Supported locales and the default locale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A language the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// Georgian.
    Ka,
    /// English.
    En,
    /// Russian.
    Ru,
}

impl LocaleCode {
    /// Every locale the gateway knows how to serve.
    pub const ALL: [LocaleCode; 3] = [LocaleCode::Ka, LocaleCode::En, LocaleCode::Ru];

    /// Parse a raw code. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ka" => Some(Self::Ka),
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            _ => None,
        }
    }

    /// The code as it appears in URLs and cookies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ka => "ka",
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known locale code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale code: {0:?}")]
pub struct UnknownLocale(pub String);

impl FromStr for LocaleCode {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Errors raised while building a [`LocaleRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("at least one supported locale is required")]
    Empty,
    #[error("locale {0} is listed more than once")]
    Duplicate(LocaleCode),
    #[error("default locale {0} is not in the supported list")]
    DefaultNotSupported(LocaleCode),
}

/// The ordered set of locales this deployment serves, plus its default.
///
/// Constructed once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    supported: Vec<LocaleCode>,
    default: LocaleCode,
}

impl LocaleRegistry {
    /// Build a registry, failing if the default is not itself supported.
    pub fn new(supported: Vec<LocaleCode>, default: LocaleCode) -> Result<Self, RegistryError> {
        if supported.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (i, code) in supported.iter().enumerate() {
            if supported[..i].contains(code) {
                return Err(RegistryError::Duplicate(*code));
            }
        }

        if !supported.contains(&default) {
            return Err(RegistryError::DefaultNotSupported(default));
        }

        Ok(Self { supported, default })
    }

    /// Supported locales in configuration order.
    pub fn supported(&self) -> &[LocaleCode] {
        &self.supported
    }

    pub fn default_locale(&self) -> LocaleCode {
        self.default
    }

    pub fn contains(&self, code: LocaleCode) -> bool {
        self.supported.contains(&code)
    }

    /// Parse a raw value and check it against this registry.
    ///
    /// A code the enum knows but this deployment does not serve yields `None`.
    pub fn parse(&self, raw: &str) -> Option<LocaleCode> {
        LocaleCode::parse(raw).filter(|code| self.contains(*code))
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self {
            supported: LocaleCode::ALL.to_vec(),
            default: LocaleCode::Ka,
        }
    }
}
