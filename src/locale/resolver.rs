//! Locale resolution for requests without a locale prefix.

use crate::locale::registry::{LocaleCode, LocaleRegistry};
use crate::observability::metrics;

/// Pick the locale for a request that carries no locale prefix.
///
/// The stored preference is untrusted input (usually a cookie). It is used only
/// when it names a locale in `registry`; anything else falls back to the default.
pub fn resolve(registry: &LocaleRegistry, stored_preference: Option<&str>) -> LocaleCode {
    let Some(raw) = stored_preference else {
        return registry.default_locale();
    };

    match registry.parse(raw) {
        Some(code) => code,
        None => {
            tracing::debug!(
                preference_len = raw.len(),
                default = %registry.default_locale(),
                "Ignoring unsupported locale preference"
            );
            metrics::record_invalid_preference();
            registry.default_locale()
        }
    }
}
