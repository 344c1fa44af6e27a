//! Request path classification.
//!
//! # Responsibilities
//! - Normalize malformed paths
//! - Decide whether a path bypasses locale handling
//! - Detect an explicit locale prefix on segment boundaries

use std::borrow::Cow;
use std::sync::Arc;

use serde::Serialize;

use crate::config::BypassConfig;
use crate::locale::{LocaleCode, LocaleRegistry};
use crate::routing::matcher::{
    AnyMatcher, ExactMatcher, FileExtensionMatcher, PathMatcher, SegmentPrefixMatcher,
};

/// The class a request path falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "class", content = "locale", rename_all = "snake_case")]
pub enum PathClass {
    /// Asset, API or framework path; locale handling does not apply.
    Bypass,
    /// Page path without a locale prefix.
    NeedsLocale,
    /// Page path already carrying a supported locale prefix.
    HasLocale(LocaleCode),
}

/// Map an empty path, or one without a leading slash, to `/`.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Borrowed("/")
    }
}

/// Classifies request paths against the bypass patterns and locale registry.
#[derive(Debug)]
pub struct PathClassifier {
    registry: Arc<LocaleRegistry>,
    bypass: AnyMatcher,
}

impl PathClassifier {
    /// Compile bypass patterns from configuration.
    pub fn new(registry: Arc<LocaleRegistry>, bypass: &BypassConfig) -> Self {
        let matchers: Vec<Box<dyn PathMatcher>> = vec![
            Box::new(SegmentPrefixMatcher::new(bypass.internal_prefix.as_str())),
            Box::new(SegmentPrefixMatcher::new(bypass.static_prefix.as_str())),
            Box::new(ExactMatcher::new(bypass.favicon.as_str())),
            Box::new(SegmentPrefixMatcher::new(bypass.api_prefix.as_str())),
            Box::new(FileExtensionMatcher),
        ];

        Self {
            registry,
            bypass: AnyMatcher::new(matchers),
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Classify a request path (without query string).
    pub fn classify(&self, path: &str) -> PathClass {
        let path = normalize_path(path);

        if self.bypass.matches(&path) {
            return PathClass::Bypass;
        }

        match self.locale_prefix(&path) {
            Some(code) => PathClass::HasLocale(code),
            None => PathClass::NeedsLocale,
        }
    }

    /// The supported locale named by the first segment, if any.
    fn locale_prefix(&self, path: &str) -> Option<LocaleCode> {
        let rest = path.strip_prefix('/')?;
        let first = match rest.split_once('/') {
            Some((segment, _)) => segment,
            None => rest,
        };
        self.registry.parse(first)
    }
}
