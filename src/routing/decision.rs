//! Per-request routing decision.
//!
//! # State Transitions
//! ```text
//! START --classify--> Bypass      --> no-op, pipeline continues unmodified
//! START --classify--> HasLocale   --> PassThrough, delegate to the next stage
//! START --classify--> NeedsLocale --> resolve --> build target --> Redirect
//! ```
//!
//! Every transition is terminal; the router never loops or retries.

use std::sync::Arc;

use serde::Serialize;

use crate::config::BypassConfig;
use crate::locale::{self, LocaleCode, LocaleRegistry};
use crate::routing::classifier::{normalize_path, PathClass, PathClassifier};
use crate::routing::redirect::{build_redirect_target, RedirectTarget};

/// Outcome of routing one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RoutingDecision {
    /// Not a page request. Nothing to do.
    Bypass,
    /// Already locale-prefixed. Hand the untouched request to the next stage.
    PassThrough,
    /// Missing locale prefix. Redirect to the target.
    Redirect {
        locale: LocaleCode,
        #[serde(flatten)]
        target: RedirectTarget,
    },
}

impl RoutingDecision {
    /// Short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            RoutingDecision::Bypass => "bypass",
            RoutingDecision::PassThrough => "pass_through",
            RoutingDecision::Redirect { .. } => "redirect",
        }
    }
}

/// Immutable routing core shared by all request handlers.
#[derive(Debug)]
pub struct LocaleRouter {
    classifier: PathClassifier,
}

impl LocaleRouter {
    pub fn new(registry: Arc<LocaleRegistry>, bypass: &BypassConfig) -> Self {
        Self {
            classifier: PathClassifier::new(registry, bypass),
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        self.classifier.registry()
    }

    pub fn classifier(&self) -> &PathClassifier {
        &self.classifier
    }

    /// Decide what to do with a request.
    pub fn decide(&self, path: &str, query: &str, preference: Option<&str>) -> RoutingDecision {
        self.decide_with(path, query, || preference)
    }

    /// Like [`decide`](Self::decide), reading the stored preference lazily.
    ///
    /// `preference` is called at most once, and only when the path needs a locale.
    pub fn decide_with<'p>(
        &self,
        path: &str,
        query: &str,
        preference: impl FnOnce() -> Option<&'p str>,
    ) -> RoutingDecision {
        match self.classifier.classify(path) {
            PathClass::Bypass => RoutingDecision::Bypass,
            PathClass::HasLocale(_) => RoutingDecision::PassThrough,
            PathClass::NeedsLocale => {
                let locale = locale::resolve(self.registry(), preference());
                let target = build_redirect_target(&normalize_path(path), query, locale);
                RoutingDecision::Redirect { locale, target }
            }
        }
    }
}
