//! Locale routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (path, query, preference cookie)
//!     → classifier.rs (normalize, evaluate bypass matchers, detect locale prefix)
//!         Bypass      → RoutingDecision::Bypass
//!         HasLocale   → RoutingDecision::PassThrough
//!         NeedsLocale → locale::resolve → redirect.rs → RoutingDecision::Redirect
//!
//! Compilation (at startup):
//!     LocaleConfig + BypassConfig
//!     → LocaleRegistry + compiled matchers
//!     → Freeze as immutable LocaleRouter
//! ```
//!
//! # Design Decisions
//! - Matchers compiled at startup, immutable at runtime
//! - No regex in hot path (segment comparisons only)
//! - Deterministic: same input always yields the same decision
//! - Bypass is evaluated before the locale prefix

pub mod classifier;
pub mod decision;
pub mod matcher;
pub mod redirect;

pub use classifier::{normalize_path, PathClass, PathClassifier};
pub use decision::{LocaleRouter, RoutingDecision};
pub use redirect::{build_redirect_target, RedirectTarget};
