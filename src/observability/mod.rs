//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Locale middleware and upstream forwarder produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields (path, decision, locale) on every routing event
//! - Request ID flows through via the x-request-id header
//! - Metrics are cheap; without an installed recorder they are no-ops

pub mod logging;
pub mod metrics;
