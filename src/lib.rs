//! Locale-enforcing HTTP gateway library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod locale;
pub mod observability;
pub mod routing;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use locale::{LocaleCode, LocaleRegistry};
pub use routing::{LocaleRouter, RoutingDecision};
