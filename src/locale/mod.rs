//! Locale subsystem.
//!
//! # Data Flow
//! ```text
//! config.locales (strings)
//!     → registry.rs (LocaleCode parse, membership, default)
//!     → LocaleRegistry (validated, immutable)
//!     → shared via Arc with the routing core
//!
//! Per request (only when the path has no locale prefix):
//!     stored preference (cookie value, untrusted)
//!     → resolver.rs (membership check)
//!     → LocaleCode
//! ```
//!
//! # Design Decisions
//! - Locale codes are a closed enum; a raw string is checked exactly once
//! - Registry is built at startup and never mutated
//! - Invalid preferences fall back to the default, they are never errors

pub mod registry;
pub mod resolver;

pub use registry::{LocaleCode, LocaleRegistry, RegistryError, UnknownLocale};
pub use resolver::resolve;
