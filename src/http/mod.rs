//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, cookie / scheme / host extraction)
//!     → middleware/locale.rs (routing decision)
//!         Redirect            → response.rs (3xx with Location)
//!         Bypass, PassThrough → upstream.rs (forward to the web application)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;
pub mod upstream;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{HttpServer, ServerError};
pub use upstream::UpstreamForwarder;
