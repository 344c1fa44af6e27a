//! Responses produced by the gateway itself.
//!
//! # Responsibilities
//! - Locale redirects (307, or 308 when configured permanent)
//! - Map an unreachable upstream to 502 Bad Gateway
//!
//! # Design Decisions
//! - Redirects carry an empty body; clients follow the Location header
//! - Upstream responses, including upstream errors, are never rewritten here

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

/// Redirect to `location`.
pub fn redirect_to(location: &str, permanent: bool) -> Response {
    if permanent {
        Redirect::permanent(location).into_response()
    } else {
        Redirect::temporary(location).into_response()
    }
}

/// Response used when the upstream could not be reached.
pub fn upstream_unavailable() -> Response {
    (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
}
