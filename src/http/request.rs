//! Request inspection helpers.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4)
//! - Read a named cookie from the Cookie header(s)
//! - Recover the scheme and host a client used, for absolute redirects
//!
//! # Design Decisions
//! - Helpers borrow from the request; nothing here mutates it
//! - Forwarded scheme accepted only when it is `http` or `https`
//! - Hosts containing URL delimiters are ignored rather than echoed

use axum::http::header::{COOKIE, HOST};
use axum::http::{HeaderMap, HeaderValue, Request, Uri};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Request ID generator producing random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Find the value of cookie `name`.
///
/// All Cookie headers are searched, in order. Surrounding double quotes are removed.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            if key.trim() == name {
                let value = value.trim();
                Some(
                    value
                        .strip_prefix('"')
                        .and_then(|v| v.strip_suffix('"'))
                        .unwrap_or(value),
                )
            } else {
                None
            }
        })
}

/// Scheme the client used: absolute-form URI, then `X-Forwarded-Proto`, then `http`.
pub fn request_scheme<'a>(uri: &'a Uri, headers: &'a HeaderMap) -> &'a str {
    if let Some(scheme) = uri.scheme_str() {
        return scheme;
    }

    headers
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|proto| proto.eq_ignore_ascii_case("http") || proto.eq_ignore_ascii_case("https"))
        .map(|proto| if proto.eq_ignore_ascii_case("https") { "https" } else { "http" })
        .unwrap_or("http")
}

/// Host the client addressed: URI authority, then the `Host` header.
pub fn request_host<'a>(uri: &'a Uri, headers: &'a HeaderMap) -> Option<&'a str> {
    if let Some(authority) = uri.authority() {
        return Some(authority.as_str());
    }

    headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|host| is_plain_host(host))
}

fn is_plain_host(host: &str) -> bool {
    !host.is_empty()
        && !host
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '\\' | '@' | '?' | '#'))
}
