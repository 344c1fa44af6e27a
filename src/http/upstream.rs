//! Forwarding to the upstream web application.
//!
//! The upstream owns everything after locale routing: session refresh, page
//! rendering, API handlers and static files. Requests are forwarded with their
//! method, path, query, headers and body intact; only the URI authority and
//! protocol version change.

use std::str::FromStr;
use std::time::Instant;

use axum::body::Body;
use axum::http::uri::{Authority, InvalidUri, PathAndQuery, Scheme};
use axum::http::{Request, Uri, Version};
use axum::response::Response;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::http::response::upstream_unavailable;
use crate::http::X_REQUEST_ID;
use crate::observability::metrics;

/// HTTP client bound to one upstream address.
#[derive(Clone)]
pub struct UpstreamForwarder {
    client: Client<HttpConnector, Body>,
    authority: Authority,
}

impl UpstreamForwarder {
    /// Create a forwarder for `address` (e.g. "127.0.0.1:3000").
    pub fn new(address: &str) -> Result<Self, InvalidUri> {
        let authority = Authority::from_str(address)?;
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Ok(Self { client, authority })
    }

    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Forward `request` and stream back whatever the upstream answers.
    ///
    /// Connection failures become 502; upstream statuses are passed through.
    pub async fn forward(&self, request: Request<Body>) -> Response {
        let start = Instant::now();
        let (mut parts, body) = request.into_parts();

        let request_id = parts
            .headers
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let mut uri_parts = parts.uri.clone().into_parts();
        uri_parts.scheme = Some(Scheme::HTTP);
        uri_parts.authority = Some(self.authority.clone());
        if uri_parts.path_and_query.is_none() {
            uri_parts.path_and_query = Some(PathAndQuery::from_static("/"));
        }
        // The upstream connection is HTTP/1.1 regardless of how the client connected.
        parts.version = Version::HTTP_11;
        parts.uri = match Uri::from_parts(uri_parts) {
            Ok(uri) => uri,
            Err(e) => {
                tracing::warn!(request_id = %request_id, error = %e, "Cannot build upstream URI");
                return upstream_unavailable();
            }
        };

        tracing::debug!(
            request_id = %request_id,
            method = %parts.method,
            uri = %parts.uri,
            "Forwarding request"
        );

        match self.client.request(Request::from_parts(parts, body)).await {
            Ok(response) => {
                let status = response.status();
                metrics::record_upstream(status.as_u16(), start);

                let (parts, body) = response.into_parts();
                Response::from_parts(parts, Body::new(body))
            }
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    upstream = %self.authority,
                    error = %e,
                    "Upstream error"
                );
                metrics::record_upstream(502, start);
                upstream_unavailable()
            }
        }
    }
}

impl std::fmt::Debug for UpstreamForwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamForwarder")
            .field("authority", &self.authority)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_rejects_invalid_address() {
        assert!(UpstreamForwarder::new("not a host").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let forwarder = UpstreamForwarder::new(&addr.to_string()).unwrap();
        let request = Request::builder()
            .uri("/ka/companies")
            .body(Body::empty())
            .unwrap();

        let response = forwarder.forward(request).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
