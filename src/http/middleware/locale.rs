//! Locale enforcement middleware.
//!
//! Requests without a locale prefix are redirected; every other request reaches
//! the next stage exactly as it arrived.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::config::GatewayConfig;
use crate::http::request::{read_cookie, request_host, request_scheme};
use crate::http::response::redirect_to;
use crate::locale::LocaleRegistry;
use crate::observability::metrics;
use crate::routing::{LocaleRouter, RoutingDecision};

/// State required by [`locale_middleware`].
#[derive(Debug, Clone)]
pub struct LocaleState {
    pub router: Arc<LocaleRouter>,
    pub cookie_name: Arc<str>,
    pub permanent: bool,
}

impl LocaleState {
    pub fn new(registry: Arc<LocaleRegistry>, config: &GatewayConfig) -> Self {
        Self {
            router: Arc::new(LocaleRouter::new(registry, &config.bypass)),
            cookie_name: Arc::from(config.locales.cookie_name.as_str()),
            permanent: config.redirect.permanent,
        }
    }
}

pub async fn locale_middleware(
    State(state): State<LocaleState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let uri = request.uri();
    let decision = state.router.decide_with(uri.path(), uri.query().unwrap_or(""), || {
        read_cookie(request.headers(), &state.cookie_name)
    });
    metrics::record_decision(&decision);

    match decision {
        RoutingDecision::Bypass => next.run(request).await,
        RoutingDecision::PassThrough => {
            tracing::trace!(path = %request.uri().path(), "Locale present, passing through");
            next.run(request).await
        }
        RoutingDecision::Redirect { locale, target } => {
            let location = target.location(
                request_scheme(request.uri(), request.headers()),
                request_host(request.uri(), request.headers()),
            );
            tracing::debug!(
                path = %request.uri().path(),
                locale = %locale,
                location = %location,
                "Redirecting to locale-prefixed path"
            );
            redirect_to(&location, state.permanent)
        }
    }
}
