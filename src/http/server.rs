//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the upstream handler
//! - Wire up middleware (locale, timeout, request ID, tracing)
//! - Bind server to listener
//! - Serve until the shutdown signal fires

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware,
    response::Response,
    Router,
};
use axum::http::uri::InvalidUri;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::validation::{join_errors, validate_config, ValidationError};
use crate::config::GatewayConfig;
use crate::http::middleware::{locale_middleware, LocaleState};
use crate::http::request::MakeRequestUuid;
use crate::http::upstream::UpstreamForwarder;
use crate::locale::RegistryError;

/// Errors raised while building or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {}", join_errors(.0))]
    Config(Vec<ValidationError>),

    #[error("invalid locale registry: {0}")]
    Registry(#[from] RegistryError),

    #[error("invalid upstream address: {0}")]
    Upstream(#[from] InvalidUri),

    #[error("server IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamForwarder>,
}

/// HTTP server for the locale gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Configs that were not read through `load_config` are validated here too.
    pub fn new(config: GatewayConfig) -> Result<Self, ServerError> {
        validate_config(&config).map_err(ServerError::Config)?;
        let registry = Arc::new(config.locales.registry()?);
        let upstream = Arc::new(UpstreamForwarder::new(&config.upstream.address)?);

        tracing::info!(
            locales = ?registry.supported(),
            default = %registry.default_locale(),
            upstream = %upstream.authority(),
            "Locale routing initialized"
        );

        let locale_state = LocaleState::new(registry, &config);
        let state = AppState { upstream };

        let router = Self::build_router(&config, locale_state, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, locale_state: LocaleState, state: AppState) -> Router {
        // Outermost first: the request ID exists before the trace span opens.
        let stack = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        Router::new()
            .fallback(upstream_handler)
            .with_state(state)
            .layer(middleware::from_fn_with_state(locale_state, locale_middleware))
            .layer(stack)
    }

    /// The fully layered router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Hands every request that survives locale routing to the upstream application.
async fn upstream_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    state.upstream.forward(request).await
}
