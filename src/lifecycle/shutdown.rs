//! Graceful stop for the gateway.
//!
//! `main` hands one receiver to [`HttpServer::run`](crate::http::HttpServer::run)
//! and a clone of the handle to the signal task. When the signal task calls
//! [`Shutdown::trigger`], the server stops accepting connections and drains the
//! requests it is already forwarding.

use tokio::sync::broadcast;

/// Cloneable handle that tells the server to stop.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver for `HttpServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to stop. Returns how many were notified.
    pub fn trigger(&self) -> usize {
        match self.tx.send(()) {
            Ok(notified) => {
                tracing::info!(servers = notified, "Shutdown requested");
                notified
            }
            // Nothing is serving; the process can exit directly.
            Err(_) => 0,
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
