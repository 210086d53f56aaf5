//! HTTP server that binds the API router to a TCP socket.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::error::HttpServerError;
use crate::router::build_router;
use crate::state::AppState;

/// Axum-based HTTP server for the todo API.
pub struct HttpServer {
    listener: TcpListener,
    state: AppState,
}

impl HttpServer {
    /// Binds the listening socket. Port `0` picks a free port.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails.
    pub async fn bind(addr: SocketAddr, state: AppState) -> Result<Self, HttpServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| HttpServerError::Bind {
                addr: addr.to_string(),
                source: e,
            })?;
        Ok(Self { listener, state })
    }

    /// Address the server is actually listening on.
    pub fn local_addr(&self) -> Result<SocketAddr, HttpServerError> {
        self.listener.local_addr().map_err(HttpServerError::LocalAddr)
    }

    /// Serves requests until `shutdown` resolves, then drains in-flight ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the server crashes.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), HttpServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        log::info!("event=http_serve module=http status=start addr={addr}");

        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| HttpServerError::Serve(e.to_string()))?;

        log::info!("event=http_serve module=http status=ok addr={addr}");
        Ok(())
    }
}
