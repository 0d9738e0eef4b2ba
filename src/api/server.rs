use std::future::Future;
use std::net::SocketAddr;
use tracing::info;

use crate::api::{routes::create_router, state::AppState};
use crate::error::{PropError, Result};

/// HTTP server for the assessment API
pub struct ApiServer {
    state: AppState,
    addr: SocketAddr,
}

impl ApiServer {
    pub fn new(state: AppState, addr: SocketAddr) -> Self {
        Self { state, addr }
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = create_router(self.state);

        info!("Starting API server on {}", self.addr);
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| PropError::Internal(format!("API server error: {}", e)))?;

        info!("API server stopped");
        Ok(())
    }
}
