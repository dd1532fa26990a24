use std::net::SocketAddr;
use tracing::info;

use crate::api::{create_router, state::AppState};
use crate::error::{PitchError, Result};

/// HTTP server for the prediction API
pub struct ApiServer {
    state: AppState,
    addr: SocketAddr,
}

impl ApiServer {
    pub fn new(state: AppState, addr: SocketAddr) -> Self {
        Self { state, addr }
    }

    /// Serve until Ctrl-C or `GET /stopServer`
    pub async fn run(self) -> Result<()> {
        let shutdown = self.state.shutdown.clone();
        let app = create_router(self.state);

        info!("Starting API server on {}", self.addr);
        let listener = tokio::net::TcpListener::bind(self.addr).await?;

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => info!("Received Ctrl-C"),
                    _ = shutdown.wait() => info!("Received stop request"),
                }
            })
            .await
            .map_err(|e| PitchError::Internal(format!("API server error: {}", e)))?;

        info!("API server stopped");
        Ok(())
    }
}
