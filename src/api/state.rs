use std::sync::Arc;
use tokio::sync::watch;

use crate::services::{HealthState, PitchAnalysisService};

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Prediction pipeline and its collaborators
    pub analysis: Arc<PitchAnalysisService>,

    /// Pitchers listed on the index page
    pub players: Arc<Vec<String>>,

    /// Uptime and component status
    pub health: Arc<HealthState>,

    /// Lets `/stopServer` stop the listener
    pub shutdown: ShutdownHandle,
}

impl AppState {
    pub fn new(analysis: PitchAnalysisService, players: Vec<String>) -> Self {
        let health = HealthState::new(analysis.has_cache());
        Self {
            analysis: Arc::new(analysis),
            players: Arc::new(players),
            health: Arc::new(health),
            shutdown: ShutdownHandle::new(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.health.uptime_seconds()
    }
}

/// One-shot shutdown flag shared between the router and the server loop
#[derive(Clone)]
pub struct ShutdownHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once `trigger` has been called
    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        // the sender lives as long as self, so this only ends on trigger
        let _ = rx.wait_for(|stopped| *stopped).await;
    }
}

impl Default for ShutdownHandle {
    fn default() -> Self {
        Self::new()
    }
}
