//! Liveness information for process supervision

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health status for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Component health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Overall service health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub cache_enabled: bool,
    pub components: Vec<ComponentHealth>,
}

/// Shared state for the health endpoint
#[derive(Debug)]
pub struct HealthState {
    /// When the server started
    pub started_at: DateTime<Utc>,
    /// Whether season data is cached
    pub cache_enabled: bool,
}

impl HealthState {
    pub fn new(cache_enabled: bool) -> Self {
        Self {
            started_at: Utc::now(),
            cache_enabled,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }

    pub fn get_health(&self) -> HealthResponse {
        let cache = ComponentHealth {
            name: "cache".to_string(),
            status: HealthStatus::Healthy,
            message: if self.cache_enabled {
                None
            } else {
                Some("Disabled".to_string())
            },
        };

        HealthResponse {
            status: HealthStatus::Healthy,
            timestamp: Utc::now(),
            uptime_seconds: self.uptime_seconds(),
            cache_enabled: self.cache_enabled,
            components: vec![cache],
        }
    }
}
