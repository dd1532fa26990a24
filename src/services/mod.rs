pub mod analysis;
pub mod health;

pub use analysis::{AnalysisSettings, GameAnalysis, PitchAnalysisService, PlayerGames};
pub use health::{ComponentHealth, HealthResponse, HealthState, HealthStatus};
