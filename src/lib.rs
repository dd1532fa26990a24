pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod predict;
pub mod services;

pub use adapters::{MemoryCache, PitchDataSource, ResponseCache, SavantClient};
pub use api::{create_router, ApiServer, AppState};
pub use config::AppConfig;
pub use domain::{AnalyzedPitch, PitchCategory, PitchMap, PitchRecord, PlayerId, PlayerName};
pub use error::{PitchError, Result};
pub use predict::{
    AccuracySummary, NaiveBaseline, PitchPredictor, SequencePredictor, TrigramPredictor,
};
pub use services::{GameAnalysis, PitchAnalysisService, PlayerGames};
