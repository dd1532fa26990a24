pub mod cache;
pub mod savant;

pub use cache::{cache_key, MemoryCache, ResponseCache};
pub use savant::SavantClient;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{PitchRecord, PlayerId, PlayerName};
use crate::error::Result;

/// External source of player identifiers and pitch-by-pitch data
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PitchDataSource: Send + Sync {
    /// Resolve a first/last name pair to a player id
    async fn resolve_player_id(&self, name: &PlayerName) -> Result<PlayerId>;

    /// All pitches thrown by `player_id` between `start` and `end` (inclusive),
    /// ordered by occurrence
    async fn fetch_pitches(
        &self,
        player_id: PlayerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PitchRecord>>;
}
