//! Request orchestration: player lookup, pitch retrieval, prediction and scoring.

use chrono::NaiveDate;
use serde::Serialize;
use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::adapters::{cache_key, MemoryCache, PitchDataSource, ResponseCache, SavantClient};
use crate::config::AppConfig;
use crate::domain::{AnalyzedPitch, PitchCategory, PitchMap, PitchRecord, PlayerId, PlayerName};
use crate::error::{PitchError, Result};
use crate::predict::{correctness, AccuracySummary, NaiveBaseline, PitchPredictor, TrigramPredictor};

/// Settings the analysis service needs from configuration
#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub season_start: NaiveDate,
    pub season_end: NaiveDate,
    pub default_category: PitchCategory,
    pub cache_ttl: Duration,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        let season = crate::config::SeasonConfig::default();
        Self {
            season_start: season.start_date,
            season_end: season.end_date,
            default_category: PitchCategory::Fast,
            cache_ttl: Duration::from_secs(86_400),
        }
    }
}

impl AnalysisSettings {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let default_category = config
            .prediction
            .default_category()
            .map_err(|e| PitchError::Config(config::ConfigError::Message(e)))?;

        Ok(Self {
            season_start: config.season.start_date,
            season_end: config.season.end_date,
            default_category,
            cache_ttl: Duration::from_secs(config.cache.ttl_secs),
        })
    }
}

/// Distinct game dates for a player over the season range
#[derive(Debug, Clone, Serialize)]
pub struct PlayerGames {
    pub selected_player: String,
    pub game_dates: Vec<NaiveDate>,
}

/// One game's pitches with predictions and accuracy figures
#[derive(Debug, Clone, Serialize)]
pub struct GameAnalysis {
    pub game_stats: Vec<AnalyzedPitch>,
    #[serde(flatten)]
    pub accuracy: AccuracySummary,
}

pub struct PitchAnalysisService {
    source: Arc<dyn PitchDataSource>,
    cache: Option<Arc<dyn ResponseCache>>,
    pitch_map: PitchMap,
    settings: AnalysisSettings,
}

impl PitchAnalysisService {
    pub fn new(
        source: Arc<dyn PitchDataSource>,
        pitch_map: PitchMap,
        settings: AnalysisSettings,
    ) -> Self {
        Self {
            source,
            cache: None,
            pitch_map,
            settings,
        }
    }

    /// Wire the Statcast client, pitch table and optional cache from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let settings = AnalysisSettings::from_config(config)?;
        let source = Arc::new(SavantClient::from_config(&config.source)?);

        let pitch_map = match &config.prediction.pitch_map_path {
            Some(path) => {
                let map = PitchMap::from_json_file(path)?;
                info!(path = %path.display(), codes = map.len(), "loaded pitch map");
                map
            }
            None => PitchMap::default(),
        };

        let service = Self::new(source, pitch_map, settings);
        if config.cache.enabled {
            Ok(service.with_cache(Arc::new(MemoryCache::new())))
        } else {
            Ok(service)
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn ResponseCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    pub async fn resolve_player(&self, name: &PlayerName) -> Result<PlayerId> {
        self.source.resolve_player_id(name).await
    }

    /// Season pitches, read through the cache when one is configured
    async fn season_pitches(&self, player_id: PlayerId) -> Result<Vec<PitchRecord>> {
        let (start, end) = (self.settings.season_start, self.settings.season_end);

        let Some(cache) = &self.cache else {
            return self.source.fetch_pitches(player_id, start, end).await;
        };

        let key = cache_key(player_id, start, end);
        if let Some(cached) = cache.get(&key).await? {
            debug!(%key, "cache hit");
            return serde_json::from_str(&cached).map_err(|e| {
                warn!(%key, error = %e, "cached pitch data is corrupt");
                PitchError::Cache(format!("corrupt entry {key}: {e}"))
            });
        }

        debug!(%key, "cache miss");
        let pitches = self.source.fetch_pitches(player_id, start, end).await?;
        cache
            .set(&key, serde_json::to_string(&pitches)?, self.settings.cache_ttl)
            .await?;
        Ok(pitches)
    }

    /// Distinct game dates for the player, in order of first appearance
    pub async fn season_game_dates(&self, display_name: &str) -> Result<PlayerGames> {
        let name = PlayerName::parse(display_name)?;
        let player_id = self.resolve_player(&name).await?;
        let pitches = self.season_pitches(player_id).await?;

        if pitches.is_empty() {
            return Err(PitchError::NoPitchData {
                player_id: player_id.0,
                start: self.settings.season_start,
                end: self.settings.season_end,
            });
        }

        let mut game_dates: Vec<NaiveDate> = Vec::new();
        for pitch in &pitches {
            if !game_dates.contains(&pitch.game_date) {
                game_dates.push(pitch.game_date);
            }
        }

        info!(
            player = %name,
            %player_id,
            pitches = pitches.len(),
            games = game_dates.len(),
            "listed season games"
        );

        Ok(PlayerGames {
            selected_player: display_name.to_string(),
            game_dates,
        })
    }

    /// Predict every pitch of one game and score both predictors
    pub async fn game_analysis(&self, display_name: &str, game_date: &str) -> Result<GameAnalysis> {
        let name = PlayerName::parse(display_name)?;
        let date = NaiveDate::parse_from_str(game_date.trim(), "%Y-%m-%d").map_err(|_| {
            PitchError::InvalidRequest(format!("game_date '{game_date}' is not YYYY-MM-DD"))
        })?;

        let player_id = self.resolve_player(&name).await?;
        let pitches = self.source.fetch_pitches(player_id, date, date).await?;
        if pitches.is_empty() {
            return Err(PitchError::NoPitchData {
                player_id: player_id.0,
                start: date,
                end: date,
            });
        }

        let analysis = self.analyze(pitches)?;
        info!(
            player = %name,
            %date,
            pitches = analysis.game_stats.len(),
            model_accuracy = analysis.accuracy.model_accuracy,
            naive_accuracy = analysis.accuracy.naive_accuracy,
            "analyzed game"
        );
        Ok(analysis)
    }

    /// Normalize, predict with a fresh model and the baseline, and score.
    ///
    /// Each `game_pk` gets its own model, so the second game of a doubleheader
    /// does not learn from the first. The accuracy figures cover every pitch.
    pub fn analyze(&self, pitches: Vec<PitchRecord>) -> Result<GameAnalysis> {
        let actual: Vec<PitchCategory> = pitches
            .iter()
            .map(|p| self.pitch_map.normalize(&p.pitch_type))
            .collect();

        let unmapped = actual.iter().filter(|c| c.is_unmapped()).count();
        if unmapped > 0 {
            debug!(unmapped, "pitch codes without a category passed through");
        }

        let mut model_predictions = Vec::with_capacity(actual.len());
        let mut naive_predictions = Vec::with_capacity(actual.len());
        let games = game_spans(&pitches);
        for span in &games {
            let mut model = TrigramPredictor::new(self.settings.default_category.clone());
            let mut naive = NaiveBaseline::new(self.settings.default_category.clone());
            model_predictions.extend(model.predict_sequence(&actual[span.clone()]));
            naive_predictions.extend(naive.predict_sequence(&actual[span.clone()]));
            debug!(
                model = model.name(),
                baseline = naive.name(),
                pitches = span.len(),
                "predicted game"
            );
        }
        if games.len() > 1 {
            info!(games = games.len(), "date covers more than one game");
        }

        let accuracy = AccuracySummary::evaluate(&actual, &model_predictions, &naive_predictions)?;
        let model_correct = correctness(&model_predictions, &actual)?;
        let naive_correct = correctness(&naive_predictions, &actual)?;

        let game_stats = pitches
            .into_iter()
            .zip(actual)
            .zip(model_predictions.into_iter().zip(model_correct))
            .zip(naive_predictions.into_iter().zip(naive_correct))
            .map(
                |(((record, simplified), (predicted, is_correct)), (naive, is_naive_correct))| {
                    AnalyzedPitch {
                        record,
                        pitch_type_simplified: simplified,
                        pitch_type_predicted: predicted,
                        is_correct,
                        pitch_type_naive: naive,
                        is_naive_correct,
                    }
                },
            )
            .collect();

        Ok(GameAnalysis {
            game_stats,
            accuracy,
        })
    }
}

/// Index ranges of consecutive pitches that share a `game_pk`
fn game_spans(pitches: &[PitchRecord]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;
    for i in 1..=pitches.len() {
        if i == pitches.len() || pitches[i].game_pk != pitches[start].game_pk {
            spans.push(start..i);
            start = i;
        }
    }
    spans
}
