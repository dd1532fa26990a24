use chrono::NaiveDate;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::PitchCategory;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub season: SeasonConfig,
    #[serde(default)]
    pub prediction: PredictionConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Pitchers offered on the index page
    #[serde(default = "default_players")]
    pub players: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port (default: 5001)
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Baseball Savant base URL (Statcast search)
    #[serde(default = "default_savant_url")]
    pub savant_url: String,
    /// MLB Stats API base URL (player lookup)
    #[serde(default = "default_people_url")]
    pub people_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            savant_url: default_savant_url(),
            people_url: default_people_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_savant_url() -> String {
    "https://baseballsavant.mlb.com".to_string()
}

fn default_people_url() -> String {
    "https://statsapi.mlb.com".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// Date range used when listing a pitcher's games
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonConfig {
    #[serde(default = "default_season_start")]
    pub start_date: NaiveDate,
    #[serde(default = "default_season_end")]
    pub end_date: NaiveDate,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            start_date: default_season_start(),
            end_date: default_season_end(),
        }
    }
}

fn default_season_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 4, 1).unwrap_or_default()
}

fn default_season_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 9, 1).unwrap_or_default()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionConfig {
    /// Category predicted when the model has nothing better (also the naive baseline)
    #[serde(default = "default_category")]
    pub default_category: String,
    /// Optional JSON file overriding the built-in pitch code table
    #[serde(default)]
    pub pitch_map_path: Option<PathBuf>,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            pitch_map_path: None,
        }
    }
}

fn default_category() -> String {
    "fast".to_string()
}

impl PredictionConfig {
    pub fn default_category(&self) -> Result<PitchCategory, String> {
        PitchCategory::known(&self.default_category).ok_or_else(|| {
            format!(
                "default_category '{}' is not a known pitch category",
                self.default_category
            )
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Cache season-wide pitch data between requests
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    /// Entry lifetime in seconds (default: 24h)
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_ttl() -> u64 {
    86_400
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Directory for daily rolling log files (disabled when unset)
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_players() -> Vec<String> {
    [
        "Logan Webb",
        "Corbin Burnes",
        "Zac Gallen",
        "Gerrit Cole",
        "Blake Snell",
        "Zack Wheeler",
        "Kodai Senga",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            source: SourceConfig::default(),
            season: SeasonConfig::default(),
            prediction: PredictionConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
            players: default_players(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("cache.ttl_secs", 86_400)?
            .set_default("server.port", 5001)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("PITCHCAST_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (PITCHCAST_SERVER__PORT, etc.)
            .add_source(
                Environment::with_prefix("PITCHCAST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.season.start_date > self.season.end_date {
            errors.push(format!(
                "season.start_date {} is after season.end_date {}",
                self.season.start_date, self.season.end_date
            ));
        }

        if let Err(e) = self.prediction.default_category() {
            errors.push(e);
        }

        if self.cache.enabled && self.cache.ttl_secs == 0 {
            errors.push("cache.ttl_secs must be positive when the cache is enabled".to_string());
        }

        if self.source.timeout_secs == 0 {
            errors.push("source.timeout_secs must be positive".to_string());
        }

        if self.players.is_empty() {
            errors.push("players must list at least one pitcher".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
