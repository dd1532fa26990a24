use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{PitchError, Result};

/// Simplified pitch category
///
/// The set is closed: the three table categories plus `Unmapped`, which keeps a
/// raw code that the lookup table does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PitchCategory {
    Fast,
    Curve,
    Offspeed,
    Unmapped(String),
}

impl PitchCategory {
    /// Parse one of the named categories (case-insensitive)
    pub fn known(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fast" => Some(Self::Fast),
            "curve" => Some(Self::Curve),
            "offspeed" => Some(Self::Offspeed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Fast => "fast",
            Self::Curve => "curve",
            Self::Offspeed => "offspeed",
            Self::Unmapped(raw) => raw,
        }
    }

    pub fn is_unmapped(&self) -> bool {
        matches!(self, Self::Unmapped(_))
    }
}

impl From<&str> for PitchCategory {
    fn from(value: &str) -> Self {
        Self::known(value).unwrap_or_else(|| Self::Unmapped(value.to_string()))
    }
}

impl fmt::Display for PitchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PitchCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PitchCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// Statcast pitch code -> simplified category
const DEFAULT_PITCH_MAP: &[(&str, &str)] = &[
    // Fastballs
    ("FF", "fast"),
    ("FA", "fast"),
    ("FT", "fast"),
    ("SI", "fast"),
    ("FC", "fast"),
    // Breaking balls
    ("CU", "curve"),
    ("KC", "curve"),
    ("CS", "curve"),
    ("SL", "curve"),
    ("ST", "curve"),
    ("SV", "curve"),
    // Off-speed
    ("CH", "offspeed"),
    ("FS", "offspeed"),
    ("FO", "offspeed"),
    ("SC", "offspeed"),
    ("KN", "offspeed"),
    ("EP", "offspeed"),
];

/// Lookup table used to simplify raw pitch codes
#[derive(Debug, Clone)]
pub struct PitchMap {
    entries: HashMap<String, PitchCategory>,
}

impl Default for PitchMap {
    fn default() -> Self {
        Self {
            entries: DEFAULT_PITCH_MAP
                .iter()
                .map(|(code, name)| (code.to_string(), PitchCategory::from(*name)))
                .collect(),
        }
    }
}

impl PitchMap {
    /// Load a `{"FF": "fast", ...}` JSON table. Every value must name a known category.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents).map_err(|e| match e {
            PitchError::Config(inner) => PitchError::Config(config::ConfigError::Message(
                format!("{}: {}", path.display(), inner),
            )),
            other => other,
        })
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(contents)?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (code, name) in raw {
            let category = PitchCategory::known(&name).ok_or_else(|| {
                PitchError::Config(config::ConfigError::Message(format!(
                    "pitch code '{code}' maps to unknown category '{name}'"
                )))
            })?;
            entries.insert(code, category);
        }
        Ok(Self { entries })
    }

    /// Map a raw code to its category. Unknown codes pass through unchanged.
    pub fn normalize(&self, raw: &str) -> PitchCategory {
        self.entries
            .get(raw)
            .cloned()
            .unwrap_or_else(|| PitchCategory::Unmapped(raw.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One pitch as returned by the Statcast search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    /// Raw Statcast pitch code (empty when unclassified)
    #[serde(default)]
    pub pitch_type: String,
    pub game_date: NaiveDate,
    #[serde(default)]
    pub game_pk: Option<u64>,
    #[serde(default)]
    pub at_bat_number: Option<u32>,
    #[serde(default)]
    pub pitch_number: Option<u32>,
    #[serde(default)]
    pub inning: Option<u32>,
    #[serde(default)]
    pub balls: Option<u8>,
    #[serde(default)]
    pub strikes: Option<u8>,
    #[serde(default)]
    pub release_speed: Option<f64>,
    #[serde(default)]
    pub pitch_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub events: Option<String>,
    #[serde(default)]
    pub batter: Option<u64>,
    #[serde(default)]
    pub stand: Option<String>,
}

impl PitchRecord {
    pub fn new(pitch_type: impl Into<String>, game_date: NaiveDate) -> Self {
        Self {
            pitch_type: pitch_type.into(),
            game_date,
            game_pk: None,
            at_bat_number: None,
            pitch_number: None,
            inning: None,
            balls: None,
            strikes: None,
            release_speed: None,
            pitch_name: None,
            description: None,
            events: None,
            batter: None,
            stand: None,
        }
    }

    /// Ordering key for "order of occurrence"
    pub fn sequence_key(&self) -> (NaiveDate, u64, u32, u32) {
        (
            self.game_date,
            self.game_pk.unwrap_or(0),
            self.at_bat_number.unwrap_or(0),
            self.pitch_number.unwrap_or(0),
        )
    }
}

/// A pitch record enriched with both predictions
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedPitch {
    #[serde(flatten)]
    pub record: PitchRecord,
    pub pitch_type_simplified: PitchCategory,
    pub pitch_type_predicted: PitchCategory,
    pub is_correct: bool,
    pub pitch_type_naive: PitchCategory,
    pub is_naive_correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_codes() {
        let map = PitchMap::default();
        assert_eq!(map.normalize("FF"), PitchCategory::Fast);
        assert_eq!(map.normalize("SL"), PitchCategory::Curve);
        assert_eq!(map.normalize("CH"), PitchCategory::Offspeed);
    }

    #[test]
    fn test_unmapped_code_passes_through() {
        let map = PitchMap::default();
        assert_eq!(map.normalize("XX"), PitchCategory::Unmapped("XX".into()));
        assert_eq!(map.normalize("XX").to_string(), "XX");
        assert_eq!(map.normalize(""), PitchCategory::Unmapped(String::new()));
        // lookup is exact, not case-folded
        assert!(map.normalize("ff").is_unmapped());
    }

    #[test]
    fn test_category_serializes_as_plain_string() {
        let json = serde_json::to_string(&vec![
            PitchCategory::Fast,
            PitchCategory::Unmapped("PO".into()),
        ])
        .unwrap();
        assert_eq!(json, r#"["fast","PO"]"#);

        let back: Vec<PitchCategory> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0], PitchCategory::Fast);
        assert_eq!(back[1], PitchCategory::Unmapped("PO".into()));
    }

    #[test]
    fn test_pitch_map_from_json() {
        let map = PitchMap::from_json_str(r#"{"FF": "fast", "KC": "Curve"}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.normalize("KC"), PitchCategory::Curve);
        assert!(map.normalize("CH").is_unmapped());
    }

    #[test]
    fn test_pitch_map_rejects_unknown_category() {
        let err = PitchMap::from_json_str(r#"{"FF": "heater"}"#).unwrap_err();
        assert!(matches!(err, PitchError::Config(_)));
    }

    #[test]
    fn test_analyzed_pitch_flattens_record() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 2).unwrap();
        let pitch = AnalyzedPitch {
            record: PitchRecord::new("FF", date),
            pitch_type_simplified: PitchCategory::Fast,
            pitch_type_predicted: PitchCategory::Fast,
            is_correct: true,
            pitch_type_naive: PitchCategory::Fast,
            is_naive_correct: true,
        };
        let value = serde_json::to_value(&pitch).unwrap();
        assert_eq!(value["pitch_type"], "FF");
        assert_eq!(value["game_date"], "2023-04-02");
        assert_eq!(value["pitch_type_simplified"], "fast");
        assert_eq!(value["is_correct"], true);
    }
}
