use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PitchError, Result};

/// MLBAM player identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structured first/last name used for player lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName {
    pub first: String,
    pub last: String,
}

impl PlayerName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// Split a display name into first and last name.
    ///
    /// The first whitespace-separated token is the first name and everything
    /// after it is the last name, so "Jacob de Grom" resolves as first "Jacob",
    /// last "de Grom". Names whose first name has several words are not
    /// representable through this path; use [`PlayerName::new`] instead.
    pub fn parse(display: &str) -> Result<Self> {
        let trimmed = display.trim();
        let Some((first, rest)) = trimmed.split_once(char::is_whitespace) else {
            return Err(PitchError::InvalidRequest(format!(
                "player name '{trimmed}' must contain a first and last name"
            )));
        };

        let last = rest.trim();
        if first.is_empty() || last.is_empty() {
            return Err(PitchError::InvalidRequest(format!(
                "player name '{trimmed}' must contain a first and last name"
            )));
        }

        Ok(Self::new(first, last))
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}
