//! Statcast data source: MLB Stats API for player lookup, Baseball Savant
//! search CSV for pitch-by-pitch rows.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use super::PitchDataSource;
use crate::config::SourceConfig;
use crate::domain::{PitchRecord, PlayerId, PlayerName};
use crate::error::{PitchError, Result};

#[derive(Debug, Deserialize)]
struct PeopleSearchResponse {
    #[serde(default)]
    people: Vec<PersonEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonEntry {
    id: u32,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    use_name: Option<String>,
}

impl PersonEntry {
    fn matches(&self, name: &PlayerName) -> bool {
        let first_matches = self.first_name.eq_ignore_ascii_case(&name.first)
            || self
                .use_name
                .as_deref()
                .is_some_and(|n| n.eq_ignore_ascii_case(&name.first));
        first_matches && self.last_name.eq_ignore_ascii_case(&name.last)
    }
}

#[derive(Clone)]
pub struct SavantClient {
    http: Client,
    savant_url: String,
    people_url: String,
}

impl SavantClient {
    pub fn new(savant_url: &str, people_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent("pitchcast/0.1")
            .timeout(timeout)
            .build()
            .map_err(|e| PitchError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            savant_url: savant_url.trim_end_matches('/').to_string(),
            people_url: people_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Self::new(
            &config.savant_url,
            &config.people_url,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Parse a Statcast search CSV export and order rows by occurrence
    pub fn parse_statcast_csv(body: &str) -> Result<Vec<PitchRecord>> {
        let body = body.trim_start_matches('\u{feff}');
        if body.trim_start().starts_with('<') {
            return Err(PitchError::Upstream(
                "Statcast search returned HTML instead of CSV".to_string(),
            ));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(body.as_bytes());

        let mut pitches = Vec::new();
        for row in reader.deserialize::<PitchRecord>() {
            pitches.push(row?);
        }

        pitches.sort_by(|a, b| a.sequence_key().cmp(&b.sequence_key()));
        Ok(pitches)
    }

    fn pick_player(response: PeopleSearchResponse, name: &PlayerName) -> Result<PlayerId> {
        response
            .people
            .iter()
            .find(|person| person.matches(name))
            .map(|person| PlayerId(person.id))
            .ok_or_else(|| PitchError::PlayerNotFound {
                first: name.first.clone(),
                last: name.last.clone(),
            })
    }
}

#[async_trait]
impl PitchDataSource for SavantClient {
    async fn resolve_player_id(&self, name: &PlayerName) -> Result<PlayerId> {
        let url = format!("{}/api/v1/people/search", self.people_url);
        let full_name = name.to_string();
        debug!(player = %full_name, "looking up player id");

        let response = self
            .http
            .get(&url)
            .query(&[("names", full_name.as_str()), ("sportIds", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PitchError::Upstream(format!(
                "player lookup returned {status}"
            )));
        }

        let body: PeopleSearchResponse = response.json().await?;
        let player_id = Self::pick_player(body, name)?;
        info!(player = %full_name, %player_id, "resolved player");
        Ok(player_id)
    }

    async fn fetch_pitches(
        &self,
        player_id: PlayerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PitchRecord>> {
        let url = format!("{}/statcast_search/csv", self.savant_url);
        let player = player_id.to_string();
        let start = start.to_string();
        let end = end.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("all", "true"),
                ("type", "details"),
                ("player_type", "pitcher"),
                ("hfGT", "R|PO|S|"),
                ("game_date_gt", start.as_str()),
                ("game_date_lt", end.as_str()),
                ("pitchers_lookup[]", player.as_str()),
                ("min_pitches", "0"),
                ("min_results", "0"),
                ("min_abs", "0"),
                ("group_by", "name"),
                ("sort_col", "pitches"),
                ("sort_order", "desc"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PitchError::Upstream(format!(
                "Statcast search returned {status}"
            )));
        }

        let body = response.text().await?;
        let pitches = Self::parse_statcast_csv(&body)?;
        info!(
            %player_id,
            %start,
            %end,
            rows = pitches.len(),
            "Finished fetching pitch data"
        );
        Ok(pitches)
    }
}
