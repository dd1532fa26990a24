//! Key-value response cache with per-entry expiry.

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::domain::PlayerId;
use crate::error::Result;

/// Cache key for a player's pitches over a date range
pub fn cache_key(player_id: PlayerId, start: NaiveDate, end: NaiveDate) -> String {
    format!("{player_id}_{start}_{end}")
}

#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()>;
}

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-process cache backed by a `DashMap`
#[derive(Default)]
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included until they are read
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ResponseCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired(now) {
                return Ok(Some(entry.value.clone()));
            }
        }

        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now))
            .is_some()
        {
            debug!(key, "evicted expired cache entry");
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        let expires_at = Instant::now() + ttl;
        self.entries
            .insert(key.to_string(), CacheEntry { value, expires_at });
        Ok(())
    }
}
