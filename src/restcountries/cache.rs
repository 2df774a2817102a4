// SPDX-License-Identifier: MPL-2.0
//! On-disk cache of the `/all` statistics response.
//!
//! The statistics change rarely, so the map reuses a recent copy instead of
//! downloading the full country list on every launch. A stale copy still
//! serves as a fallback when the network is unavailable.

use super::client::RestCountriesClient;
use super::model::CountrySummary;
use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Cache file name within the app data directory.
pub const STATS_CACHE_FILE: &str = "country-stats.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedStats {
    pub fetched_at: DateTime<Utc>,
    pub countries: Vec<CountrySummary>,
}

impl CachedStats {
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.fetched_at) < ttl
    }
}

#[derive(Debug, Clone)]
pub struct StatsCache {
    path: PathBuf,
    ttl: Duration,
}

impl StatsCache {
    pub fn new(path: PathBuf, ttl: Duration) -> Self {
        Self { path, ttl }
    }

    /// Cache located in `data_dir` with a TTL in hours.
    pub fn in_dir(data_dir: &Path, ttl_hours: u32) -> Self {
        Self::new(
            data_dir.join(STATS_CACHE_FILE),
            Duration::hours(i64::from(ttl_hours)),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the cached response. Unreadable or corrupt files count as absent.
    pub fn read(&self) -> Option<CachedStats> {
        let text = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&text) {
            Ok(cached) => Some(cached),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring corrupt statistics cache");
                None
            }
        }
    }

    pub fn write(&self, countries: &[CountrySummary], fetched_at: DateTime<Utc>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let cached = CachedStats {
            fetched_at,
            countries: countries.to_vec(),
        };
        fs::write(&self.path, serde_json::to_vec(&cached)?)?;
        Ok(())
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Returns country statistics, preferring a fresh cache over the network and
/// a stale cache over a failed request.
pub async fn load_statistics(
    client: &RestCountriesClient,
    cache: Option<&StatsCache>,
) -> Result<Vec<CountrySummary>> {
    let now = Utc::now();
    let cached = cache.and_then(StatsCache::read);

    if let (Some(cache), Some(cached)) = (cache, cached.as_ref()) {
        if cached.is_fresh(now, cache.ttl()) {
            tracing::debug!(count = cached.countries.len(), "using cached country statistics");
            return Ok(cached.countries.clone());
        }
    }

    match client.fetch_all().await {
        Ok(countries) => {
            if let Some(cache) = cache {
                if let Err(err) = cache.write(&countries, now) {
                    tracing::warn!(%err, "failed to write statistics cache");
                }
            }
            Ok(countries)
        }
        Err(err) => match cached {
            Some(stale) => {
                tracing::warn!(%err, "statistics request failed, using stale cache");
                Ok(stale.countries)
            }
            None => Err(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restcountries::model::CountryName;
    use tempfile::tempdir;

    fn summary(name: &str) -> CountrySummary {
        CountrySummary {
            name: CountryName {
                common: name.to_string(),
                official: String::new(),
            },
            population: Some(42),
            ..CountrySummary::default()
        }
    }

    #[test]
    fn write_then_read_returns_same_countries() {
        let dir = tempdir().expect("temp dir");
        let cache = StatsCache::in_dir(&dir.path().join("nested"), 24);
        let now = Utc::now();

        cache.write(&[summary("Peru")], now).expect("write cache");
        let cached = cache.read().expect("cache present");

        assert_eq!(cached.countries, vec![summary("Peru")]);
        assert!(cached.is_fresh(now, cache.ttl()));
    }

    #[test]
    fn freshness_expires_after_ttl() {
        let fetched_at = Utc::now();
        let cached = CachedStats {
            fetched_at,
            countries: Vec::new(),
        };
        let ttl = Duration::hours(24);
        assert!(cached.is_fresh(fetched_at + Duration::hours(23), ttl));
        assert!(!cached.is_fresh(fetched_at + Duration::hours(25), ttl));
    }

    #[test]
    fn corrupt_cache_reads_as_absent() {
        let dir = tempdir().expect("temp dir");
        let cache = StatsCache::in_dir(dir.path(), 24);
        fs::write(cache.path(), "{ not json").expect("write");
        assert!(cache.read().is_none());
    }

    #[test]
    fn missing_cache_reads_as_absent() {
        let dir = tempdir().expect("temp dir");
        assert!(StatsCache::in_dir(dir.path(), 1).read().is_none());
    }
}
