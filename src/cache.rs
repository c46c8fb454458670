//! TTL key/value cache over a JSON file at `~/.lathe/cache/entries.json`.
//!
//! Single-threaded: all operations are synchronous in-memory map mutations
//! with an explicit save. Expired entries are swept on load whenever the
//! sweep interval has elapsed since the recorded last sweep; a CLI process
//! is short-lived, so this stands in for the host's fixed-interval timer.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::paths;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    value: serde_json::Value,
    expires_at: DateTime<Utc>,
}

/// On-disk shape of the cache store
#[derive(Debug, Serialize, Deserialize)]
struct CacheStore {
    entries: BTreeMap<String, CacheEntry>,
    hits: u64,
    misses: u64,
    last_sweep: DateTime<Utc>,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            hits: 0,
            misses: 0,
            last_sweep: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub last_sweep: DateTime<Utc>,
}

pub struct Cache {
    store: CacheStore,
    store_path: PathBuf,
    ttl: Duration,
    sweep_interval: Duration,
}

impl Cache {
    /// Open the cache, loading the store file and sweeping if the sweep
    /// interval has elapsed.
    pub fn open(config: &Config) -> Result<Self> {
        Self::open_at(config, paths::cache_store_path())
    }

    /// Open a cache backed by an explicit store path (tests use a tempdir)
    pub fn open_at(config: &Config, store_path: PathBuf) -> Result<Self> {
        let store = if store_path.exists() {
            let content = fs::read_to_string(&store_path)
                .with_context(|| format!("Failed to read cache store: {}", store_path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse cache store: {}", store_path.display()))?
        } else {
            CacheStore::default()
        };

        let mut cache = Self {
            store,
            store_path,
            ttl: Duration::seconds(config.cache_ttl_secs),
            sweep_interval: Duration::seconds(config.cache_sweep_interval_secs),
        };

        // A due sweep must reach the store, not just memory; read-only
        // paths like `cache stats` never save otherwise.
        if Utc::now() - cache.store.last_sweep >= cache.sweep_interval {
            cache.sweep();
            cache.save()?;
        }

        Ok(cache)
    }

    /// Look up a key. Expired entries count as misses and are dropped.
    ///
    /// The hit/miss counters move only through this path; the CLI
    /// surface reports them (`lathe cache stats`) but never performs
    /// lookups itself, so they stay at whatever library consumers
    /// persisted.
    pub fn get(&mut self, key: &str) -> Option<serde_json::Value> {
        match self.store.entries.get(key) {
            Some(entry) if entry.expires_at > Utc::now() => {
                self.store.hits += 1;
                Some(entry.value.clone())
            }
            Some(_) => {
                self.store.entries.remove(key);
                self.store.misses += 1;
                None
            }
            None => {
                self.store.misses += 1;
                None
            }
        }
    }

    /// Insert or replace a value, expiring after the configured TTL
    pub fn put(&mut self, key: &str, value: serde_json::Value) {
        self.store.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: Utc::now() + self.ttl,
            },
        );
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.store.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.store.entries.clear();
    }

    /// Purge expired entries and stamp the sweep time. Returns how many
    /// entries were removed.
    pub fn sweep(&mut self) -> usize {
        let now = Utc::now();
        let before = self.store.entries.len();
        self.store.entries.retain(|_, entry| entry.expires_at > now);
        self.store.last_sweep = now;
        before - self.store.entries.len()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.store.entries.len(),
            hits: self.store.hits,
            misses: self.store.misses,
            last_sweep: self.store.last_sweep,
        }
    }

    /// Persist the store to disk
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&self.store_path, serde_json::to_string_pretty(&self.store)?)
            .with_context(|| format!("Failed to write cache store: {}", self.store_path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_cache(dir: &TempDir, config: &Config) -> Cache {
        Cache::open_at(config, dir.path().join("entries.json")).unwrap()
    }

    #[test]
    fn test_put_get_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let mut cache = open_cache(&temp_dir, &Config::default());

        cache.put("key", serde_json::json!({"answer": 42}));
        let value = cache.get("key").unwrap();
        assert_eq!(value["answer"], 42);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_miss_counts() {
        let temp_dir = TempDir::new().unwrap();
        let mut cache = open_cache(&temp_dir, &Config::default());

        assert!(cache.get("absent").is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            cache_ttl_secs: -1, // already expired on insert
            ..Default::default()
        };
        let mut cache = open_cache(&temp_dir, &config);

        cache.put("key", serde_json::json!(1));
        assert!(cache.get("key").is_none());
        assert_eq!(cache.stats().entries, 0);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_sweep_purges_expired_only() {
        let temp_dir = TempDir::new().unwrap();
        let mut cache = open_cache(&temp_dir, &Config::default());

        cache.put("fresh", serde_json::json!(1));
        cache.store.entries.insert(
            "stale".to_string(),
            CacheEntry {
                value: serde_json::json!(2),
                expires_at: Utc::now() - Duration::seconds(10),
            },
        );

        assert_eq!(cache.sweep(), 1);
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn test_due_sweep_on_open_reaches_the_store() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("entries.json");

        let mut entries = BTreeMap::new();
        entries.insert(
            "stale".to_string(),
            CacheEntry {
                value: serde_json::json!(1),
                expires_at: Utc::now() - Duration::seconds(10),
            },
        );
        let seeded = CacheStore {
            entries,
            hits: 0,
            misses: 0,
            last_sweep: Utc::now() - Duration::days(30),
        };
        fs::write(&store_path, serde_json::to_string(&seeded).unwrap()).unwrap();

        let cache = Cache::open_at(&Config::default(), store_path.clone()).unwrap();
        assert_eq!(cache.stats().entries, 0);
        drop(cache);

        let on_disk: CacheStore =
            serde_json::from_str(&fs::read_to_string(&store_path).unwrap()).unwrap();
        assert!(on_disk.entries.is_empty());
        assert!(Utc::now() - on_disk.last_sweep < Duration::seconds(60));
    }

    #[test]
    fn test_persistence_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default();

        let mut cache = open_cache(&temp_dir, &config);
        cache.put("key", serde_json::json!("value"));
        cache.save().unwrap();

        let mut reopened = open_cache(&temp_dir, &config);
        assert_eq!(reopened.get("key").unwrap(), serde_json::json!("value"));
    }
}
