//! Response Cache Store
//!
//! Key to serialized-payload map with fixed TTL. Entries expire lazily on
//! read; a background sweep reclaims entries whose keys stop being
//! requested (see `tasks::spawn_sweep_task`).

use std::collections::HashMap;

use crate::cache::{CacheStats, CachedPage};

// == Response Cache ==
/// Process-wide cache of serialized list responses.
///
/// Constructed once and shared through application state behind a lock;
/// there is no global instance.
#[derive(Debug)]
pub struct ResponseCache {
    /// Canonical query key to cached payload
    entries: HashMap<String, CachedPage>,
    /// Performance statistics
    stats: CacheStats,
    /// Fixed TTL in seconds applied to every entry
    ttl_secs: u64,
}

impl ResponseCache {
    // == Constructor ==
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl_secs,
        }
    }

    // == Get ==
    /// Returns the cached payload if the entry exists and is fresh.
    ///
    /// A stale entry counts as a miss and is removed; the caller recomputes
    /// and re-inserts, which is the stale-to-fresh transition.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.stats.record_hit();
                Some(entry.payload.clone())
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Stores a freshly computed payload, replacing any previous entry for
    /// the key and resetting its TTL window.
    pub fn insert(&mut self, key: String, payload: String) {
        let entry = CachedPage::new(payload, self.ttl_secs);
        self.entries.insert(key, entry);
        self.stats.record_recompute();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Sweep Expired ==
    /// Removes all expired entries; returns the number removed.
    pub fn sweep_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.record_swept(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured TTL in seconds.
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}
