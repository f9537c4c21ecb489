//! TTL cache store
//!
//! A pure TTL cache: no capacity bound and no LRU eviction. The key spaces
//! it serves (a few dozen module ids, one combined-context blob) are small
//! and enumerable, so unbounded growth is an accepted tradeoff. Expiry is
//! lazy: `get` treats a stale entry as absent but leaves it in place for a
//! later `insert` to overwrite.

use crate::cache::entry::CacheEntry;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// Statistics for cache performance monitoring
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Total number of cache hits
    pub hits: u64,

    /// Total number of cache misses (absent or expired)
    pub misses: u64,

    /// Misses caused specifically by TTL expiry
    pub expired: u64,

    /// Number of entries currently stored (including stale ones)
    pub entries: usize,
}

impl CacheStats {
    /// Cache hit rate as a percentage
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Thread-safe TTL cache keyed by an arbitrary hashable key.
///
/// Two independent instances exist in this crate (learner-context cache and
/// per-module content cache) with distinct TTLs and key domains; they are
/// never shared. Concurrent `get`+`insert` on the same expired key may both
/// recompute and both write; last write wins, which is acceptable because
/// cached values are pure functions of the key.
pub struct TtlCache<K, V> {
    ttl: Duration,
    store: Arc<RwLock<CacheStore<K, V>>>,
}

struct CacheStore<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    stats: CacheStats,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug + Send + Sync,
    V: Clone + Send + Sync,
{
    /// Create a cache whose entries live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            store: Arc::new(RwLock::new(CacheStore {
                entries: HashMap::new(),
                stats: CacheStats::default(),
            })),
        }
    }

    /// The TTL this cache applies to every entry
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get a value if present and within TTL.
    ///
    /// A stale entry is reported as absent but not removed; the next
    /// `insert` for the key overwrites it.
    pub async fn get(&self, key: &K) -> Option<V> {
        let mut store = self.store.write().await;

        match store.entries.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                let value = entry.value.clone();
                store.stats.hits += 1;
                debug!("cache hit: {:?}", key);
                Some(value)
            }
            Some(_) => {
                store.stats.misses += 1;
                store.stats.expired += 1;
                debug!("cache entry expired: {:?}", key);
                None
            }
            None => {
                store.stats.misses += 1;
                debug!("cache miss: {:?}", key);
                None
            }
        }
    }

    /// Insert a value, replacing any previous entry for the key.
    ///
    /// Callers must not insert "not found" sentinels; only successfully
    /// resolved content belongs here, so a transient failure never pins a
    /// negative result for the TTL window.
    pub async fn insert(&self, key: K, value: V) {
        let mut store = self.store.write().await;
        debug!("cache insert: {:?}", key);
        store.entries.insert(key, CacheEntry::new(value));
        store.stats.entries = store.entries.len();
    }

    /// Insert with an explicit storage timestamp. Test hook for TTL expiry
    /// scenarios that must not sleep.
    pub async fn insert_stored_at(&self, key: K, value: V, stored_at: chrono::DateTime<chrono::Utc>) {
        let mut store = self.store.write().await;
        store.entries.insert(key, CacheEntry::stored_at(value, stored_at));
        store.stats.entries = store.entries.len();
    }

    /// Remove all entries. Used for test isolation and manual invalidation;
    /// no ordering guarantee relative to concurrent `get`/`insert`.
    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        let count = store.entries.len();
        store.entries.clear();
        store.stats.entries = 0;
        debug!("cleared {} cache entries", count);
    }

    /// Number of stored entries, stale ones included
    pub async fn len(&self) -> usize {
        self.store.read().await.entries.len()
    }

    /// Check if the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.entries.is_empty()
    }

    /// Snapshot of hit/miss counters
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats.clone()
    }
}
