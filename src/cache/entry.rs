//! Cache entry with TTL support

use chrono::{DateTime, Utc};
use std::time::Duration;

/// A cached value together with the instant it was stored.
///
/// An entry is valid iff `now - stored_at < ttl`. The TTL itself lives on the
/// owning cache, not the entry, so every entry in one cache instance ages
/// against the same window.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value
    pub value: V,

    /// When the value was stored
    pub stored_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    /// Create a new entry timestamped now
    pub fn new(value: V) -> Self {
        Self {
            value,
            stored_at: Utc::now(),
        }
    }

    /// Create an entry with an explicit storage time (used by expiry tests)
    pub fn stored_at(value: V, stored_at: DateTime<Utc>) -> Self {
        Self { value, stored_at }
    }

    /// Check whether the entry has outlived the given TTL
    pub fn is_expired(&self, ttl: Duration) -> bool {
        let age = Utc::now() - self.stored_at;
        match age.to_std() {
            Ok(age) => age >= ttl,
            // Clock skew put stored_at in the future; treat as fresh
            Err(_) => false,
        }
    }

    /// Get the age of the entry
    pub fn age(&self) -> Duration {
        (Utc::now() - self.stored_at)
            .to_std()
            .unwrap_or(Duration::from_secs(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_entry_not_expired() {
        let entry = CacheEntry::new("value".to_string());
        assert!(!entry.is_expired(Duration::from_secs(300)));
    }

    #[test]
    fn test_old_entry_expired() {
        let stored = Utc::now() - chrono::Duration::seconds(301);
        let entry = CacheEntry::stored_at("value".to_string(), stored);
        assert!(entry.is_expired(Duration::from_secs(300)));
    }

    #[test]
    fn test_entry_within_ttl() {
        let stored = Utc::now() - chrono::Duration::seconds(299);
        let entry = CacheEntry::stored_at("value".to_string(), stored);
        assert!(!entry.is_expired(Duration::from_secs(300)));
    }

    #[test]
    fn test_future_timestamp_treated_as_fresh() {
        let stored = Utc::now() + chrono::Duration::seconds(60);
        let entry = CacheEntry::stored_at("value".to_string(), stored);
        assert!(!entry.is_expired(Duration::from_secs(300)));
    }

    #[test]
    fn test_age() {
        let stored = Utc::now() - chrono::Duration::seconds(10);
        let entry = CacheEntry::stored_at((), stored);
        assert!(entry.age() >= Duration::from_secs(10));
    }
}
