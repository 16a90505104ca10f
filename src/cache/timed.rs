//! Timed in-memory cache for API responses
//!
//! Provides a `TimedCache` that stores cloneable values under string keys
//! with expiry timestamps. Each cache instance carries one fixed TTL, chosen
//! at construction to match the volatility of the data it holds.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A stored value together with its expiry bookkeeping
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    /// The cached value
    value: T,
    /// When the value was cached
    cached_at: DateTime<Utc>,
    /// When the entry stops being served
    expires_at: DateTime<Utc>,
}

/// Result of a cache read, including when the value was stored
///
/// The `cached_at` timestamp is surfaced to API clients so they can tell how
/// old a cached payload is.
#[derive(Debug, Clone)]
pub struct CachedValue<T> {
    /// The cached value
    pub data: T,
    /// When the value was originally stored
    pub cached_at: DateTime<Utc>,
}

/// In-memory cache with a fixed TTL per instance
///
/// Values are cloned on insert and on read, so callers can never mutate a
/// cached value in place; updating a cached value means inserting it again,
/// which also restarts its TTL window.
#[derive(Debug)]
pub struct TimedCache<T> {
    /// How long entries stay fresh
    ttl: Duration,
    /// Backing store, shared across request handlers
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
}

impl<T: Clone> TimedCache<T> {
    /// Creates a cache whose entries expire after `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a cache with a TTL given in whole minutes
    pub fn minutes(minutes: i64) -> Self {
        Self::new(Duration::minutes(minutes))
    }

    /// Stores `value` under `key`, stamping the current time
    ///
    /// Overwrites any previous entry for the key and restarts its TTL.
    pub async fn insert(&self, key: impl Into<String>, value: T) {
        let now = Utc::now();
        let entry = CacheEntry {
            value,
            cached_at: now,
            expires_at: now + self.ttl,
        };
        self.entries.write().await.insert(key.into(), entry);
    }

    /// Reads the value stored under `key`
    ///
    /// Returns `None` if the key is missing or the entry has expired.
    /// Expired entries are removed as they are encountered.
    pub async fn get(&self, key: &str) -> Option<CachedValue<T>> {
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if entry.expires_at > Utc::now() => Some(CachedValue {
                data: entry.value.clone(),
                cached_at: entry.cached_at,
            }),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Removes the entry stored under `key`, if any
    #[allow(dead_code)]
    pub async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;

    #[tokio::test]
    async fn test_get_returns_none_for_missing_key() {
        let cache: TimedCache<String> = TimedCache::minutes(5);

        assert!(cache.get("nonexistent_key").await.is_none());
    }

    #[tokio::test]
    async fn test_get_returns_fresh_value() {
        let cache = TimedCache::minutes(5);
        cache.insert("fresh_key", 42u32).await;

        let result = cache.get("fresh_key").await.expect("Should read fresh entry");

        assert_eq!(result.data, 42);
    }

    #[tokio::test]
    async fn test_get_evicts_expired_entry() {
        // Zero TTL expires immediately
        let cache = TimedCache::new(Duration::zero());
        cache.insert("expired_key", "value".to_string()).await;

        // Small delay to ensure expiry
        tokio::time::sleep(StdDuration::from_millis(10)).await;

        assert!(cache.get("expired_key").await.is_none());
        // A second read still misses; the entry is gone, not just hidden
        assert!(cache.get("expired_key").await.is_none());
    }

    #[tokio::test]
    async fn test_insert_overwrites_existing_entry() {
        let cache = TimedCache::minutes(5);
        cache.insert("overwrite_key", 1u32).await;
        cache.insert("overwrite_key", 2u32).await;

        let result = cache.get("overwrite_key").await.expect("Should read entry");

        assert_eq!(result.data, 2, "Cache should contain latest value");
    }

    #[tokio::test]
    async fn test_cached_at_timestamp_is_recorded() {
        let cache = TimedCache::minutes(5);

        let before = Utc::now();
        cache.insert("timestamp_key", 7u32).await;
        let after = Utc::now();

        let result = cache.get("timestamp_key").await.expect("Should read entry");

        assert!(result.cached_at >= before, "cached_at should be after insert started");
        assert!(result.cached_at <= after, "cached_at should be before insert finished");
    }

    #[tokio::test]
    async fn test_reinsert_refreshes_cached_at() {
        let cache = TimedCache::minutes(5);
        cache.insert("refresh_key", 1u32).await;
        let first = cache.get("refresh_key").await.expect("Should read entry");

        tokio::time::sleep(StdDuration::from_millis(10)).await;
        cache.insert("refresh_key", 1u32).await;
        let second = cache.get("refresh_key").await.expect("Should read entry");

        assert!(
            second.cached_at > first.cached_at,
            "Re-inserting should restart the entry's window"
        );
    }

    #[tokio::test]
    async fn test_remove_deletes_entry() {
        let cache = TimedCache::minutes(5);
        cache.insert("remove_key", 1u32).await;

        cache.remove("remove_key").await;

        assert!(cache.get("remove_key").await.is_none());
    }

    #[tokio::test]
    async fn test_values_are_cloned_not_shared() {
        let cache = TimedCache::minutes(5);
        cache.insert("clone_key", vec![1, 2, 3]).await;

        let mut first = cache.get("clone_key").await.expect("Should read entry");
        first.data.push(4);

        let second = cache.get("clone_key").await.expect("Should read entry");
        assert_eq!(second.data, vec![1, 2, 3], "Mutating a read value must not affect the cache");
    }
}
