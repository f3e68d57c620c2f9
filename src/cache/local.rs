//! Per-node TTL'd local cache tier.
//!
//! Grounded on the teacher's `enterprise/cache/tier.rs` `LruCache`/
//! `CacheEntry`/`TierConfig` shape, rebuilt on `moka::sync::Cache` for the
//! bounded-size eviction policy instead of hand-rolled LRU bookkeeping.
//! moka's TinyLFU-admission cache gives a bounded, recency-biased policy
//! without reimplementing one.

use std::time::{Duration, Instant};

use moka::sync::Cache;

struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

impl<V: Clone> Clone for Entry<V> {
    fn clone(&self) -> Self {
        Entry { value: self.value.clone(), inserted_at: self.inserted_at }
    }
}

/// A single object kind's local tier, keyed by its integer id.
pub struct LocalCacheTier<V: Clone + Send + Sync + 'static> {
    ttl: Duration,
    inner: Cache<i64, Entry<V>>,
}

impl<V: Clone + Send + Sync + 'static> LocalCacheTier<V> {
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        Self {
            ttl,
            inner: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// Returns the value iff present and not expired. Never mutates the map;
    /// an expired hit is simply reported as absent, left for `clean_expired`
    /// to reap later.
    pub fn get(&self, id: i64) -> Option<V> {
        match self.inner.get(&id) {
            Some(entry) if entry.inserted_at.elapsed() <= self.ttl => Some(entry.value),
            _ => None,
        }
    }

    /// Unconditional insert with a fresh timestamp.
    pub fn put(&self, id: i64, value: V) {
        self.inner.insert(id, Entry { value, inserted_at: Instant::now() });
    }

    /// Inserts only if no entry exists, including an expired one; an expired
    /// entry still counts as present for this check. Returns `true` if this
    /// call performed the insert.
    pub fn create_if_absent(&self, id: i64, value: V) -> bool {
        let mut inserted = false;
        self.inner.get_with(id, || {
            inserted = true;
            Entry { value, inserted_at: Instant::now() }
        });
        inserted
    }

    /// Targeted invalidation, used by delete-driven invalidation as a
    /// narrower alternative to wholesale `clean_expired`.
    pub fn invalidate(&self, id: i64) {
        self.inner.invalidate(&id);
    }

    /// Removes every entry older than `ttl`.
    pub fn clean_expired(&self) {
        let ttl = self.ttl;
        self.inner
            .invalidate_entries_if(move |_, entry| entry.inserted_at.elapsed() > ttl)
            .expect("invalidate_entries_if is only rejected when the cache has no eviction listener");
        self.inner.run_pending_tasks();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn put_then_get_within_ttl_returns_value() {
        let tier = LocalCacheTier::new(Duration::from_secs(60), 100);
        tier.put(1, "a".to_string());
        assert_eq!(tier.get(1), Some("a".to_string()));
    }

    #[test]
    fn get_after_ttl_returns_absent() {
        let tier = LocalCacheTier::new(Duration::from_millis(10), 100);
        tier.put(1, "a".to_string());
        sleep(Duration::from_millis(30));
        assert_eq!(tier.get(1), None);
    }

    #[test]
    fn create_if_absent_rejects_second_write() {
        let tier = LocalCacheTier::new(Duration::from_secs(60), 100);
        assert!(tier.create_if_absent(1, "v1".to_string()));
        assert!(!tier.create_if_absent(1, "v2".to_string()));
        assert_eq!(tier.get(1), Some("v1".to_string()));
    }

    #[test]
    fn create_if_absent_treats_expired_entry_as_present() {
        let tier = LocalCacheTier::new(Duration::from_millis(10), 100);
        assert!(tier.create_if_absent(1, "v1".to_string()));
        sleep(Duration::from_millis(30));
        assert!(!tier.create_if_absent(1, "v2".to_string()));
    }

    #[test]
    fn invalidate_removes_single_id() {
        let tier = LocalCacheTier::new(Duration::from_secs(60), 100);
        tier.put(1, "a".to_string());
        tier.put(2, "b".to_string());
        tier.invalidate(1);
        assert_eq!(tier.get(1), None);
        assert_eq!(tier.get(2), Some("b".to_string()));
    }

    #[test]
    fn clean_expired_reaps_stale_entries_only() {
        let tier = LocalCacheTier::new(Duration::from_millis(10), 100);
        tier.put(1, "a".to_string());
        sleep(Duration::from_millis(30));
        tier.put(2, "b".to_string());
        tier.clean_expired();
        assert_eq!(tier.len(), 1);
        assert_eq!(tier.get(2), Some("b".to_string()));
    }
}
