//! Hash-map cache with per-key access counters.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use super::types::{CacheLookup, CacheStats, MostAccessed};
use crate::report::{Algorithm, AlgorithmReport, Complexity};

#[derive(Debug, Clone)]
struct Slot<V> {
    value: V,
    access_count: u64,
    inserted: u64,
}

/// In-memory lookup cache that counts successful reads per key.
///
/// All point operations are O(1) amortized. [`stats`](Self::stats) scans
/// every entry and is O(n). There is no eviction and no internal
/// synchronization; wrap it in [`Shared`](crate::sync::Shared) for use
/// across threads.
///
/// # Examples
///
/// ```
/// use u_opskernel::cache::FastLookupCache;
///
/// let mut cache = FastLookupCache::new();
/// cache.set("P-1001".to_string(), "Jane Doe");
///
/// assert_eq!(cache.get("P-1001").data, Some(&"Jane Doe"));
/// assert!(!cache.get("P-9999").found());
/// assert_eq!(cache.access_count("P-1001"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct FastLookupCache<K, V> {
    entries: HashMap<K, Slot<V>>,
    next_insert: u64,
    hits: u64,
    misses: u64,
}

impl<K, V> FastLookupCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty cache with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            next_insert: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Inserts or overwrites `key`. The access counter restarts at 0.
    ///
    /// Returns the previous value, if any.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let slot = Slot {
            value,
            access_count: 0,
            inserted: self.next_insert,
        };
        self.next_insert += 1;

        let previous = self.entries.insert(key, slot).map(|s| s.value);
        tracing::trace!(
            size = self.entries.len(),
            overwrite = previous.is_some(),
            "cache set"
        );
        previous
    }

    /// Looks up `key`, counting the read on a hit. A miss is not an error.
    pub fn get<Q>(&mut self, key: &Q) -> CacheLookup<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.entries.get_mut(key) {
            Some(slot) => {
                slot.access_count += 1;
                self.hits += 1;
                CacheLookup {
                    data: Some(&slot.value),
                }
            }
            None => {
                self.misses += 1;
                CacheLookup { data: None }
            }
        }
    }

    /// Whether `key` is present. Does not count as an access.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Removes `key` and its counter, returning the value if present.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key).map(|s| s.value)
    }

    /// Removes every entry and resets hit/miss counters. O(n).
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
        tracing::debug!(removed, "cache cleared");
    }

    /// Removes every entry matching `predicate`. Returns how many went.
    pub fn invalidate_where(&mut self, mut predicate: impl FnMut(&K, &V) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|k, slot| !predicate(k, &slot.value));
        before - self.entries.len()
    }

    /// Number of stored keys.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Successful reads of `key` since it was last set.
    pub fn access_count<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(|s| s.access_count)
    }

    /// Aggregate statistics. O(n) over stored entries.
    ///
    /// `most_accessed` is `None` when no stored entry has been read; ties
    /// go to the entry set earliest.
    pub fn stats(&self) -> CacheStats<K> {
        let total_entries = self.entries.len();

        let most_accessed = self
            .entries
            .iter()
            .filter(|(_, slot)| slot.access_count > 0)
            .max_by(|(_, a), (_, b)| {
                a.access_count
                    .cmp(&b.access_count)
                    .then(b.inserted.cmp(&a.inserted))
            })
            .map(|(key, slot)| MostAccessed {
                key: key.clone(),
                access_count: slot.access_count,
            });

        let total_accesses: u64 = self.entries.values().map(|s| s.access_count).sum();
        let average_accesses_per_entry = if total_entries == 0 {
            0.0
        } else {
            total_accesses as f64 / total_entries as f64
        };

        let lookups = self.hits + self.misses;
        let hit_ratio = if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        };

        CacheStats {
            total_entries,
            most_accessed,
            average_accesses_per_entry,
            hit_ratio,
            hits: self.hits,
            misses: self.misses,
        }
    }

    /// Complexity of a point operation (`get`/`set`/`has`/`delete`).
    pub fn point_report() -> AlgorithmReport {
        AlgorithmReport::new(Algorithm::HashMapCache, Complexity::Constant)
    }

    /// Complexity of [`stats`](Self::stats) and [`clear`](Self::clear).
    pub fn scan_report() -> AlgorithmReport {
        AlgorithmReport::new(Algorithm::HashMapCache, Complexity::Linear)
    }
}

impl<K, V> Default for FastLookupCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> FastLookupCache<String, u32> {
        let mut c = FastLookupCache::new();
        c.set("a".into(), 1);
        c.set("b".into(), 2);
        c.set("c".into(), 3);
        c
    }

    #[test]
    fn test_get_after_set() {
        let mut c = FastLookupCache::new();
        c.set("k".to_string(), "v");
        let lookup = c.get("k");
        assert!(lookup.found());
        assert_eq!(lookup.data, Some(&"v"));
    }

    #[test]
    fn test_miss_is_not_error() {
        let mut c = cache();
        let lookup = c.get("zzz");
        assert!(!lookup.found());
        assert!(lookup.data.is_none());
    }

    #[test]
    fn test_access_counter_resets_on_overwrite() {
        let mut c = cache();
        c.get("a");
        c.get("a");
        assert_eq!(c.access_count("a"), Some(2));

        assert_eq!(c.set("a".into(), 10), Some(1));
        assert_eq!(c.access_count("a"), Some(0));
        assert_eq!(c.get("a").data, Some(&10));
    }

    #[test]
    fn test_has_does_not_count() {
        let c = cache();
        assert!(c.has("b"));
        assert!(!c.has("x"));
        assert_eq!(c.access_count("b"), Some(0));
    }

    #[test]
    fn test_delete_and_clear() {
        let mut c = cache();
        assert_eq!(c.delete("b"), Some(2));
        assert_eq!(c.delete("b"), None);
        assert_eq!(c.size(), 2);

        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.stats().total_entries, 0);
    }

    #[test]
    fn test_stats() {
        let mut c = cache();
        for _ in 0..3 {
            c.get("b");
        }
        c.get("c");
        c.get("missing");

        let stats = c.stats();
        assert_eq!(stats.total_entries, 3);
        assert_eq!(
            stats.most_accessed,
            Some(MostAccessed {
                key: "b".to_string(),
                access_count: 3
            })
        );
        // (0 + 3 + 1) / 3
        assert!((stats.average_accesses_per_entry - 4.0 / 3.0).abs() < 1e-10);
        // 4 hits of 5 lookups
        assert!((stats.hit_ratio - 0.8).abs() < 1e-10);
        assert_eq!(stats.hits, 4);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_most_accessed_tie_goes_to_earliest() {
        let mut c = cache();
        c.get("c");
        c.get("a");
        let stats = c.stats();
        assert_eq!(stats.most_accessed.map(|m| m.key), Some("a".to_string()));
    }

    #[test]
    fn test_stats_empty_and_unread() {
        let empty: FastLookupCache<String, u32> = FastLookupCache::new();
        let stats = empty.stats();
        assert_eq!(stats.total_entries, 0);
        assert!(stats.most_accessed.is_none());
        assert_eq!(stats.average_accesses_per_entry, 0.0);
        assert_eq!(stats.hit_ratio, 0.0);

        assert!(cache().stats().most_accessed.is_none());
    }

    #[test]
    fn test_invalidate_where() {
        let mut c = cache();
        let removed = c.invalidate_where(|_, v| *v >= 2);
        assert_eq!(removed, 2);
        assert!(c.has("a"));
        assert!(!c.has("c"));
    }

    #[test]
    fn test_reports() {
        let point = FastLookupCache::<String, u32>::point_report();
        assert_eq!(point.algorithm, Algorithm::HashMapCache);
        assert_eq!(point.complexity, Complexity::Constant);
        assert_eq!(
            FastLookupCache::<String, u32>::scan_report().complexity,
            Complexity::Linear
        );
    }
}
