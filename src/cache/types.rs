//! Cache lookup and statistics types.

/// Result of [`FastLookupCache::get`](super::FastLookupCache::get).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CacheLookup<D> {
    /// The cached value on a hit.
    pub data: Option<D>,
}

impl<D> CacheLookup<D> {
    /// Whether the key was present.
    pub fn found(&self) -> bool {
        self.data.is_some()
    }
}

/// The key with the highest access count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MostAccessed<K> {
    pub key: K,
    pub access_count: u64,
}

/// Snapshot of cache statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats<K> {
    /// Number of distinct keys currently stored.
    pub total_entries: usize,

    /// Entry with the most successful reads, if any entry was read.
    pub most_accessed: Option<MostAccessed<K>>,

    /// Sum of per-entry access counts divided by `total_entries`.
    ///
    /// This is what dashboards historically labelled "hit rate". It is an
    /// average read count per stored entry, not a ratio, and can exceed 1.
    pub average_accesses_per_entry: f64,

    /// Conventional hit ratio: hits divided by all `get` calls, in `[0, 1]`.
    pub hit_ratio: f64,

    /// Total `get` calls that found their key.
    pub hits: u64,

    /// Total `get` calls that missed.
    pub misses: u64,
}
