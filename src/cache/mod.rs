//! Instrumented fast-lookup cache.
//!
//! A hash map that counts successful reads per key and reports aggregate
//! statistics. Used for repeated patient and drug lookups.
//!
//! # Statistics
//!
//! [`CacheStats`] exposes two different "rates":
//!
//! - `average_accesses_per_entry`: sum of access counts over stored
//!   entries. Dashboards that predate this crate call this the hit rate.
//! - `hit_ratio`: hits over total `get` calls.

mod store;
mod types;

pub use store::FastLookupCache;
pub use types::{CacheLookup, CacheStats, MostAccessed};
