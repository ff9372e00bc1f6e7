//! Triage priority queue.
//!
//! A binary min-heap ordering entries by integer urgency code, where a
//! lower code is more urgent (1 = critical … 4 = low in the triage
//! convention).
//!
//! # Tie-breaking
//!
//! Entries that share a priority dequeue in arrival order by default
//! ([`TieBreaker::Fifo`]). [`TieBreaker::HeapOrder`] leaves their order
//! to the sift operations instead.
//!
//! # Key Types
//!
//! - [`PriorityQueue`]: the heap itself
//! - [`PriorityEntry`]: payload plus priority, timestamp and sequence
//! - [`QueueConfig`]: tie-breaking rule and accepted priority range
//! - [`TriageLevel`]: named triage codes

mod config;
mod queue;
mod types;

pub use config::{QueueConfig, TieBreaker};
pub use queue::{PriorityQueue, QueueOperation};
pub use types::{PriorityEntry, TriageLevel};
