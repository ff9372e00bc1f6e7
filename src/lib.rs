//! Hospital operations kernel.
//!
//! Classic data structures and algorithms behind a hospital's live
//! operational views:
//!
//! - **Triage queue** ([`heap`]): binary min-heap ordering emergency
//!   patients by urgency code, FIFO among equals.
//! - **Binary search** ([`search`]): O(log n) lookup over pre-sorted
//!   records with the comparison count exposed.
//! - **Lookup cache** ([`cache`]): hash-map cache with per-key access
//!   counters and aggregate statistics.
//! - **OR scheduling** ([`interval`]): weighted interval scheduling by
//!   dynamic programming to maximise a theatre's daily revenue.
//!
//! Supporting modules:
//!
//! - [`report`]: structured algorithm/complexity metrics
//! - [`sync`]: single-lock sharing for the stateful components
//! - [`kernel`]: [`OperationsKernel`] composition root
//! - [`error`]: [`KernelError`], the invalid-input error kind
//!
//! # Architecture
//!
//! The four components are independent leaves. Queue and cache are plain
//! in-memory collections; nothing is persisted, and a restart discards
//! all state. Search and scheduling are pure functions over caller input.
//! Empty and not-found states are ordinary return values; only malformed
//! input produces an error.

pub mod cache;
pub mod error;
pub mod heap;
pub mod interval;
pub mod kernel;
pub mod report;
pub mod search;
pub mod sync;

pub use error::{KernelError, Result};
pub use kernel::{KernelConfig, OperationsKernel, PatientLookup};
