//! Binary search lookup.
//!
//! O(log n) lookup over a collection the caller has already sorted by the
//! searched key, with the loop iteration count exposed so callers can
//! report algorithmic cost.
//!
//! - [`search`]: caller-sorted slice, arbitrary key extractor
//! - [`search_by_id`]: unsorted slice; sorts a copy by [`Identified::id`]
//!   first, so the whole call is O(n log n)
//! - [`search_by_id_ref`]: same, but borrows the result from the input

mod kernel;
mod types;

pub use kernel::{search, search_by_id, search_by_id_ref};
pub use types::{Identified, SearchOutcome};
