//! Search result and record traits.

use crate::report::AlgorithmReport;

/// A record with an identifier that [`search_by_id`](super::search_by_id)
/// can sort and search on.
///
/// # Examples
///
/// ```
/// use u_opskernel::search::Identified;
///
/// struct Patient { id: String, name: String }
///
/// impl Identified for Patient {
///     type Id = String;
///     fn id(&self) -> &String { &self.id }
/// }
/// ```
pub trait Identified {
    /// Identifier type. Must be totally ordered.
    type Id: Ord;

    /// Returns the record's identifier.
    fn id(&self) -> &Self::Id;
}

/// Outcome of a binary search.
///
/// `D` is `&T` when searching a caller-owned slice and `T` when the
/// search ran over an internal sorted copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchOutcome<D> {
    /// Position of the match in the searched (sorted) sequence.
    pub index: Option<usize>,

    /// The matching record.
    pub data: Option<D>,

    /// Number of loop iterations (midpoint comparisons) performed.
    pub comparisons: usize,

    /// Structured cost metrics.
    pub report: AlgorithmReport,
}

impl<D> SearchOutcome<D> {
    /// Whether the target was found.
    pub fn found(&self) -> bool {
        self.index.is_some()
    }

    /// Index as a signed value, `-1` when not found.
    pub fn signed_index(&self) -> i64 {
        self.index.map_or(-1, |i| i as i64)
    }
}
