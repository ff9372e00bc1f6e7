//! Iterative binary search.
//!
//! # Algorithm
//!
//! Maintains a half-open window `[lo, hi)` over the sorted input. Each
//! iteration compares the target against the key at the midpoint and
//! discards the half that cannot contain it. A present key is found in at
//! most `floor(log2 n) + 1` iterations.
//!
//! # Reference
//!
//! Knuth, D. E. (1998). *The Art of Computer Programming*, Vol. 3, §6.2.1.

use std::cmp::Ordering;
use std::time::Instant;

use super::types::{Identified, SearchOutcome};
use crate::error::{KernelError, Result};
use crate::report::{Algorithm, AlgorithmReport, Complexity};

#[cfg(feature = "parallel")]
const PARALLEL_SORT_THRESHOLD: usize = 10_000;

/// Binary search over a slice sorted ascending by `key`.
///
/// The slice must already be sorted by the extracted key; this function
/// does not check or sort it. Not finding the target is an ordinary
/// outcome (`found() == false`).
///
/// # Errors
///
/// Returns [`KernelError::IncomparableKey`] when a midpoint key has no
/// ordering relative to the target (e.g. a NaN float).
///
/// # Examples
///
/// ```
/// use u_opskernel::search::search;
///
/// struct Code { code: u32, label: &'static str }
///
/// let codes = [
///     Code { code: 100, label: "consult" },
///     Code { code: 250, label: "x-ray" },
///     Code { code: 410, label: "mri" },
/// ];
///
/// let outcome = search(&codes, &250, |c| &c.code).unwrap();
/// assert!(outcome.found());
/// assert_eq!(outcome.data.map(|c| c.label), Some("x-ray"));
/// ```
pub fn search<'a, T, K, F>(sorted: &'a [T], target: &K, key: F) -> Result<SearchOutcome<&'a T>>
where
    K: PartialOrd + ?Sized,
    F: Fn(&T) -> &K,
{
    let start = Instant::now();
    let (index, comparisons) = bisect(sorted, |item| key(item).partial_cmp(target))?;

    tracing::debug!(
        n = sorted.len(),
        comparisons,
        found = index.is_some(),
        "binary search"
    );

    Ok(SearchOutcome {
        index,
        data: index.map(|i| &sorted[i]),
        comparisons,
        report: AlgorithmReport::new(Algorithm::BinarySearch, Complexity::Logarithmic)
            .with_comparisons(comparisons)
            .with_elapsed(start.elapsed()),
    })
}

/// Sorts a copy of `collection` by identifier, then binary searches it.
///
/// The returned `index` refers to the sorted copy, not the input. The
/// report carries [`Complexity::Linearithmic`] because the sort dominates,
/// while `comparisons` counts only the search step.
pub fn search_by_id<T>(collection: &[T], id: &T::Id) -> SearchOutcome<T>
where
    T: Identified + Clone + Send,
{
    let start = Instant::now();
    let mut sorted = collection.to_vec();
    sort_by_id(&mut sorted);

    // Ord keys always compare, so bisect cannot fail here.
    let (index, comparisons) = match bisect(&sorted, |item| Some(item.id().cmp(id))) {
        Ok(found) => found,
        Err(_) => (None, 0),
    };

    tracing::debug!(
        n = sorted.len(),
        comparisons,
        found = index.is_some(),
        "sorted binary search by id"
    );

    let report = AlgorithmReport::new(Algorithm::SortThenBinarySearch, Complexity::Linearithmic)
        .with_comparisons(comparisons)
        .with_elapsed(start.elapsed());

    let data = index.map(|i| sorted.swap_remove(i));
    SearchOutcome {
        index,
        data,
        comparisons,
        report,
    }
}

/// Like [`search_by_id`] but borrows the matching record from the input
/// instead of cloning the whole collection.
pub fn search_by_id_ref<'a, T>(collection: &'a [T], id: &T::Id) -> SearchOutcome<&'a T>
where
    T: Identified,
{
    let start = Instant::now();
    let mut order: Vec<&'a T> = collection.iter().collect();
    order.sort_by(|a, b| a.id().cmp(b.id()));

    let (index, comparisons) = match bisect(&order, |item| Some(item.id().cmp(id))) {
        Ok(found) => found,
        Err(_) => (None, 0),
    };

    let report = AlgorithmReport::new(Algorithm::SortThenBinarySearch, Complexity::Linearithmic)
        .with_comparisons(comparisons)
        .with_elapsed(start.elapsed());

    SearchOutcome {
        index,
        data: index.map(|i| order[i]),
        comparisons,
        report,
    }
}

/// Core loop. `probe` orders an element relative to the target.
fn bisect<T>(
    sorted: &[T],
    probe: impl Fn(&T) -> Option<Ordering>,
) -> Result<(Option<usize>, usize)> {
    let mut lo = 0usize;
    let mut hi = sorted.len();
    let mut comparisons = 0usize;

    while lo < hi {
        comparisons += 1;
        let mid = lo + (hi - lo) / 2;
        match probe(&sorted[mid]) {
            Some(Ordering::Equal) => return Ok((Some(mid), comparisons)),
            Some(Ordering::Less) => lo = mid + 1,
            Some(Ordering::Greater) => hi = mid,
            None => {
                tracing::warn!(index = mid, "incomparable search key");
                return Err(KernelError::IncomparableKey { index: mid });
            }
        }
    }

    Ok((None, comparisons))
}

#[cfg(not(feature = "parallel"))]
fn sort_by_id<T: Identified + Send>(items: &mut [T]) {
    items.sort_by(|a, b| a.id().cmp(b.id()));
}

#[cfg(feature = "parallel")]
fn sort_by_id<T: Identified + Send>(items: &mut [T]) {
    use rayon::slice::ParallelSliceMut;

    if items.len() >= PARALLEL_SORT_THRESHOLD {
        items.par_sort_by(|a, b| a.id().cmp(b.id()));
    } else {
        items.sort_by(|a, b| a.id().cmp(b.id()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Patient {
        id: String,
        ward: u32,
    }

    impl Identified for Patient {
        type Id = String;
        fn id(&self) -> &String {
            &self.id
        }
    }

    fn patient(id: &str, ward: u32) -> Patient {
        Patient {
            id: id.to_string(),
            ward,
        }
    }

    fn ceil_log2(n: usize) -> usize {
        (usize::BITS - (n.max(1) - 1).leading_zeros()) as usize
    }

    #[test]
    fn test_finds_every_present_key() {
        let values: Vec<i32> = (0..37).map(|x| x * 3).collect();
        for (i, v) in values.iter().enumerate() {
            let outcome = search(&values, v, |x| x).unwrap();
            assert!(outcome.found());
            assert_eq!(outcome.index, Some(i));
            assert_eq!(outcome.data, Some(v));
            assert!(outcome.comparisons <= ceil_log2(values.len()) + 1);
        }
    }

    #[test]
    fn test_absent_key() {
        let values = [1, 3, 5, 7, 9];
        let outcome = search(&values, &4, |x| x).unwrap();
        assert!(!outcome.found());
        assert_eq!(outcome.signed_index(), -1);
        assert!(outcome.data.is_none());
        assert!(outcome.comparisons > 0);
    }

    #[test]
    fn test_empty_slice() {
        let values: [u8; 0] = [];
        let outcome = search(&values, &1, |x| x).unwrap();
        assert!(!outcome.found());
        assert_eq!(outcome.comparisons, 0);
    }

    #[test]
    fn test_search_by_field() {
        let ward_sorted = vec![patient("z", 1), patient("a", 4), patient("m", 9)];
        let outcome = search(&ward_sorted, &4, |p| &p.ward).unwrap();
        assert_eq!(outcome.data.map(|p| p.id.as_str()), Some("a"));
        assert_eq!(outcome.report.algorithm, Algorithm::BinarySearch);
        assert_eq!(outcome.report.complexity, Complexity::Logarithmic);
    }

    #[test]
    fn test_str_keys() {
        let codes = ["A01", "B20", "C34", "E11"];
        let outcome = search(&codes, "C34", |c| *c).unwrap();
        assert_eq!(outcome.index, Some(2));
    }

    #[test]
    fn test_nan_key_is_invalid_input() {
        let values = [1.0, f64::NAN, 3.0];
        let err = search(&values, &2.0, |x| x).unwrap_err();
        assert_eq!(err, KernelError::IncomparableKey { index: 1 });
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_search_by_id_sorts_copy() {
        let patients = vec![patient("p-30", 2), patient("p-10", 1), patient("p-20", 3)];
        let outcome = search_by_id(&patients, &"p-20".to_string());

        assert!(outcome.found());
        assert_eq!(outcome.index, Some(1));
        assert_eq!(outcome.data, Some(patient("p-20", 3)));
        assert_eq!(outcome.report.algorithm, Algorithm::SortThenBinarySearch);
        assert_eq!(outcome.report.complexity, Complexity::Linearithmic);
        // input order untouched
        assert_eq!(patients[0].id, "p-30");
    }

    #[test]
    fn test_search_by_id_missing() {
        let patients = vec![patient("p-1", 1)];
        let outcome = search_by_id(&patients, &"p-2".to_string());
        assert!(!outcome.found());
        assert!(outcome.data.is_none());
    }

    #[test]
    fn test_search_by_id_ref_matches_owned() {
        let patients = vec![patient("c", 3), patient("a", 1), patient("b", 2)];
        let id = "c".to_string();
        let owned = search_by_id(&patients, &id);
        let borrowed = search_by_id_ref(&patients, &id);
        assert_eq!(owned.index, borrowed.index);
        assert_eq!(owned.comparisons, borrowed.comparisons);
        assert_eq!(borrowed.data, Some(&patients[0]));
    }
}
