//! Structured algorithm metrics.
//!
//! Callers report algorithmic cost back to their users. Instead of free
//! text such as `"O(log n)"`, each operation that measures its own cost
//! returns an [`AlgorithmReport`] built from these enums.

use std::fmt;
use std::time::Duration;

/// Identifies which kernel algorithm produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Array-backed binary min-heap.
    MinHeap,
    /// Iterative binary search over a pre-sorted slice.
    BinarySearch,
    /// Sort a copy, then binary search it.
    SortThenBinarySearch,
    /// Hash map with per-key access counters.
    HashMapCache,
    /// Dynamic programming over end-sorted weighted intervals.
    WeightedIntervalDp,
}

impl Algorithm {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::MinHeap => "Min-Heap Priority Queue",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::SortThenBinarySearch => "Sort + Binary Search",
            Algorithm::HashMapCache => "Hash Map Cache",
            Algorithm::WeightedIntervalDp => "Weighted Interval Scheduling (DP)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Asymptotic complexity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Complexity {
    /// O(1)
    Constant,
    /// O(log n)
    Logarithmic,
    /// O(n)
    Linear,
    /// O(n log n)
    Linearithmic,
    /// O(n²)
    Quadratic,
}

impl Complexity {
    /// Big-O notation string.
    pub fn notation(&self) -> &'static str {
        match self {
            Complexity::Constant => "O(1)",
            Complexity::Logarithmic => "O(log n)",
            Complexity::Linear => "O(n)",
            Complexity::Linearithmic => "O(n log n)",
            Complexity::Quadratic => "O(n^2)",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

/// Measured cost of a single kernel operation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmReport {
    /// Algorithm that ran.
    pub algorithm: Algorithm,

    /// Total complexity of the operation as invoked, including any
    /// preparatory step (e.g. the sort in `search_by_id`).
    pub complexity: Complexity,

    /// Key comparisons performed by the core loop.
    pub comparisons: usize,

    /// Wall-clock time spent.
    pub elapsed: Duration,
}

impl AlgorithmReport {
    /// Creates a report with zero comparisons and zero elapsed time.
    pub fn new(algorithm: Algorithm, complexity: Complexity) -> Self {
        Self {
            algorithm,
            complexity,
            comparisons: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Sets the comparison count.
    pub fn with_comparisons(mut self, comparisons: usize) -> Self {
        self.comparisons = comparisons;
        self
    }

    /// Sets the elapsed time.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }
}
