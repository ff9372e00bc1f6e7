//! Array-backed binary min-heap.
//!
//! # Algorithm
//!
//! The heap is stored in a `Vec` where the children of position `i` live
//! at `2i + 1` and `2i + 2`. Two operations restore the heap property:
//!
//! - **sift up** after an append: swap with the parent while the parent
//!   orders strictly after the new entry.
//! - **sift down** after the root is replaced by the last element: swap
//!   with the smaller child while that child orders strictly before.
//!
//! Both are O(log n).
//!
//! # Reference
//!
//! Williams, J. W. J. (1964). "Algorithm 232: Heapsort", *CACM* 7(6), 347-348.

use std::cmp::Ordering;
use std::time::Instant;

use super::config::{QueueConfig, TieBreaker};
use super::types::{PriorityEntry, TriageLevel};
use crate::error::Result;
use crate::report::{Algorithm, AlgorithmReport, Complexity};

/// Queue operations whose complexity can be queried via
/// [`PriorityQueue::report_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOperation {
    Enqueue,
    Dequeue,
    Peek,
    Size,
    ToArray,
}

/// Min-heap priority queue. Lower priority values dequeue first.
///
/// Equal priorities are resolved by the configured [`TieBreaker`]; the
/// default is FIFO by enqueue order.
///
/// The queue has no internal synchronization. Wrap it in
/// [`Shared`](crate::sync::Shared) when handlers on several threads use
/// the same instance.
///
/// # Examples
///
/// ```
/// use u_opskernel::heap::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.enqueue("sprained ankle", 4).unwrap();
/// queue.enqueue("cardiac arrest", 1).unwrap();
/// queue.enqueue("fracture", 2).unwrap();
///
/// assert_eq!(queue.dequeue().map(|e| e.payload), Some("cardiac arrest"));
/// assert_eq!(queue.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<PriorityEntry<T>>,
    config: QueueConfig,
    epoch: Instant,
    next_sequence: u64,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue with the default configuration.
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// Creates an empty queue with the given configuration.
    ///
    /// The configuration is not validated here; use
    /// [`try_with_config`](Self::try_with_config) for untrusted input.
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            heap: Vec::new(),
            config,
            epoch: Instant::now(),
            next_sequence: 0,
        }
    }

    /// Creates an empty queue after validating the configuration.
    pub fn try_with_config(config: QueueConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Returns the queue configuration.
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Adds a payload with the given priority. O(log n).
    ///
    /// Fails with [`KernelError::PriorityOutOfRange`](crate::KernelError::PriorityOutOfRange)
    /// if the priority falls outside the configured bounds; the queue is
    /// left untouched in that case.
    pub fn enqueue(&mut self, payload: T, priority: i64) -> Result<()> {
        if let Err(e) = self.config.check_priority(priority) {
            tracing::warn!(priority, "rejected enqueue: {e}");
            return Err(e);
        }

        let entry = PriorityEntry {
            payload,
            priority,
            enqueued_at: self.epoch.elapsed(),
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;

        self.heap.push(entry);
        self.sift_up(self.heap.len() - 1);

        tracing::trace!(priority, size = self.heap.len(), "enqueued");
        Ok(())
    }

    /// Adds a payload at a triage level.
    pub fn enqueue_triage(&mut self, payload: T, level: TriageLevel) -> Result<()> {
        self.enqueue(payload, level.code())
    }

    /// Removes and returns the most urgent entry, or `None` when empty.
    /// O(log n).
    pub fn dequeue(&mut self) -> Option<PriorityEntry<T>> {
        if self.heap.is_empty() {
            return None;
        }

        // swap_remove moves the last element into the root slot.
        let root = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        tracing::trace!(priority = root.priority, size = self.heap.len(), "dequeued");
        Some(root)
    }

    /// Returns the most urgent entry without removing it. O(1).
    pub fn peek(&self) -> Option<&PriorityEntry<T>> {
        self.heap.first()
    }

    /// Number of queued entries.
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every entry. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterates entries in internal heap order (not sorted).
    pub fn iter(&self) -> impl Iterator<Item = &PriorityEntry<T>> {
        self.heap.iter()
    }

    /// Snapshot of all entries in ascending priority order. O(n log n).
    ///
    /// The heap itself is not touched, so later `dequeue` order is the
    /// same whether or not this was called. Equal priorities appear in the
    /// order `dequeue` would produce them under [`TieBreaker::Fifo`]; under
    /// [`TieBreaker::HeapOrder`] they keep their relative heap-array order.
    pub fn to_array(&self) -> Vec<PriorityEntry<T>>
    where
        T: Clone,
    {
        let mut snapshot = self.heap.clone();
        snapshot.sort_by(|a, b| self.compare(a, b));
        snapshot
    }

    /// Consumes the queue and returns entries in dequeue order.
    pub fn into_sorted_vec(mut self) -> Vec<PriorityEntry<T>> {
        let mut out = Vec::with_capacity(self.heap.len());
        while let Some(entry) = self.dequeue() {
            out.push(entry);
        }
        out
    }

    /// Whether every non-root entry orders at or after its parent.
    ///
    /// Always true for a queue mutated only through its public API.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| {
            let parent = (i - 1) / 2;
            self.compare(&self.heap[parent], &self.heap[i]) != Ordering::Greater
        })
    }

    /// Complexity class of a queue operation.
    pub fn report_for(op: QueueOperation) -> AlgorithmReport {
        let complexity = match op {
            QueueOperation::Enqueue | QueueOperation::Dequeue => Complexity::Logarithmic,
            QueueOperation::Peek | QueueOperation::Size => Complexity::Constant,
            QueueOperation::ToArray => Complexity::Linearithmic,
        };
        AlgorithmReport::new(Algorithm::MinHeap, complexity)
    }

    fn compare(&self, a: &PriorityEntry<T>, b: &PriorityEntry<T>) -> Ordering {
        match self.config.tie_breaker {
            TieBreaker::Fifo => a.cmp_fifo(b),
            TieBreaker::HeapOrder => a.cmp_priority(b),
        }
    }

    fn is_before(&self, a: usize, b: usize) -> bool {
        self.compare(&self.heap[a], &self.heap[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.compare(&self.heap[parent], &self.heap[idx]) != Ordering::Greater {
                break;
            }
            self.heap.swap(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.is_before(left, smallest) {
                smallest = left;
            }
            if right < len && self.is_before(right, smallest) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.heap.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
