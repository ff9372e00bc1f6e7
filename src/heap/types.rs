//! Queue entry and triage level types.

use std::cmp::Ordering;
use std::time::Duration;

use crate::error::KernelError;

/// A payload wrapped with its priority and enqueue position.
///
/// Lower `priority` is more urgent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityEntry<T> {
    /// The queued item.
    pub payload: T,

    /// Urgency code. Lower values dequeue first.
    pub priority: i64,

    /// Monotonic time since the owning queue was created.
    pub enqueued_at: Duration,

    /// Monotonic enqueue counter, unique per queue.
    ///
    /// Two entries can share an `enqueued_at` value on coarse clocks;
    /// the sequence number never repeats, so it is what FIFO tie-breaking
    /// actually compares.
    pub sequence: u64,
}

impl<T> PriorityEntry<T> {
    /// Ordering by priority, then by enqueue sequence (earlier first).
    pub(crate) fn cmp_fifo(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }

    /// Ordering by priority only.
    pub(crate) fn cmp_priority(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// Emergency-room triage severity.
///
/// Discriminants are the domain's integer codes: 1 = critical … 4 = low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriageLevel {
    /// Immediate life threat.
    Critical = 1,
    /// Must be seen quickly.
    Urgent = 2,
    /// Stable, needs care.
    Standard = 3,
    /// Can wait.
    Low = 4,
}

impl TriageLevel {
    /// All levels from most to least urgent.
    pub const ALL: [TriageLevel; 4] = [
        TriageLevel::Critical,
        TriageLevel::Urgent,
        TriageLevel::Standard,
        TriageLevel::Low,
    ];

    /// Integer priority code.
    pub fn code(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for TriageLevel {
    type Error = KernelError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TriageLevel::Critical),
            2 => Ok(TriageLevel::Urgent),
            3 => Ok(TriageLevel::Standard),
            4 => Ok(TriageLevel::Low),
            other => Err(KernelError::invalid_input(
                "triage level",
                format!("code must be 1..=4, got {other}"),
            )),
        }
    }
}

impl From<TriageLevel> for i64 {
    fn from(level: TriageLevel) -> Self {
        level.code()
    }
}
