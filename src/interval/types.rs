//! Interval and schedule result types.

use crate::report::AlgorithmReport;

/// A revenue-bearing booking on a single shared resource (one OR).
///
/// Times are hours on the day's timeline, e.g. `8.0` to `10.5`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedInterval {
    /// Caller-assigned identifier.
    pub id: String,
    /// Start time.
    pub start_time: f64,
    /// End time. Expected to be greater than `start_time`.
    pub end_time: f64,
    /// Value gained if the interval is scheduled.
    pub revenue: f64,
}

impl WeightedInterval {
    /// Creates a new interval.
    pub fn new(id: impl Into<String>, start_time: f64, end_time: f64, revenue: f64) -> Self {
        Self {
            id: id.into(),
            start_time,
            end_time,
            revenue,
        }
    }

    /// `end_time - start_time`.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether the two intervals share any time. Touching endpoints
    /// (`a.end_time == b.start_time`) do not overlap.
    pub fn overlaps(&self, other: &WeightedInterval) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

/// Result of schedule optimization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleOutcome {
    /// Total revenue of the selected intervals.
    pub max_revenue: f64,

    /// Selected intervals in ascending end-time order.
    pub schedule: Vec<WeightedInterval>,

    /// `schedule.len()`.
    pub total_surgeries: usize,

    /// Summed duration of the selected intervals.
    pub total_time: f64,

    /// `total_time / horizon * 100`, rounded to two decimals.
    pub utilization_rate: f64,

    /// Structured cost metrics.
    pub report: AlgorithmReport,
}
