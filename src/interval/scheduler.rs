//! Weighted interval scheduling by dynamic programming.
//!
//! # Algorithm
//!
//! 1. Sort intervals by end time (stable).
//! 2. For each interval `i`, find `p(i)`: the largest `j < i` whose end
//!    time is at or before `i`'s start time.
//! 3. `dp[0] = r(0)` and for `i > 0`
//!    `dp[i] = max(r(i) + dp[p(i)], dp[i - 1])`,
//!    taking the include branch only when it is strictly larger.
//! 4. Walk the recorded decisions back from `n - 1` to recover the
//!    selected intervals.
//!
//! Because ends are sorted, the compatible predecessors of `i` form a
//! prefix, so the linear scan and the binary search in step 2 always
//! agree.
//!
//! # Reference
//!
//! Kleinberg, J. & Tardos, É. (2006). *Algorithm Design*, §6.1.

use std::time::Instant;

use super::config::{ConflictScan, SchedulerConfig};
use super::types::{ScheduleOutcome, WeightedInterval};
use crate::error::{KernelError, Result};
use crate::report::{Algorithm, AlgorithmReport, Complexity};

/// Runs weighted interval scheduling.
pub struct IntervalScheduler;

impl IntervalScheduler {
    /// Selects a maximum-revenue subset of pairwise non-overlapping
    /// intervals.
    ///
    /// On equal revenue the schedule without the later-finishing interval
    /// wins, so results are deterministic.
    ///
    /// # Errors
    ///
    /// [`KernelError::InvalidConfig`] for a bad configuration and
    /// [`KernelError::InvalidInterval`] for an interval that cannot be
    /// scheduled (see [`SchedulerConfig::strict`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_opskernel::interval::{IntervalScheduler, SchedulerConfig, WeightedInterval};
    ///
    /// let surgeries = vec![
    ///     WeightedInterval::new("appendectomy", 8.0, 10.0, 15_000.0),
    ///     WeightedInterval::new("knee", 9.0, 13.0, 25_000.0),
    ///     WeightedInterval::new("bypass", 11.0, 16.0, 80_000.0),
    /// ];
    ///
    /// let outcome = IntervalScheduler::run(&surgeries, &SchedulerConfig::default()).unwrap();
    /// assert_eq!(outcome.max_revenue, 95_000.0);
    /// assert_eq!(outcome.total_surgeries, 2);
    /// ```
    pub fn run(intervals: &[WeightedInterval], config: &SchedulerConfig) -> Result<ScheduleOutcome> {
        config.validate()?;
        for interval in intervals {
            validate_interval(interval, config.strict)?;
        }

        let start = Instant::now();
        let complexity = match config.conflict_scan {
            ConflictScan::Linear => Complexity::Quadratic,
            ConflictScan::Binary => Complexity::Linearithmic,
        };

        if intervals.is_empty() {
            return Ok(ScheduleOutcome {
                max_revenue: 0.0,
                schedule: Vec::new(),
                total_surgeries: 0,
                total_time: 0.0,
                utilization_rate: 0.0,
                report: AlgorithmReport::new(Algorithm::WeightedIntervalDp, complexity)
                    .with_elapsed(start.elapsed()),
            });
        }

        let mut sorted: Vec<&WeightedInterval> = intervals.iter().collect();
        sorted.sort_by(|a, b| a.end_time.total_cmp(&b.end_time));

        let n = sorted.len();
        let mut comparisons = 0usize;
        let latest: Vec<Option<usize>> = (0..n)
            .map(|i| match config.conflict_scan {
                ConflictScan::Linear => latest_compatible_linear(&sorted, i, &mut comparisons),
                ConflictScan::Binary => latest_compatible_binary(&sorted, i, &mut comparisons),
            })
            .collect();

        let mut dp = vec![0.0f64; n];
        let mut included = vec![false; n];
        dp[0] = sorted[0].revenue;
        included[0] = true;

        for i in 1..n {
            let include = sorted[i].revenue + latest[i].map_or(0.0, |j| dp[j]);
            let exclude = dp[i - 1];
            if include > exclude {
                dp[i] = include;
                included[i] = true;
            } else {
                dp[i] = exclude;
            }
        }

        let mut schedule = Vec::new();
        let mut cursor = Some(n - 1);
        while let Some(i) = cursor {
            if included[i] {
                schedule.push(sorted[i].clone());
                cursor = latest[i];
            } else {
                cursor = i.checked_sub(1);
            }
        }
        schedule.reverse();

        let max_revenue = dp[n - 1];
        let total_time: f64 = schedule.iter().map(WeightedInterval::duration).sum();
        let utilization_rate = round2(total_time / config.horizon_hours * 100.0);

        tracing::debug!(
            n,
            selected = schedule.len(),
            max_revenue,
            utilization_rate,
            comparisons,
            "optimized interval schedule"
        );

        Ok(ScheduleOutcome {
            max_revenue,
            total_surgeries: schedule.len(),
            schedule,
            total_time,
            utilization_rate,
            report: AlgorithmReport::new(Algorithm::WeightedIntervalDp, complexity)
                .with_comparisons(comparisons)
                .with_elapsed(start.elapsed()),
        })
    }
}

/// Optimizes with the default configuration (24-hour horizon, linear
/// scan, strict validation).
pub fn optimize_schedule(intervals: &[WeightedInterval]) -> Result<ScheduleOutcome> {
    IntervalScheduler::run(intervals, &SchedulerConfig::default())
}

fn validate_interval(interval: &WeightedInterval, strict: bool) -> Result<()> {
    let reject = |reason: String| -> Result<()> {
        tracing::warn!(id = %interval.id, "rejected interval: {reason}");
        Err(KernelError::InvalidInterval {
            id: interval.id.clone(),
            reason,
        })
    };

    if !interval.start_time.is_finite()
        || !interval.end_time.is_finite()
        || !interval.revenue.is_finite()
    {
        return reject("times and revenue must be finite".into());
    }
    if strict && interval.end_time <= interval.start_time {
        return reject(format!(
            "end_time ({}) must be after start_time ({})",
            interval.end_time, interval.start_time
        ));
    }
    if strict && interval.revenue < 0.0 {
        return reject(format!("revenue must be non-negative, got {}", interval.revenue));
    }
    Ok(())
}

fn latest_compatible_linear(
    sorted: &[&WeightedInterval],
    i: usize,
    comparisons: &mut usize,
) -> Option<usize> {
    let start = sorted[i].start_time;
    for j in (0..i).rev() {
        *comparisons += 1;
        if sorted[j].end_time <= start {
            return Some(j);
        }
    }
    None
}

fn latest_compatible_binary(
    sorted: &[&WeightedInterval],
    i: usize,
    comparisons: &mut usize,
) -> Option<usize> {
    let start = sorted[i].start_time;
    // first index in [0, i) whose end is after `start`
    let (mut lo, mut hi) = (0usize, i);
    while lo < hi {
        *comparisons += 1;
        let mid = lo + (hi - lo) / 2;
        if sorted[mid].end_time <= start {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo.checked_sub(1)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
