//! Scheduler configuration.

use crate::error::{KernelError, Result};

/// How the latest compatible predecessor of each interval is located.
///
/// Both strategies produce identical schedules; they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConflictScan {
    /// Backward linear scan from `i - 1`. O(n²) overall, fine for a
    /// single day's bookings.
    #[default]
    Linear,

    /// Binary search over the end-sorted prefix. O(n log n) overall.
    Binary,
}

/// Configuration for [`IntervalScheduler`](super::IntervalScheduler).
///
/// # Examples
///
/// ```
/// use u_opskernel::interval::{ConflictScan, SchedulerConfig};
///
/// let config = SchedulerConfig::default()
///     .with_horizon_hours(12.0)
///     .with_conflict_scan(ConflictScan::Binary);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerConfig {
    /// Length of the resource's operating day, used as the utilisation
    /// denominator.
    pub horizon_hours: f64,

    /// Predecessor lookup strategy.
    pub conflict_scan: ConflictScan,

    /// Reject intervals with `end_time <= start_time` or negative revenue.
    ///
    /// When false those pass through unchecked. Non-finite values are
    /// rejected either way.
    pub strict: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            horizon_hours: 24.0,
            conflict_scan: ConflictScan::Linear,
            strict: true,
        }
    }
}

impl SchedulerConfig {
    /// Sets the utilisation horizon in hours.
    pub fn with_horizon_hours(mut self, hours: f64) -> Self {
        self.horizon_hours = hours;
        self
    }

    /// Sets the predecessor lookup strategy.
    pub fn with_conflict_scan(mut self, scan: ConflictScan) -> Self {
        self.conflict_scan = scan;
        self
    }

    /// Enables or disables strict interval validation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.horizon_hours.is_finite() || self.horizon_hours <= 0.0 {
            return Err(KernelError::InvalidConfig(format!(
                "horizon_hours must be positive and finite, got {}",
                self.horizon_hours
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SchedulerConfig::default();
        assert!((config.horizon_hours - 24.0).abs() < 1e-10);
        assert_eq!(config.conflict_scan, ConflictScan::Linear);
        assert!(config.strict);
    }

    #[test]
    fn test_validate_horizon() {
        assert!(SchedulerConfig::default().validate().is_ok());
        assert!(SchedulerConfig::default()
            .with_horizon_hours(0.0)
            .validate()
            .is_err());
        assert!(SchedulerConfig::default()
            .with_horizon_hours(f64::NAN)
            .validate()
            .is_err());
    }
}
