//! Priority queue configuration.

use crate::error::{KernelError, Result};

/// How entries with equal priority are ordered relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreaker {
    /// Equal priorities dequeue in enqueue order (earlier first).
    #[default]
    Fifo,

    /// Equal priorities dequeue in whatever order the sift operations
    /// leave them. Not deterministic with respect to arrival.
    HeapOrder,
}

/// Configuration for [`PriorityQueue`](super::PriorityQueue).
///
/// # Examples
///
/// ```
/// use u_opskernel::heap::{QueueConfig, TieBreaker};
///
/// let config = QueueConfig::default()
///     .with_tie_breaker(TieBreaker::Fifo)
///     .with_priority_range(1, Some(4));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueConfig {
    /// Tie-breaking rule for equal priorities.
    pub tie_breaker: TieBreaker,

    /// Smallest accepted priority. Defaults to 0, which rejects negatives.
    pub min_priority: i64,

    /// Largest accepted priority. `None` means unbounded.
    pub max_priority: Option<i64>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            tie_breaker: TieBreaker::Fifo,
            min_priority: 0,
            max_priority: None,
        }
    }
}

impl QueueConfig {
    /// Preset for emergency triage: FIFO ties, priorities bounded to 1..=4.
    pub fn triage() -> Self {
        Self {
            tie_breaker: TieBreaker::Fifo,
            min_priority: 1,
            max_priority: Some(4),
        }
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Sets the accepted priority range.
    pub fn with_priority_range(mut self, min: i64, max: Option<i64>) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }

    /// Checks that the priority range is non-empty.
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_priority {
            if max < self.min_priority {
                return Err(KernelError::InvalidConfig(format!(
                    "max_priority ({max}) must be >= min_priority ({})",
                    self.min_priority
                )));
            }
        }
        Ok(())
    }

    /// Checks a single priority against the configured range.
    pub(crate) fn check_priority(&self, priority: i64) -> Result<()> {
        let above_max = self.max_priority.is_some_and(|max| priority > max);
        if priority < self.min_priority || above_max {
            return Err(KernelError::PriorityOutOfRange {
                priority,
                min: self.min_priority,
                max: self.max_priority,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QueueConfig::default();
        assert_eq!(config.tie_breaker, TieBreaker::Fifo);
        assert_eq!(config.min_priority, 0);
        assert!(config.max_priority.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_range() {
        let config = QueueConfig::default().with_priority_range(5, Some(2));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_check_priority() {
        let config = QueueConfig::triage();
        assert!(config.check_priority(1).is_ok());
        assert!(config.check_priority(4).is_ok());
        assert!(config.check_priority(0).is_err());
        assert!(config.check_priority(5).is_err());

        let open = QueueConfig::default();
        assert!(open.check_priority(1_000_000).is_ok());
        assert!(open.check_priority(-1).is_err());
    }
}
