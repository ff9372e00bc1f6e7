//! Operating-room schedule optimization.
//!
//! Weighted interval scheduling: given bookings on one resource, each
//! with a start, an end and a revenue, select the non-overlapping subset
//! with the largest total revenue.
//!
//! # Key Types
//!
//! - [`WeightedInterval`]: one booking
//! - [`SchedulerConfig`]: utilisation horizon, predecessor scan, validation
//! - [`IntervalScheduler`]: runs the dynamic program
//! - [`ScheduleOutcome`]: selected bookings plus revenue and utilisation
//!
//! # References
//!
//! Kleinberg & Tardos (2006), *Algorithm Design*, §6.1

mod config;
mod scheduler;
mod types;

pub use config::{ConflictScan, SchedulerConfig};
pub use scheduler::{optimize_schedule, IntervalScheduler};
pub use types::{ScheduleOutcome, WeightedInterval};
