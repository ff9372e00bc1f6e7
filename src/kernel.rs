//! Composition root.
//!
//! [`OperationsKernel`] owns the stateful components a hospital
//! operations service needs: the emergency triage queue and the patient
//! and drug lookup caches. Handlers receive a clone of the kernel, which
//! shares state; tests construct their own kernel to get isolated state.

use crate::cache::FastLookupCache;
use crate::error::Result;
use crate::heap::{PriorityEntry, PriorityQueue, QueueConfig, TriageLevel};
use crate::interval::{IntervalScheduler, ScheduleOutcome, SchedulerConfig, WeightedInterval};
use crate::report::AlgorithmReport;
use crate::search::{search_by_id_ref, Identified};
use crate::sync::Shared;

/// Configuration for [`OperationsKernel`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KernelConfig {
    /// Triage queue settings. Defaults to [`QueueConfig::triage`].
    pub triage: QueueConfig,

    /// OR scheduler settings.
    pub scheduler: SchedulerConfig,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            triage: QueueConfig::triage(),
            scheduler: SchedulerConfig::default(),
        }
    }
}

impl KernelConfig {
    /// Sets the triage queue configuration.
    pub fn with_triage(mut self, triage: QueueConfig) -> Self {
        self.triage = triage;
        self
    }

    /// Sets the scheduler configuration.
    pub fn with_scheduler(mut self, scheduler: SchedulerConfig) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<()> {
        self.triage.validate()?;
        self.scheduler.validate()
    }
}

/// A patient lookup that went through the cache first.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientLookup<R> {
    /// The record, if found anywhere.
    pub record: Option<R>,

    /// Whether the record came from the cache.
    pub cached: bool,

    /// Cost of the path that produced the answer.
    pub report: AlgorithmReport,
}

/// Owns the triage queue, the patient cache and the drug cache.
///
/// - `P`: triage payload
/// - `R`: cached patient record
/// - `D`: cached drug record
///
/// # Examples
///
/// ```
/// use u_opskernel::heap::TriageLevel;
/// use u_opskernel::{KernelConfig, OperationsKernel};
///
/// let kernel: OperationsKernel<&str, String, String> =
///     OperationsKernel::new(KernelConfig::default()).unwrap();
///
/// kernel.admit("chest pain", TriageLevel::Critical).unwrap();
/// kernel.admit("sore throat", TriageLevel::Low).unwrap();
///
/// let next = kernel.next_patient().unwrap();
/// assert_eq!(next.payload, "chest pain");
/// assert_eq!(kernel.waiting(), 1);
/// ```
#[derive(Debug)]
pub struct OperationsKernel<P, R, D> {
    triage_queue: Shared<PriorityQueue<P>>,
    patient_cache: Shared<FastLookupCache<String, R>>,
    drug_cache: Shared<FastLookupCache<String, D>>,
    config: KernelConfig,
}

impl<P, R, D> Clone for OperationsKernel<P, R, D> {
    fn clone(&self) -> Self {
        Self {
            triage_queue: self.triage_queue.clone(),
            patient_cache: self.patient_cache.clone(),
            drug_cache: self.drug_cache.clone(),
            config: self.config.clone(),
        }
    }
}

impl<P, R, D> OperationsKernel<P, R, D> {
    /// Builds a kernel with fresh, empty components.
    pub fn new(config: KernelConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(?config, "operations kernel created");
        Ok(Self {
            triage_queue: Shared::new(PriorityQueue::with_config(config.triage.clone())),
            patient_cache: Shared::new(FastLookupCache::new()),
            drug_cache: Shared::new(FastLookupCache::new()),
            config,
        })
    }

    /// The kernel configuration.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Handle to the emergency triage queue.
    pub fn triage_queue(&self) -> &Shared<PriorityQueue<P>> {
        &self.triage_queue
    }

    /// Handle to the patient record cache.
    pub fn patient_cache(&self) -> &Shared<FastLookupCache<String, R>> {
        &self.patient_cache
    }

    /// Handle to the drug record cache.
    pub fn drug_cache(&self) -> &Shared<FastLookupCache<String, D>> {
        &self.drug_cache
    }

    /// Adds a patient to the triage queue.
    pub fn admit(&self, payload: P, level: TriageLevel) -> Result<()> {
        self.triage_queue.with(|q| q.enqueue_triage(payload, level))
    }

    /// Removes the most urgent waiting patient.
    pub fn next_patient(&self) -> Option<PriorityEntry<P>> {
        self.triage_queue.with(PriorityQueue::dequeue)
    }

    /// Number of patients waiting.
    pub fn waiting(&self) -> usize {
        self.triage_queue.with(|q| q.size())
    }

    /// Snapshot of the queue in dequeue order, for display.
    pub fn triage_board(&self) -> Vec<PriorityEntry<P>>
    where
        P: Clone,
    {
        self.triage_queue.with(|q| q.to_array())
    }

    /// Looks a patient up in the cache, falling back to `records`.
    ///
    /// A record found in `records` is cached under its id.
    pub fn find_patient(&self, id: &str, records: &[R]) -> PatientLookup<R>
    where
        R: Identified<Id = String> + Clone,
    {
        let hit = self
            .patient_cache
            .with(|cache| cache.get(id).data.cloned());
        if let Some(record) = hit {
            return PatientLookup {
                record: Some(record),
                cached: true,
                report: FastLookupCache::<String, R>::point_report(),
            };
        }

        let outcome = search_by_id_ref(records, &id.to_string());
        let record = outcome.data.cloned();
        if let Some(found) = &record {
            self.patient_cache
                .with(|cache| cache.set(found.id().clone(), found.clone()));
        }

        PatientLookup {
            record,
            cached: false,
            report: outcome.report,
        }
    }

    /// Caches a drug record.
    pub fn cache_drug(&self, code: impl Into<String>, drug: D) {
        self.drug_cache.with(|cache| {
            cache.set(code.into(), drug);
        });
    }

    /// Reads a drug record from the cache.
    pub fn lookup_drug(&self, code: &str) -> Option<D>
    where
        D: Clone,
    {
        self.drug_cache.with(|cache| cache.get(code).data.cloned())
    }

    /// Optimizes an OR day with the configured scheduler settings.
    pub fn optimize_schedule(&self, intervals: &[WeightedInterval]) -> Result<ScheduleOutcome> {
        IntervalScheduler::run(intervals, &self.config.scheduler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::TieBreaker;
    use crate::report::Algorithm;

    #[derive(Debug, Clone, PartialEq)]
    struct Patient {
        id: String,
        name: String,
    }

    impl Identified for Patient {
        type Id = String;
        fn id(&self) -> &String {
            &self.id
        }
    }

    fn kernel() -> OperationsKernel<String, Patient, String> {
        OperationsKernel::new(KernelConfig::default()).unwrap()
    }

    fn records() -> Vec<Patient> {
        ["P-3", "P-1", "P-2"]
            .iter()
            .map(|id| Patient {
                id: id.to_string(),
                name: format!("name of {id}"),
            })
            .collect()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let bad = KernelConfig::default()
            .with_scheduler(SchedulerConfig::default().with_horizon_hours(-1.0));
        assert!(OperationsKernel::<(), (), ()>::new(bad).is_err());
    }

    #[test]
    fn test_triage_flow() {
        let k = kernel();
        k.admit("flu".into(), TriageLevel::Standard).unwrap();
        k.admit("trauma".into(), TriageLevel::Critical).unwrap();
        k.admit("cough".into(), TriageLevel::Standard).unwrap();

        let board: Vec<_> = k.triage_board().into_iter().map(|e| e.payload).collect();
        assert_eq!(board, vec!["trauma", "flu", "cough"]);
        assert_eq!(k.waiting(), 3);

        assert_eq!(k.next_patient().map(|e| e.payload), Some("trauma".to_string()));
        assert_eq!(k.next_patient().map(|e| e.payload), Some("flu".to_string()));
        assert_eq!(k.next_patient().map(|e| e.payload), Some("cough".to_string()));
        assert!(k.next_patient().is_none());
    }

    #[test]
    fn test_default_triage_bounds() {
        let k = kernel();
        assert_eq!(k.config().triage.tie_breaker, TieBreaker::Fifo);
        let err = k.triage_queue().with(|q| q.enqueue("x".into(), 9));
        assert!(err.is_err());
    }

    #[test]
    fn test_clone_shares_and_new_isolates() {
        let a = kernel();
        let b = a.clone();
        let c = kernel();

        a.admit("shared".into(), TriageLevel::Urgent).unwrap();
        assert_eq!(b.waiting(), 1);
        assert_eq!(c.waiting(), 0);
        assert!(a.triage_queue().ptr_eq(b.triage_queue()));
    }

    #[test]
    fn test_find_patient_populates_cache() {
        let k = kernel();
        let recs = records();

        let first = k.find_patient("P-2", &recs);
        assert!(!first.cached);
        assert_eq!(first.record.as_ref().map(|p| p.id.as_str()), Some("P-2"));
        assert_eq!(
            first.record.as_ref().map(|p| p.name.as_str()),
            Some("name of P-2")
        );
        assert_eq!(first.report.algorithm, Algorithm::SortThenBinarySearch);

        let second = k.find_patient("P-2", &recs);
        assert!(second.cached);
        assert_eq!(second.record, first.record);
        assert_eq!(second.report.algorithm, Algorithm::HashMapCache);

        let stats = k.patient_cache().with(|c| c.stats());
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_find_patient_missing() {
        let k = kernel();
        let lookup = k.find_patient("P-404", &records());
        assert!(lookup.record.is_none());
        assert!(k.patient_cache().with(|c| c.is_empty()));
    }

    #[test]
    fn test_drug_cache() {
        let k = kernel();
        k.cache_drug("RX-1", "amoxicillin".to_string());
        assert_eq!(k.lookup_drug("RX-1").as_deref(), Some("amoxicillin"));
        assert!(k.lookup_drug("RX-2").is_none());
    }

    #[test]
    fn test_optimize_schedule_uses_config() {
        let config = KernelConfig::default()
            .with_scheduler(SchedulerConfig::default().with_horizon_hours(10.0));
        let k: OperationsKernel<(), (), ()> = OperationsKernel::new(config).unwrap();
        let outcome = k
            .optimize_schedule(&[WeightedInterval::new("a", 8.0, 13.0, 1.0)])
            .unwrap();
        assert!((outcome.utilization_rate - 50.0).abs() < 1e-9);
    }
}
