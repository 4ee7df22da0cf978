//! Orchestration interfaces.

use std::time::Duration;

use num_bigint::BigUint;

/// Result of a single timed strategy run.
#[derive(Debug, Clone)]
pub struct RunRecord {
    /// Strategy display name.
    pub strategy: String,
    /// The computed value.
    pub value: BigUint,
    /// Wall-clock duration of the run, cache warming included.
    pub duration: Duration,
}

/// Trait for presenting run results to the user.
pub trait ResultPresenter {
    /// Present a single run.
    fn present_run(&self, n: u64, record: &RunRecord);

    /// Present a comparison across runs.
    fn present_comparison(&self, records: &[RunRecord]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_run(&self, _n: u64, _record: &RunRecord) {}
    fn present_comparison(&self, _records: &[RunRecord]) {}
    fn present_error(&self, _error: &str) {}
}
