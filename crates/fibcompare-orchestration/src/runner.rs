//! Timed sequential execution and result analysis.

use std::time::Instant;

use fibcompare_core::error::FibError;
use fibcompare_core::strategy::Strategy;

use crate::interfaces::RunRecord;

/// Run every strategy on the same index, one after another, timing each.
///
/// Execution is strictly sequential: the duration of each run is the
/// quantity being measured, and interleaving runs would corrupt it.
/// Strategies that request a cache-warming ramp get it inside their
/// timed region: warming is part of the work that strategy performs
/// for a cold query, exactly as a single deep call would be.
pub fn execute_runs(strategies: &mut [Box<dyn Strategy>], n: u64) -> Vec<RunRecord> {
    strategies
        .iter_mut()
        .map(|strategy| {
            let started = Instant::now();
            if let Some(stride) = strategy.ramp_stride() {
                // Stair-step the cache so no single call recurses deeper
                // than the stride; total work stays linear because every
                // index is still computed exactly once.
                let mut step = stride;
                while step < n {
                    strategy.compute(step);
                    step += stride;
                }
            }
            let value = strategy.compute(n);
            let duration = started.elapsed();
            tracing::debug!(
                strategy = strategy.name(),
                n,
                ?duration,
                "strategy run complete"
            );
            RunRecord {
                strategy: strategy.name().to_string(),
                value,
                duration,
            }
        })
        .collect()
}

/// Check that all runs agree on the value of F(n).
///
/// Disagreement surfaces a drifting strategy (in practice, the
/// closed-form one far past its working precision) instead of silently
/// trusting whichever run is presented first.
pub fn analyze_run_results(records: &[RunRecord], n: u64) -> Result<(), FibError> {
    let Some(first) = records.first() else {
        return Err(FibError::NoResults);
    };
    for record in &records[1..] {
        if record.value != first.value {
            return Err(FibError::Mismatch {
                first: first.strategy.clone(),
                second: record.strategy.clone(),
                n,
            });
        }
    }
    Ok(())
}
