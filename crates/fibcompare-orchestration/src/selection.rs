//! Strategy selection against advisory ceilings.

use fibcompare_core::error::FibError;
use fibcompare_core::registry::StrategyFactory;
use fibcompare_core::strategy::Strategy;

/// Resolve the strategies to run for the given selector and index.
///
/// `"all"` selects every registered strategy whose advisory ceiling
/// admits n. An explicitly named strategy is created even past its
/// ceiling (the ceilings are guardrails, not preconditions), with a
/// warning logged so the user knows what they asked for.
pub fn strategies_to_run(
    selector: &str,
    n: u64,
    factory: &dyn StrategyFactory,
) -> Result<Vec<Box<dyn Strategy>>, FibError> {
    if selector == "all" {
        let mut strategies = Vec::new();
        for name in factory.available() {
            let strategy = factory.create(name)?;
            match strategy.advisory_ceiling() {
                Some(ceiling) if n > ceiling => {
                    tracing::debug!(
                        strategy = strategy.name(),
                        ceiling,
                        n,
                        "skipping strategy above its advisory ceiling"
                    );
                }
                _ => strategies.push(strategy),
            }
        }
        Ok(strategies)
    } else {
        let strategy = factory.create(selector)?;
        if let Some(ceiling) = strategy.advisory_ceiling() {
            if n > ceiling {
                tracing::warn!(
                    strategy = strategy.name(),
                    ceiling,
                    n,
                    "running past the advisory ceiling; expect slow or drifting results"
                );
            }
        }
        Ok(vec![strategy])
    }
}
