//! Bottom-up iterative strategy over an extendable indexed cache.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::MEMOIZED_ADVISORY_CEILING;
use crate::strategy::Strategy;

/// Bottom-up iterative memoized strategy.
///
/// Extends a contiguous cache forward from its current frontier with
/// cache[i] = cache[i-1] + cache[i-2] until the target index is reached.
/// No recursion anywhere, so stack depth stays O(1) regardless of n,
/// making this the preferred strategy for large indices. Shares the reuse guarantee
/// of the top-down variants: each index is computed exactly once per
/// instance, and later queries at or below the frontier are O(1).
pub struct BottomUpMemo {
    cache: Vec<BigUint>,
}

impl BottomUpMemo {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: vec![BigUint::zero(), BigUint::one()],
        }
    }

    /// Number of contiguously cached indices (always ≥ 2).
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// The cached values, contiguous from index 0.
    #[must_use]
    pub fn cache(&self) -> &[BigUint] {
        &self.cache
    }
}

impl Default for BottomUpMemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for BottomUpMemo {
    #[allow(clippy::cast_possible_truncation)]
    fn compute(&mut self, n: u64) -> BigUint {
        let target = n as usize;
        for i in self.cache.len()..=target {
            let next = &self.cache[i - 1] + &self.cache[i - 2];
            self.cache.push(next);
        }
        self.cache[target].clone()
    }

    fn name(&self) -> &'static str {
        "BottomUp"
    }

    fn advisory_ceiling(&self) -> Option<u64> {
        Some(MEMOIZED_ADVISORY_CEILING)
    }
}
