//! Top-down memoized strategy backed by an associative cache.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::{MEMOIZED_ADVISORY_CEILING, RAMP_STRIDE};
use crate::strategy::Strategy;

/// Top-down memoized strategy with an associative cache.
///
/// Same recursion and caching guarantee as [`crate::memo_indexed::IndexedMemo`],
/// but keyed by a hash map instead of a contiguous sequence: the cache
/// structure places no contiguity requirement on the key set, at the
/// cost of per-key hashing on every lookup. Every key k present
/// satisfies cache[k] = cache[k-1] + cache[k-2], grounded in the seeded
/// base entries for 0 and 1.
pub struct AssociativeMemo {
    cache: HashMap<u64, BigUint>,
}

impl AssociativeMemo {
    #[must_use]
    pub fn new() -> Self {
        let mut cache = HashMap::new();
        cache.insert(0, BigUint::zero());
        cache.insert(1, BigUint::one());
        Self { cache }
    }

    /// Number of cached indices (always ≥ 2).
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the given index has been computed on this instance.
    #[must_use]
    pub fn contains(&self, n: u64) -> bool {
        self.cache.contains_key(&n)
    }

    fn fib(&mut self, n: u64) -> BigUint {
        if let Some(value) = self.cache.get(&n) {
            return value.clone();
        }
        let value = self.fib(n - 1) + self.fib(n - 2);
        self.cache.insert(n, value.clone());
        value
    }
}

impl Default for AssociativeMemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for AssociativeMemo {
    fn compute(&mut self, n: u64) -> BigUint {
        self.fib(n)
    }

    fn name(&self) -> &'static str {
        "AssociativeMemo"
    }

    fn advisory_ceiling(&self) -> Option<u64> {
        Some(MEMOIZED_ADVISORY_CEILING)
    }

    fn ramp_stride(&self) -> Option<u64> {
        Some(RAMP_STRIDE)
    }
}
