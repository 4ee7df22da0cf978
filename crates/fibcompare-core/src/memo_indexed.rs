//! Top-down memoized strategy backed by a contiguous indexed cache.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::{MEMOIZED_ADVISORY_CEILING, RAMP_STRIDE};
use crate::strategy::Strategy;

/// Top-down memoized strategy with an indexed cache.
///
/// The cache is a contiguous sequence seeded with F(0), F(1); a hit is
/// an O(1) lookup and a miss recurses down to the cached frontier,
/// appending each newly computed value at its own index. After any call
/// the cache covers 0..=max-seen-n contiguously and every index has been
/// computed at most once over the instance's lifetime, so repeated and
/// lower queries are cache hits. The cache never shrinks and lives
/// exactly as long as the instance.
///
/// A cold call still recurses to depth n before the cache can absorb it;
/// the driver bounds that depth via [`Strategy::ramp_stride`].
pub struct IndexedMemo {
    cache: Vec<BigUint>,
}

impl IndexedMemo {
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

    #[allow(clippy::cast_possible_truncation)]
    fn fib(&mut self, n: u64) -> BigUint {
        if (n as usize) < self.cache.len() {
            return self.cache[n as usize].clone();
        }
        // fib(n-1) extends the cache through n-1, so fib(n-2) is a hit
        // and the push below lands exactly at index n.
        let value = self.fib(n - 1) + self.fib(n - 2);
        self.cache.push(value.clone());
        value
    }
}

impl Default for IndexedMemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for IndexedMemo {
    fn compute(&mut self, n: u64) -> BigUint {
        self.fib(n)
    }

    fn name(&self) -> &'static str {
        "IndexedMemo"
    }

    fn advisory_ceiling(&self) -> Option<u64> {
        Some(MEMOIZED_ADVISORY_CEILING)
    }

    fn ramp_stride(&self) -> Option<u64> {
        Some(RAMP_STRIDE)
    }
}
