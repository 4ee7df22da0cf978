//! Naive doubly-recursive computation, no caching.

use num_bigint::BigUint;

use crate::constants::RECURSIVE_ADVISORY_CEILING;
use crate::strategy::Strategy;

/// Exact recursive strategy.
///
/// Evaluates F(n) = F(n-1) + F(n-2) directly, recomputing every
/// identical sub-call. Call count grows as roughly φⁿ and stack depth
/// grows linearly with n, which makes runs past n ≈ 37 impractical on
/// commodity hardware; a speed boundary, not a correctness one. Pure:
/// no state is retained between calls.
pub struct NaiveRecursive;

impl NaiveRecursive {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn fib(n: u64) -> BigUint {
        if n < 2 {
            BigUint::from(n)
        } else {
            Self::fib(n - 1) + Self::fib(n - 2)
        }
    }
}

impl Default for NaiveRecursive {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for NaiveRecursive {
    fn compute(&mut self, n: u64) -> BigUint {
        Self::fib(n)
    }

    fn name(&self) -> &'static str {
        "NaiveRecursive"
    }

    fn advisory_ceiling(&self) -> Option<u64> {
        Some(RECURSIVE_ADVISORY_CEILING)
    }
}
