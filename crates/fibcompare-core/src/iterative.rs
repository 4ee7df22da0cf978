//! O(1)-state iterative computation and the lazy sequence iterator.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::strategy::Strategy;

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields `(index, F(index))` pairs starting from F(0).
///
/// # Example
/// ```
/// use fibcompare_core::iterative::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|(_, v)| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
pub struct FibIterator {
    a: BigUint,
    b: BigUint,
    index: u64,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: BigUint::zero(),
            b: BigUint::one(),
            index: 0,
        }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = (u64, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.a.clone();
        let idx = self.index;
        let next = &self.a + &self.b;
        self.a = std::mem::replace(&mut self.b, next);
        self.index += 1;
        Some((idx, val))
    }
}

/// Iterative strategy with O(1) auxiliary state.
///
/// Two rolling values seeded at F(0), F(1) are advanced n-1 times; no
/// cache is retained, so every call costs O(n) additions. This is the
/// baseline correctness oracle the other strategies are tested against.
pub struct RollingIterative;

impl RollingIterative {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for RollingIterative {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RollingIterative {
    fn compute(&mut self, n: u64) -> BigUint {
        if n < 2 {
            return BigUint::from(n);
        }
        let mut prev = BigUint::zero();
        let mut curr = BigUint::one();
        for _ in 2..=n {
            let next = &prev + &curr;
            prev = std::mem::replace(&mut curr, next);
        }
        curr
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }
}
