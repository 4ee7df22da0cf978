//! # fibcompare-core
//!
//! Fibonacci computation strategies over arbitrary-precision integers:
//! naive recursion, top-down memoization (indexed and associative),
//! bottom-up memoization, O(1)-state iteration, and the closed-form
//! Binet/Lucas formula in high-precision decimal arithmetic.
//!
//! All strategies share one numeric definition (F(0)=0, F(1)=1,
//! F(n)=F(n-1)+F(n-2)) and one result type, `num_bigint::BigUint`.
//! Timing, input, and presentation live in the surrounding crates.

pub mod binet;
pub mod bottom_up;
pub mod constants;
pub(crate) mod decimal;
pub mod error;
pub mod iterative;
pub mod memo_indexed;
pub mod memo_map;
pub mod recursive;
pub mod registry;
pub mod strategy;

// Re-exports
pub use constants::{
    CLOSED_FORM_ADVISORY_CEILING, MEMOIZED_ADVISORY_CEILING, RAMP_STRIDE,
    RECURSIVE_ADVISORY_CEILING,
};
pub use error::FibError;
pub use registry::{DefaultFactory, StrategyFactory};
pub use strategy::Strategy;

use num_bigint::BigUint;

/// Compute F(n) with the O(1)-state iterative strategy.
///
/// This is a convenience function for simple use cases. To compare
/// strategies or amortize a cache across queries, use the `Strategy`
/// implementations directly.
///
/// # Example
/// ```
/// assert_eq!(fibcompare_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibcompare_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    use iterative::RollingIterative;

    RollingIterative::new().compute(n)
}
