//! Closed-form (Binet/Lucas) strategy.
//!
//! ```text
//!         φⁿ − ψⁿ
//! F(n) = ---------,   φ = (1+√5)/2,   ψ = (1−√5)/2
//!           √5
//! ```
//!
//! Evaluated in fixed-point decimal arithmetic (see [`crate::decimal`])
//! rather than floating point: √5 is taken at full working precision by
//! integer square root, so no fixed-width intermediate caps the
//! attainable accuracy.

use num_bigint::BigUint;

use crate::constants::CLOSED_FORM_ADVISORY_CEILING;
use crate::decimal::FixedCtx;
use crate::strategy::Strategy;

/// Closed-form strategy: approximate in high-precision decimals, then
/// extract the exact nearest integer.
///
/// Pure: the result depends only on n and the working precision, which
/// itself is derived from n. The advisory ceiling of 500 marks the
/// documented comparison domain; the scaled precision keeps results
/// exact there with a wide margin.
pub struct ClosedForm;

impl ClosedForm {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Working precision, in fractional decimal digits, for index n.
    ///
    /// φⁿ carries about n·log₁₀φ ≈ 0.209·n significant digits, so n/4
    /// fractional digits outpace the growth of the integer part, and 32
    /// guard digits absorb the rounding of the O(log n) multiplications
    /// in the exponentiation chain.
    fn working_scale(n: u64) -> u32 {
        u32::try_from(n / 4 + 32).unwrap_or(u32::MAX)
    }

    fn fib(n: u64) -> BigUint {
        let scale = Self::working_scale(n);
        tracing::debug!(n, scale, "closed-form working precision");
        let ctx = FixedCtx::new(scale);
        let sqrt5 = ctx.sqrt_of(5);
        let phi = (ctx.one() + &sqrt5) / 2;
        let psi = (ctx.one() - &sqrt5) / 2;

        // φⁿ − ψⁿ is non-negative for every n: |ψ| < 1 < φ.
        let pq = ctx.pow(&phi, n) - ctx.pow(&psi, n);
        ctx.to_nearest_int(&pq, &sqrt5).magnitude().clone()
    }
}

impl Default for ClosedForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for ClosedForm {
    fn compute(&mut self, n: u64) -> BigUint {
        Self::fib(n)
    }

    fn name(&self) -> &'static str {
        "ClosedForm"
    }

    fn advisory_ceiling(&self) -> Option<u64> {
        Some(CLOSED_FORM_ADVISORY_CEILING)
    }
}
