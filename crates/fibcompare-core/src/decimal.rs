//! Fixed-point decimal arithmetic for the closed-form strategy.
//!
//! Values are signed big-integer mantissas sharing one power-of-ten
//! scale: a mantissa m at scale s represents m / 10^s. All operations
//! round to nearest on rescale, and the final integer extraction goes
//! through exact quotient/remainder decomposition rather than any
//! floating-point rounding.

use num_bigint::{BigInt, BigUint};
use num_integer::{Integer, Roots};
use num_traits::Signed;

/// Fixed-point context carrying the shared scale.
pub(crate) struct FixedCtx {
    /// 10^scale, the mantissa representing 1.0.
    unit: BigInt,
}

impl FixedCtx {
    pub fn new(scale: u32) -> Self {
        Self {
            unit: BigInt::from(BigUint::from(10u32).pow(scale)),
        }
    }

    /// The mantissa representing 1.0 at this scale.
    pub fn one(&self) -> BigInt {
        self.unit.clone()
    }

    /// Square root of a small non-negative integer, at full scale.
    ///
    /// Computed as the integer square root of v·10^(2·scale), so every
    /// digit of the working precision is exact, with no floating-point seed.
    pub fn sqrt_of(&self, v: u32) -> BigInt {
        let radicand = BigUint::from(v) * self.unit.magnitude() * self.unit.magnitude();
        BigInt::from(radicand.sqrt())
    }

    /// Fixed-point multiplication with round-to-nearest rescale.
    pub fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.rescale(a * b)
    }

    /// Fixed-point exponentiation by squaring.
    pub fn pow(&self, base: &BigInt, mut exp: u64) -> BigInt {
        let mut result = self.one();
        let mut base = base.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(&result, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = self.mul(&base, &base);
            }
        }
        result
    }

    /// Nearest integer to num/den, via exact quotient/remainder
    /// decomposition. Both operands must be non-negative.
    pub fn to_nearest_int(&self, num: &BigInt, den: &BigInt) -> BigInt {
        debug_assert!(!num.is_negative() && den.is_positive());
        let (quotient, remainder) = num.div_rem(den);
        if (&remainder << 1u32) >= *den {
            quotient + 1
        } else {
            quotient
        }
    }

    /// Drop one scale factor from a double-scaled product, rounding to
    /// nearest with ties away from zero.
    fn rescale(&self, x: BigInt) -> BigInt {
        let half = &self.unit >> 1u32;
        if x.is_negative() {
            (x - half) / &self.unit
        } else {
            (x + half) / &self.unit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_of_five_prefix() {
        let ctx = FixedCtx::new(20);
        // √5 = 2.2360679774997896964...
        assert_eq!(ctx.sqrt_of(5).to_string(), "223606797749978969640");
    }

    #[test]
    fn sqrt_of_square_is_exact() {
        let ctx = FixedCtx::new(10);
        assert_eq!(ctx.sqrt_of(4), BigInt::from(2) * ctx.one());
    }

    #[test]
    fn mul_rounds_to_nearest() {
        let ctx = FixedCtx::new(4);
        // 1.5 * 1.5 = 2.25
        let a = BigInt::from(15_000);
        assert_eq!(ctx.mul(&a, &a), BigInt::from(22_500));
    }

    #[test]
    fn mul_handles_negative_operands() {
        let ctx = FixedCtx::new(4);
        let a = BigInt::from(-15_000);
        let b = BigInt::from(20_000);
        assert_eq!(ctx.mul(&a, &b), BigInt::from(-30_000));
    }

    #[test]
    fn pow_zero_is_one() {
        let ctx = FixedCtx::new(8);
        let base = BigInt::from(123_456_789);
        assert_eq!(ctx.pow(&base, 0), ctx.one());
    }

    #[test]
    fn pow_matches_repeated_mul() {
        let ctx = FixedCtx::new(12);
        let base = ctx.sqrt_of(2);
        let squared = ctx.pow(&base, 2);
        // (√2)² = 2 up to the last digit of the scale.
        let two = BigInt::from(2) * ctx.one();
        let diff = (&squared - &two).abs();
        assert!(diff <= BigInt::from(2), "diff {diff}");
    }

    #[test]
    fn pow_negative_base_alternates_sign() {
        let ctx = FixedCtx::new(6);
        let minus_half = -(ctx.one() >> 1u32);
        assert!(ctx.pow(&minus_half, 3).is_negative());
        assert!(ctx.pow(&minus_half, 4).is_positive());
    }

    #[test]
    fn to_nearest_int_rounds_both_ways() {
        let ctx = FixedCtx::new(2);
        let den = BigInt::from(400);
        // 899/400 = 2.2475 -> 2; 1000/400 = 2.5 -> 3
        assert_eq!(ctx.to_nearest_int(&BigInt::from(899), &den), BigInt::from(2));
        assert_eq!(
            ctx.to_nearest_int(&BigInt::from(1000), &den),
            BigInt::from(3)
        );
    }
}
