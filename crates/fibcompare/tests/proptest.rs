//! Property-based tests: every strategy against the iterative oracle.

use num_bigint::BigUint;
use proptest::prelude::*;

use fibcompare_core::registry::{DefaultFactory, StrategyFactory};
use fibcompare_core::Strategy;

fn compute(name: &str, n: u64) -> BigUint {
    DefaultFactory::new()
        .create(name)
        .expect("registered strategy")
        .compute(n)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// The memoized family agrees with the oracle for random n.
    #[test]
    fn memoized_family_matches_oracle(n in 0u64..400) {
        let oracle = compute("iterative", n);
        prop_assert_eq!(&compute("bottom-up", n), &oracle, "bottom-up F({})", n);
        prop_assert_eq!(&compute("memo-vec", n), &oracle, "memo-vec F({})", n);
        prop_assert_eq!(&compute("memo-map", n), &oracle, "memo-map F({})", n);
    }

    /// Closed-form stays exact across its advisory domain.
    #[test]
    fn closed_form_matches_oracle(n in 0u64..=500) {
        prop_assert_eq!(compute("closed-form", n), compute("iterative", n), "F({})", n);
    }

    /// Naive recursion agrees with the oracle for small n.
    #[test]
    fn recursive_matches_oracle(n in 0u64..=22) {
        prop_assert_eq!(compute("recursive", n), compute("iterative", n), "F({})", n);
    }

    /// A second query on the same instance returns the same value.
    #[test]
    fn memoized_queries_are_idempotent(n in 0u64..300) {
        let factory = DefaultFactory::new();
        for name in ["bottom-up", "memo-vec", "memo-map"] {
            let mut strategy = factory.create(name).unwrap();
            let first = strategy.compute(n);
            let second = strategy.compute(n);
            prop_assert_eq!(first, second, "{} F({})", name, n);
        }
    }

    /// Mixed-order queries on one instance keep the cache consistent.
    #[test]
    fn interleaved_queries_stay_consistent(a in 0u64..200, b in 0u64..200) {
        let factory = DefaultFactory::new();
        for name in ["bottom-up", "memo-vec", "memo-map"] {
            let mut strategy = factory.create(name).unwrap();
            let first = strategy.compute(a);
            let other = strategy.compute(b);
            prop_assert_eq!(first, compute("iterative", a), "{} F({})", name, a);
            prop_assert_eq!(other, compute("iterative", b), "{} F({})", name, b);
        }
    }
}
