//! Property-based tests for Fraction invariants using proptest.
//!
//! Invariants tested:
//! - Normalization is idempotent
//! - Results are fully reduced with a positive denominator
//! - Zero denominators are always rejected
//! - Equal fractions hash alike
//! - Ordering agrees with the decimal value
//! - Arithmetic results stay canonical

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::{
    cmp::Ordering,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use fraction_core::{gcd, Fraction, FractionError};
use proptest::prelude::*;

fn fraction_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        max_shrink_iters: 256,
        ..ProptestConfig::default()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// STRATEGIES FOR GENERATING TEST DATA
// ═══════════════════════════════════════════════════════════════════════════

/// Terms small enough that sums and products never leave `i32`.
fn small_term() -> impl Strategy<Value = i32> {
    -10_000..=10_000_i32
}

fn nonzero_small_term() -> impl Strategy<Value = i32> {
    small_term().prop_filter("denominator must be non-zero", |d| *d != 0)
}

/// Any `(n, d)` the factory accepts, excluding the `i32::MIN` corner cases.
fn valid_terms() -> impl Strategy<Value = (i32, i32)> {
    (
        (i32::MIN + 1)..=i32::MAX,
        prop_oneof![(i32::MIN + 1)..=-1_i32, 1..=i32::MAX],
    )
}

fn small_fraction() -> impl Strategy<Value = Fraction> {
    (small_term(), nonzero_small_term())
        .prop_map(|(n, d)| Fraction::of(n, d).unwrap_or_else(|_| Fraction::of_int(0)))
}

fn hash_of(f: &Fraction) -> u64 {
    let mut hasher = DefaultHasher::new();
    f.hash(&mut hasher);
    hasher.finish()
}

fn assert_canonical(f: &Fraction) -> Result<(), TestCaseError> {
    prop_assert!(f.denominator() > 0, "denominator must be positive: {f}");
    prop_assert_eq!(
        gcd(i64::from(f.numerator()).abs(), i64::from(f.denominator())),
        1,
        "terms must be fully reduced: {}",
        f
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTY: Normalization
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(fraction_config())]

    #[test]
    fn prop_normalization_is_idempotent((n, d) in valid_terms()) {
        let once = Fraction::of(n, d).unwrap();
        let twice = Fraction::of(once.numerator(), once.denominator()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_result_is_reduced_with_positive_denominator((n, d) in valid_terms()) {
        let f = Fraction::of(n, d).unwrap();
        assert_canonical(&f)?;
        prop_assert!(f.is_canonical());
    }

    #[test]
    fn prop_result_preserves_value((n, d) in valid_terms()) {
        let f = Fraction::of(n, d).unwrap();
        // n/d == f.n/f.d  <=>  n * f.d == f.n * d
        prop_assert_eq!(
            i128::from(n) * i128::from(f.denominator()),
            i128::from(f.numerator()) * i128::from(d)
        );
    }

    #[test]
    fn prop_zero_denominator_rejected(n in any::<i32>()) {
        prop_assert_eq!(
            Fraction::of(n, 0),
            Err(FractionError::InvalidArgument { numerator: i64::from(n) })
        );
    }

    #[test]
    fn prop_scaled_terms_are_equal(f in small_fraction(), k in 1..=1_000_i32) {
        let scaled = Fraction::of(f.numerator() * k, f.denominator() * k).unwrap();
        prop_assert_eq!(scaled, f);
        prop_assert_eq!(hash_of(&scaled), hash_of(&f));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTY: Ordering, equality and hashing
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(fraction_config())]

    #[test]
    fn prop_equal_fractions_hash_alike(a in small_fraction(), b in small_fraction()) {
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn prop_canonical_equality_matches_order(a in small_fraction(), b in small_fraction()) {
        prop_assert_eq!(a == b, a.compare_to(&b) == Ordering::Equal);
    }

    #[test]
    fn prop_order_matches_decimal(a in small_fraction(), b in small_fraction()) {
        prop_assert_eq!(a.cmp(&b), a.decimal().total_cmp(&b.decimal()));
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTY: Arithmetic closure
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(fraction_config())]

    #[test]
    fn prop_sum_is_canonical_and_commutative(a in small_fraction(), b in small_fraction()) {
        let ab = (a + b).unwrap();
        let ba = (b + a).unwrap();
        assert_canonical(&ab)?;
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn prop_product_is_canonical_and_commutative(a in small_fraction(), b in small_fraction()) {
        let ab = (a * b).unwrap();
        let ba = (b * a).unwrap();
        assert_canonical(&ab)?;
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn prop_negation_is_additive_inverse(a in small_fraction()) {
        let sum = (a + (-a).unwrap()).unwrap();
        prop_assert_eq!(sum, Fraction::of_int(0));
    }

    #[test]
    fn prop_integer_operands_lift(a in small_fraction(), k in small_term()) {
        prop_assert_eq!((a + k).unwrap(), (a + Fraction::of_int(k)).unwrap());
        prop_assert_eq!((a * k).unwrap(), (a * Fraction::of_int(k)).unwrap());
    }

    #[test]
    fn prop_copy_never_reduces(a in small_fraction(), n in small_term(), d in nonzero_small_term()) {
        let copy = a.copy().numerator(n).denominator(d).build().unwrap();
        prop_assert_eq!(copy.to_pair(), (n, d));
    }
}
