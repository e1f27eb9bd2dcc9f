//! Scenario tests for the public Fraction surface.
//!
//! Each module follows one group of operations through the public API only,
//! with the literal inputs the `fraction demo` command prints.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use fraction_core::{Fraction, FractionError, Over};

fn of(numerator: i32, denominator: i32) -> Fraction {
    Fraction::of(numerator, denominator).unwrap()
}

mod creation {
    use super::*;

    /// GIVEN: Literal numerators and denominators
    /// WHEN: Constructing through each public path
    /// THEN: Every path yields the canonical form
    #[test]
    fn creation_paths_agree() {
        assert_eq!(of(1, 2).to_string(), "1/2");
        assert_eq!(of(2, 3).to_string(), "2/3");
        assert_eq!(Fraction::of_int(8).to_string(), "8/1");
        assert_eq!(2_i32.over(4).unwrap().to_string(), "1/2");
    }

    /// GIVEN: A zero denominator
    /// WHEN: Constructing
    /// THEN: `InvalidArgument` is returned
    #[test]
    fn zero_denominator_is_invalid_argument() {
        assert!(matches!(
            Fraction::of(1, 0),
            Err(FractionError::InvalidArgument { numerator: 1 })
        ));
        assert!(matches!(
            7_i32.over(0),
            Err(FractionError::InvalidArgument { .. })
        ));
    }
}

mod operators {
    use super::*;

    #[test]
    fn unary() {
        assert_eq!(of(2, 4).pos().unwrap().to_string(), "1/2");
        assert_eq!((-of(2, 6)).unwrap().to_string(), "-1/3");
    }

    #[test]
    fn plus() {
        assert_eq!((of(1, 2) + of(2, 3)).unwrap(), of(7, 6));
        assert_eq!((of(1, 2) + 1).unwrap(), of(3, 2));
    }

    #[test]
    fn times() {
        assert_eq!((of(1, 2) * of(2, 3)).unwrap(), of(1, 3));
        assert_eq!((of(1, 2) * 2).unwrap(), of(1, 1));
    }

    /// GIVEN: A chain of operations
    /// WHEN: Propagating each step with `?`
    /// THEN: The result matches the hand-computed value
    #[test]
    fn chained_with_question_mark() -> fraction_core::Result<()> {
        let total = ((Fraction::of(1, 2)? + Fraction::of(1, 3)?)? * 6)?;
        assert_eq!(total, Fraction::of_int(5));
        Ok(())
    }
}

mod comparison {
    use super::*;

    #[test]
    fn compare() {
        assert!(of(3, 2) > of(2, 2));
        assert!(of(1, 2) <= of(2, 4));
        assert!(of(4, 6) >= of(2, 3));
    }

    #[test]
    fn equals() {
        assert_eq!(of(1, 2), of(2, 4));
        assert_eq!(of(1, 2), of(1, 2));
        assert_ne!(of(1, 3), of(3, 5));
    }

    #[test]
    fn range() {
        let range = of(1, 2)..=of(2, 3);
        assert!(range.contains(&of(1, 2)));
        assert!(range.contains(&of(2, 3)));
        assert!(range.contains(&of(7, 12)));
        assert!(!range.contains(&of(5, 6)));
    }
}

mod access {
    use super::*;

    #[test]
    fn copy() {
        let half = of(1, 2);
        assert_eq!(half.copy().build().unwrap().to_string(), "1/2");
        assert_eq!(half.copy().numerator(2).build().unwrap().to_string(), "2/2");
        assert_eq!(half.copy().denominator(3).build().unwrap().to_string(), "1/3");
        assert_eq!(
            half.copy().numerator(2).denominator(3).build().unwrap().to_string(),
            "2/3"
        );
    }

    #[test]
    fn components() {
        let (numerator, denominator): (i32, i32) = of(1, 2).into();
        assert_eq!((numerator, denominator), (1, 2));
        let (numerator, _): (i32, i32) = of(10, 30).into();
        assert_eq!(numerator, 1);
        let (_, denominator): (i32, i32) = of(10, 79).into();
        assert_eq!(denominator, 79);
    }

    /// GIVEN: A fraction
    /// WHEN: Indexing past the denominator
    /// THEN: The failure is captured as a value, not a crash
    #[test]
    fn get() {
        assert_eq!(of(1, 2).get(0), Ok(1));
        assert_eq!(of(1, 2).get(1), Ok(2));
        let captured = of(1, 2).get(2);
        assert_eq!(captured, Err(FractionError::IndexOutOfBounds { index: 2 }));
    }

    #[test]
    fn conversions() {
        assert_eq!(of(1, 2).round_to_int(), 1);
        assert_eq!(of(1, 2).round_to_long(), 1);
        assert!((of(1, 2).to_f32() - 0.5).abs() < f32::EPSILON);
        assert!((of(1, 2).to_f64() - 0.5).abs() < f64::EPSILON);
    }
}
