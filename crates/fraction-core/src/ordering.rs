//! Ordering, equality and hashing
//!
//! Order is by decimal value; equality compares the stored terms; the hash is
//! taken from the decimal. For canonical fractions the three agree. A raw
//! [`Fraction::copy`] such as `2/4` orders equal to `1/2` and hashes like it,
//! yet is not `==` to it.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::fraction::Fraction;

impl Fraction {
    /// Compare by decimal value.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use fraction_core::Fraction;
    ///
    /// # fn main() -> fraction_core::Result<()> {
    /// assert_eq!(Fraction::of(3, 2)?.compare_to(&Fraction::of(2, 2)?), Ordering::Greater);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        // Denominators are never zero, so decimals are finite.
        self.decimal().total_cmp(&other.decimal())
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.numerator() == other.numerator() && self.denominator() == other.denominator()
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.decimal().to_bits().hash(state);
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}
