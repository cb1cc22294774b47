use std::ops::Mul;

/// An exact non-negative fraction.
///
/// Damage multipliers are products of small fixed ratios, so all damage math
/// can stay in integers: scaling an integer by a fraction and flooring the
/// result is exact, with none of the drift floating point would introduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    /// Creates a new fraction.
    ///
    /// The denominator must be nonzero.
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        assert!(denominator != 0);
        Self {
            numerator,
            denominator,
        }
    }

    /// The multiplicative identity.
    pub const fn whole(value: u64) -> Self {
        Self::new(value, 1)
    }

    /// Scales the given integer by this fraction, rounding down.
    pub fn scale_floor(&self, value: u64) -> u64 {
        value * self.numerator / self.denominator
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Self::Output {
        Self::new(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

#[cfg(test)]
mod fraction_test {
    use crate::Fraction;

    #[test]
    fn scales_and_floors() {
        assert_eq!(Fraction::new(1, 2).scale_floor(28), 14);
        assert_eq!(Fraction::new(1, 2).scale_floor(19), 9);
        assert_eq!(Fraction::new(3, 2).scale_floor(45), 67);
        assert_eq!(Fraction::new(7, 10).scale_floor(40), 28);
        assert_eq!(Fraction::whole(1).scale_floor(60), 60);
    }

    #[test]
    fn multiplies() {
        let product = Fraction::whole(2) * Fraction::whole(2);
        assert_eq!(product.scale_floor(120), 480);
        let product = Fraction::new(3, 2) * Fraction::new(7, 10);
        assert_eq!(product.scale_floor(100), 105);
    }
}
