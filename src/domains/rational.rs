//! The field of rational numbers with arbitrary-precision elements.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use rand::Rng;
use rug::ops::Pow;
use rug::{Integer as MultiPrecisionInteger, Rational as MultiPrecisionRational};

use super::{EuclideanDomain, Field, Ring};

/// The field of rational numbers.
pub type Q = RationalField;
/// The field of rational numbers.
pub const Q: RationalField = RationalField::new();

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RationalField;

impl RationalField {
    pub const fn new() -> RationalField {
        RationalField
    }
}

impl Default for RationalField {
    fn default() -> Self {
        Self::new()
    }
}

/// An arbitrary-precision rational number, always in canonical form:
/// the denominator is positive and coprime with the numerator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Rational(MultiPrecisionRational);

impl Rational {
    /// Create the rational `num / den`.
    ///
    /// # Panics
    ///
    /// Panics when `den` is zero.
    pub fn new(num: i64, den: i64) -> Rational {
        Rational(MultiPrecisionRational::from((num, den)))
    }

    pub fn zero() -> Rational {
        Rational(MultiPrecisionRational::new())
    }

    pub fn one() -> Rational {
        Rational(MultiPrecisionRational::from(1))
    }

    pub fn is_zero(&self) -> bool {
        self.0.cmp0() == std::cmp::Ordering::Equal
    }

    pub fn is_one(&self) -> bool {
        self.0 == 1u32
    }

    pub fn is_negative(&self) -> bool {
        self.0.cmp0() == std::cmp::Ordering::Less
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn numerator(&self) -> &MultiPrecisionInteger {
        self.0.numer()
    }

    pub fn denominator(&self) -> &MultiPrecisionInteger {
        self.0.denom()
    }

    pub fn abs(&self) -> Rational {
        Rational(self.0.clone().abs())
    }

    /// The sign of the number: `-1`, `0` or `1`.
    pub fn sign(&self) -> i32 {
        match self.0.cmp0() {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        }
    }

    pub fn pow(&self, e: u32) -> Rational {
        Rational(self.0.clone().pow(e))
    }

    /// The multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics when the number is zero.
    pub fn inv(&self) -> Rational {
        Rational(self.0.clone().recip())
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    /// The exact rational value of a float. `None` for NaN or infinity.
    pub fn from_f64(value: f64) -> Option<Rational> {
        MultiPrecisionRational::from_f64(value).map(Rational)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Display for RationalField {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational(MultiPrecisionRational::from(value))
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Rational(MultiPrecisionRational::from(value))
    }
}

impl From<u32> for Rational {
    fn from(value: u32) -> Self {
        Rational(MultiPrecisionRational::from(value))
    }
}

impl From<(i64, i64)> for Rational {
    fn from((num, den): (i64, i64)) -> Self {
        Rational::new(num, den)
    }
}

impl From<MultiPrecisionInteger> for Rational {
    fn from(value: MultiPrecisionInteger) -> Self {
        Rational(MultiPrecisionRational::from(value))
    }
}

impl From<MultiPrecisionRational> for Rational {
    fn from(value: MultiPrecisionRational) -> Self {
        Rational(value)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Rational(self.0 + rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        Rational(self.0.clone() + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        Rational(self.0 - rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational(self.0.clone() - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational(self.0 * rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational(self.0.clone() * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Rational {
        Rational(self.0 / rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: &Rational) -> Rational {
        Rational(self.0.clone() / &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0.clone())
    }
}

impl Ring for RationalField {
    type Element = Rational;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a - b
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 += &b.0;
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 -= &b.0;
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 *= &b.0;
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        -a
    }

    fn zero(&self) -> Self::Element {
        Rational::zero()
    }

    fn one(&self) -> Self::Element {
        Rational::one()
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        if e > u32::MAX as u64 {
            panic!("Power exponent larger than 2^32: {}", e);
        }
        b.pow(e as u32)
    }

    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        let num = rng.gen_range(range.0..range.1);
        let den = rng.gen_range(1..range.1.max(2));
        Rational::new(num, den)
    }
}

impl EuclideanDomain for RationalField {
    fn rem(&self, _: &Self::Element, _: &Self::Element) -> Self::Element {
        Rational::zero()
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        (self.div(a, b), Rational::zero())
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let num = a.numerator().clone().gcd(b.numerator());
        let den = a.denominator().clone().lcm(b.denominator());
        Rational(MultiPrecisionRational::from((num, den)))
    }
}

impl Field for RationalField {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a / b
    }

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 /= &b.0;
    }

    fn inv(&self, a: &Self::Element) -> Self::Element {
        a.inv()
    }
}
