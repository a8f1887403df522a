//! Numbers represented implicitly, as the roots of integer polynomials.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::domains::rational::Rational;
use crate::poly::polynomial::Polynomial;
use crate::poly::{compose, isolate, XTerm};
use crate::Error;

/// A real algebraic number, represented by a single-variable polynomial
/// constraint with integer coefficients whose root set contains the value.
///
/// This allows exact arithmetic on radicals like the third root of two:
/// sums and products of two such numbers are computed by deriving a new
/// constraint from the operands' constraints, never by approximating.
///
/// The constraint is not guaranteed minimal. Arithmetic can introduce
/// spurious roots (squaring the constraint of `sqrt(2)` also admits
/// `-sqrt(2)`), and [approximates](PolyNumber::approximates) reports every
/// real root of the constraint, not only the intended value. Root
/// multiplicity is not tracked. Experimental and slow for high degrees.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PolyNumber {
    constraint: Polynomial<XTerm>,
}

impl PolyNumber {
    /// Wrap a constraint polynomial, normalizing it to integer
    /// coefficients. Fails when the constraint is constant, since then it
    /// has no solutions.
    pub fn new(constraint: Polynomial<XTerm>) -> Result<PolyNumber, Error> {
        if constraint.degree() < 1 {
            return Err(Error::NoSolutions);
        }
        Ok(Self::from_constraint(constraint))
    }

    /// Internal constructor for constraints already known to have degree
    /// at least 1.
    fn from_constraint(constraint: Polynomial<XTerm>) -> PolyNumber {
        PolyNumber {
            constraint: constraint.to_integer_form(),
        }
    }

    /// The number with the exact rational value `value`, constrained by
    /// `den*x - num`.
    pub fn from_rational(value: impl Into<Rational>) -> PolyNumber {
        let value = value.into();
        let den = Rational::from(value.denominator().clone());
        let num = Rational::from(value.numerator().clone());
        Self::from_constraint(Polynomial::from_terms([
            (XTerm::new(1), den),
            (XTerm::new(0), -num),
        ]))
    }

    /// The number constrained to the given rational values, i.e. with the
    /// constraint `(x - r1)(x - r2)...`. Fails on an empty root list.
    pub fn from_roots<R, I>(roots: I) -> Result<PolyNumber, Error>
    where
        R: Into<Rational>,
        I: IntoIterator<Item = R>,
    {
        Self::new(Polynomial::from_roots(roots))
    }

    pub fn zero() -> PolyNumber {
        Self::from_rational(0i64)
    }

    pub fn constraint(&self) -> &Polynomial<XTerm> {
        &self.constraint
    }

    /// The default tolerance used by the `*_near` and approximation
    /// methods: one millionth.
    pub fn default_epsilon() -> Rational {
        Rational::new(1, 1_000_000)
    }

    /// The reciprocal: if `r` is a root of the constraint, `1/r` is a root
    /// of the constraint with its coefficients reversed.
    ///
    /// Fails when the number's value could be zero.
    pub fn multiplicative_inverse(&self) -> Result<PolyNumber, Error> {
        if self.has_value(Rational::zero()) {
            return Err(Error::DivisionByZero);
        }

        let degree = self.constraint.degree();
        Ok(Self::from_constraint(Polynomial::from_terms(
            self.constraint
                .iter()
                .map(|(t, c)| (XTerm::new(degree - t.power), c.clone())),
        )))
    }

    /// The `nth` root: if `r^nth` satisfies the constraint, `r` satisfies
    /// the constraint with every exponent scaled by `nth`.
    ///
    /// An even root of a negative number yields a constraint without real
    /// roots; its approximation set is empty.
    pub fn root(&self, nth: u32) -> Result<PolyNumber, Error> {
        if nth < 1 {
            return Err(Error::InvalidArgument("nth must be at least 1"));
        }
        Ok(Self::from_constraint(Polynomial::from_terms(
            self.constraint
                .iter()
                .map(|(t, c)| (XTerm::new(t.power * nth), c.clone())),
        )))
    }

    /// Raise to an integer power. Negative powers go through the
    /// multiplicative inverse and fail when the value could be zero.
    pub fn raise_to(&self, power: i64) -> Result<PolyNumber, Error> {
        if power == 0 {
            return Ok(Self::from_rational(1i64));
        }
        let base = if power < 0 {
            self.multiplicative_inverse()?
        } else {
            self.clone()
        };
        let mut result = base.clone();
        for _ in 1..power.unsigned_abs() {
            result = &result * &base;
        }
        Ok(result)
    }

    /// Whether `value` satisfies the constraint exactly.
    pub fn has_value(&self, value: impl Into<Rational>) -> bool {
        self.constraint.evaluate(&value.into()).is_zero()
    }

    /// Whether the constraint evaluates to within the default tolerance of
    /// zero at `value`.
    pub fn has_value_near(&self, value: impl Into<Rational>) -> bool {
        self.has_value_within(value, &Self::default_epsilon())
    }

    /// Whether the constraint evaluates to within `epsilon` of zero at
    /// `value`.
    pub fn has_value_within(&self, value: impl Into<Rational>, epsilon: &Rational) -> bool {
        let y = self.constraint.evaluate(&value.into()).abs();
        &y < epsilon
    }

    /// Floating approximations of every real root of the constraint, in
    /// increasing order, using the default tolerance.
    pub fn approximates(&self) -> Result<Vec<f64>, Error> {
        self.approximates_within(&Self::default_epsilon())
    }

    /// Floating approximations of every real root of the constraint, each
    /// the midpoint of an isolated interval of width at most `epsilon`.
    pub fn approximates_within(&self, epsilon: &Rational) -> Result<Vec<f64>, Error> {
        let ranges = isolate::approximate_roots(&self.constraint, epsilon)?;
        Ok(ranges.iter().map(|r| r.midpoint().to_f64()).collect())
    }
}

impl From<i64> for PolyNumber {
    fn from(value: i64) -> Self {
        PolyNumber::from_rational(value)
    }
}

impl From<Rational> for PolyNumber {
    fn from(value: Rational) -> Self {
        PolyNumber::from_rational(value)
    }
}

impl Neg for &PolyNumber {
    type Output = PolyNumber;

    // Negating every root of P(x) is substituting -x, which flips the
    // sign of the odd-exponent coefficients.
    fn neg(self) -> PolyNumber {
        PolyNumber::from_constraint(Polynomial::from_terms(self.constraint.iter().map(
            |(t, c)| {
                let c = if t.power % 2 == 0 { c.clone() } else { -c };
                (*t, c)
            },
        )))
    }
}

impl Neg for PolyNumber {
    type Output = PolyNumber;

    fn neg(self) -> PolyNumber {
        -&self
    }
}

impl Add for &PolyNumber {
    type Output = PolyNumber;

    fn add(self, rhs: &PolyNumber) -> PolyNumber {
        PolyNumber::from_constraint(compose::add_roots(&self.constraint, &rhs.constraint))
    }
}

impl Add for PolyNumber {
    type Output = PolyNumber;

    fn add(self, rhs: PolyNumber) -> PolyNumber {
        &self + &rhs
    }
}

impl Sub for &PolyNumber {
    type Output = PolyNumber;

    fn sub(self, rhs: &PolyNumber) -> PolyNumber {
        self + &(-rhs)
    }
}

impl Sub for PolyNumber {
    type Output = PolyNumber;

    fn sub(self, rhs: PolyNumber) -> PolyNumber {
        &self - &rhs
    }
}

impl Mul for &PolyNumber {
    type Output = PolyNumber;

    fn mul(self, rhs: &PolyNumber) -> PolyNumber {
        PolyNumber::from_constraint(compose::mul_roots(&self.constraint, &rhs.constraint))
    }
}

impl Mul for PolyNumber {
    type Output = PolyNumber;

    fn mul(self, rhs: PolyNumber) -> PolyNumber {
        &self * &rhs
    }
}

impl Div for &PolyNumber {
    type Output = PolyNumber;

    /// # Panics
    ///
    /// Panics when the divisor's value could be zero; use
    /// [multiplicative_inverse](PolyNumber::multiplicative_inverse) to
    /// handle that case.
    fn div(self, rhs: &PolyNumber) -> PolyNumber {
        match rhs.multiplicative_inverse() {
            Ok(inverse) => self * &inverse,
            Err(_) => panic!("Cannot divide by a number whose value can be zero"),
        }
    }
}

impl Div for PolyNumber {
    type Output = PolyNumber;

    fn div(self, rhs: PolyNumber) -> PolyNumber {
        &self / &rhs
    }
}

impl Display for PolyNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.constraint.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_roots(roots: &[i64]) -> PolyNumber {
        PolyNumber::from_roots(roots.iter().copied()).unwrap()
    }

    #[test]
    fn constant_constraints_are_rejected() {
        assert!(matches!(
            PolyNumber::new(Polynomial::from_coefficients([3i64])),
            Err(Error::NoSolutions)
        ));
        assert!(matches!(
            PolyNumber::new(Polynomial::zero()),
            Err(Error::NoSolutions)
        ));
    }

    #[test]
    fn conversion_from_literals() {
        let x = PolyNumber::from(2);
        assert!(x.has_value(2));
        let approx = x.approximates().unwrap();
        assert_eq!(approx.len(), 1);
        assert!((approx[0] - 2.0).abs() < 0.001);

        let y = PolyNumber::from_rational(Rational::new(3, 5));
        assert!(y.has_value(Rational::new(3, 5)));
        let approx = y.approximates().unwrap();
        assert_eq!(approx.len(), 1);
        assert!((approx[0] - 0.6).abs() < 0.001);
    }

    #[test]
    fn constraints_are_normalized_to_integer_form() {
        let x = PolyNumber::new(Polynomial::from_coefficients([
            Rational::new(1, 2),
            Rational::new(-3, 4),
        ]))
        .unwrap();
        assert_eq!(x.constraint(), &Polynomial::from_coefficients([2i64, -3]));
    }

    #[test]
    fn roots_and_powers_are_inverse() {
        for nth in 1..4u32 {
            for n in 1..3i64 {
                let r = PolyNumber::from(n).root(nth).unwrap();
                let approx = r.approximates().unwrap();
                let expected = (n as f64).powf(1.0 / nth as f64);
                assert!((approx.last().unwrap() - expected).abs() < 0.00001);
                assert!(r.raise_to(nth as i64).unwrap().has_value(n));
            }
        }
    }

    #[test]
    fn even_root_of_a_negative_number_has_no_approximations() {
        let r = PolyNumber::from(-1).root(2).unwrap();
        assert!(r.approximates().unwrap().is_empty());
    }

    #[test]
    fn root_rejects_zeroth_root() {
        assert!(matches!(
            PolyNumber::from(2).root(0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn negation() {
        assert!((-PolyNumber::from(1)).has_value(-1));
        assert!((-PolyNumber::zero()).has_value(0));

        let p = -from_roots(&[1, 2, 3]);
        assert!(p.has_value(-1));
        assert!(p.has_value(-2));
        assert!(p.has_value(-3));
        assert_eq!(p.constraint().degree(), 3);
    }

    #[test]
    fn multiplicative_inverse() {
        assert!(PolyNumber::from(1)
            .multiplicative_inverse()
            .unwrap()
            .has_value(1));
        assert!(PolyNumber::from(2)
            .multiplicative_inverse()
            .unwrap()
            .has_value(Rational::new(1, 2)));

        let p = PolyNumber::new(Polynomial::from_roots([
            Rational::from(1i64),
            Rational::from(2i64),
            Rational::new(3, 5),
        ]))
        .unwrap()
        .multiplicative_inverse()
        .unwrap();
        assert!(p.has_value(1));
        assert!(p.has_value(Rational::new(1, 2)));
        assert!(p.has_value(Rational::new(5, 3)));
        assert_eq!(p.constraint().degree(), 3);
    }

    #[test]
    fn inverse_of_zero_fails() {
        assert!(matches!(
            PolyNumber::zero().multiplicative_inverse(),
            Err(Error::DivisionByZero)
        ));
    }

    #[test]
    fn inverse_is_an_involution_on_root_sets() {
        let v = PolyNumber::new(Polynomial::from_roots([
            Rational::from(2i64),
            Rational::new(3, 5),
        ]))
        .unwrap();
        let back = v
            .multiplicative_inverse()
            .unwrap()
            .multiplicative_inverse()
            .unwrap();
        assert!(back.has_value(2));
        assert!(back.has_value(Rational::new(3, 5)));
        assert_eq!(back.constraint().degree(), v.constraint().degree());
    }

    #[test]
    fn addition_of_rationals() {
        let x = PolyNumber::from(1) + PolyNumber::from(2);
        assert!(x.has_value(3));

        let y = PolyNumber::from_rational(Rational::new(2, 3))
            + PolyNumber::from_rational(Rational::new(5, 7));
        assert!(y.has_value(Rational::new(2 * 7 + 5 * 3, 21)));
    }

    #[test]
    fn addition_of_radicals() {
        let x1 = PolyNumber::from(3).root(3).unwrap();
        let x2 = PolyNumber::from(5).root(5).unwrap();
        let x3 = &x1 + &x2;
        let expected = 3f64.powf(1.0 / 3.0) + 5f64.powf(1.0 / 5.0);
        assert!(x3.has_value_near(Rational::from_f64(expected).unwrap()));
    }

    #[test]
    fn addition_of_root_sets() {
        let x = from_roots(&[1, 4, 7]) + from_roots(&[1, 2, 3]);
        assert_eq!(x.constraint().degree(), 9);
        for sum in 2..=10i64 {
            assert!(x.has_value(sum), "expected {} to be a value", sum);
        }
    }

    #[test]
    fn subtraction() {
        assert!((PolyNumber::from(1) - PolyNumber::from(2)).has_value(-1));

        let y = PolyNumber::from_rational(Rational::new(2, 3))
            - PolyNumber::from_rational(Rational::new(5, 7));
        assert!(y.has_value(Rational::new(2 * 7 - 5 * 3, 21)));

        let x1 = PolyNumber::from(3).root(3).unwrap();
        let x2 = PolyNumber::from(5).root(5).unwrap();
        let expected = 3f64.powf(1.0 / 3.0) - 5f64.powf(1.0 / 5.0);
        assert!((&x1 - &x2).has_value_near(Rational::from_f64(expected).unwrap()));
    }

    #[test]
    fn multiplication() {
        let x = PolyNumber::from_rational(Rational::new(2, 3))
            * PolyNumber::from_rational(Rational::new(5, 7));
        assert!(x.has_value(Rational::new(10, 21)));

        let y = from_roots(&[1, 4, 7]) * from_roots(&[1, 2, 3]);
        assert_eq!(y.constraint().degree(), 9);
        for product in [1i64, 2, 3, 4, 8, 12, 7, 14, 21] {
            assert!(y.has_value(product), "expected {} to be a value", product);
        }
    }

    #[test]
    fn division() {
        let x = PolyNumber::from(10) / PolyNumber::from(4);
        assert!(x.has_value(Rational::new(5, 2)));
    }

    #[test]
    #[should_panic(expected = "Cannot divide")]
    fn division_by_zero_panics() {
        let _ = PolyNumber::from(1) / PolyNumber::zero();
    }

    #[test]
    fn negative_and_zero_powers() {
        let x = PolyNumber::from(2);
        assert!(x.raise_to(0).unwrap().has_value(1));
        assert!(x.raise_to(3).unwrap().has_value(8));
        assert!(x.raise_to(-2).unwrap().has_value(Rational::new(1, 4)));
        assert!(PolyNumber::zero().raise_to(-1).is_err());
    }

    #[test]
    fn combined_operations() {
        let x = PolyNumber::from(5);
        let y = &(&x.root(3).unwrap() + &x.root(2).unwrap()) - &PolyNumber::from(1);
        let expected = 5f64.powf(1.0 / 3.0) + 5f64.sqrt() - 1.0;
        assert!(y.has_value_near(Rational::from_f64(expected).unwrap()));
    }

    #[test]
    fn display_shows_the_constraint() {
        assert_eq!(PolyNumber::from(2).to_string(), "x + -2");
    }
}
