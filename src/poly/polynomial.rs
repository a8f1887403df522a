//! Sparse polynomials over the rationals, generic over the term kind.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

use ahash::{HashMap, HashMapExt};
use rug::Integer as MultiPrecisionInteger;

use crate::domains::rational::Rational;
use crate::Error;

use super::{Term, XTerm, XYTerm};

/// A sparse mapping from a basis [Term] to a nonzero rational coefficient.
///
/// Zero coefficients are never stored: every constructor and operation
/// merges duplicate terms and drops terms whose coefficient vanishes, so
/// structural equality is equality of the term maps.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial<T: Term> {
    coefficients: HashMap<T, Rational>,
}

impl<T: Term> Polynomial<T> {
    /// Build a polynomial from an arbitrary multiset of term/coefficient
    /// pairs. Duplicate terms are summed.
    pub fn from_terms(terms: impl IntoIterator<Item = (T, Rational)>) -> Self {
        let mut coefficients: HashMap<T, Rational> = HashMap::new();
        for (t, c) in terms {
            let entry = coefficients.entry(t).or_insert_with(Rational::zero);
            *entry = entry.clone() + c;
        }
        coefficients.retain(|_, c| !c.is_zero());
        Polynomial { coefficients }
    }

    /// The polynomial with no terms.
    pub fn zero() -> Self {
        Polynomial {
            coefficients: HashMap::new(),
        }
    }

    /// The degree-0 polynomial with the given value.
    pub fn constant(value: Rational) -> Self {
        Self::from_terms([(T::identity(), value)])
    }

    pub fn one() -> Self {
        Self::constant(Rational::one())
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The coefficient of `term`, or zero when the term is absent.
    pub fn coefficient(&self, term: &T) -> Rational {
        self.coefficients
            .get(term)
            .cloned()
            .unwrap_or_else(Rational::zero)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &Rational)> {
        self.coefficients.iter()
    }

    /// Multiply every coefficient by `factor`.
    pub fn mul_coeff(&self, factor: &Rational) -> Self {
        Self::from_terms(self.iter().map(|(t, c)| (*t, c * factor)))
    }

    /// Divide every coefficient by `divisor`.
    pub fn div_coeff(&self, divisor: &Rational) -> Result<Self, Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.mul_coeff(&divisor.inv()))
    }

    /// Raise to a nonnegative integer power by repeated squaring.
    pub fn raised_to(&self, mut power: u64) -> Self {
        let mut total = Self::one();
        let mut square = self.clone();
        while power > 0 {
            if power & 1 == 1 {
                total = &total * &square;
            }
            square = &square * &square;
            power >>= 1;
        }
        total
    }

    /// An equivalent polynomial with integer coefficients, obtained by
    /// multiplying through with the least common multiple of all
    /// coefficient denominators.
    pub fn to_integer_form(&self) -> Self {
        let mut lcm = MultiPrecisionInteger::from(1);
        for c in self.coefficients.values() {
            lcm = lcm.lcm(c.denominator());
        }
        self.mul_coeff(&Rational::from(lcm))
    }
}

impl Polynomial<XTerm> {
    /// Build a single-variable polynomial from big-endian coefficients,
    /// e.g. `[1, -3, 2]` for `x^2 - 3x + 2`.
    pub fn from_coefficients<R, I>(coefficients: I) -> Self
    where
        R: Into<Rational>,
        I: IntoIterator<Item = R>,
    {
        let coefficients: Vec<Rational> = coefficients.into_iter().map(Into::into).collect();
        Self::from_terms(
            coefficients
                .into_iter()
                .rev()
                .enumerate()
                .map(|(i, c)| (XTerm::new(i as u32), c)),
        )
    }

    /// The product of `(x - r)` over the given roots.
    pub fn from_roots<R, I>(roots: I) -> Self
    where
        R: Into<Rational>,
        I: IntoIterator<Item = R>,
    {
        roots.into_iter().fold(Self::one(), |acc, r| {
            &acc * &Self::from_coefficients([Rational::one(), -r.into()])
        })
    }

    /// The highest exponent with a nonzero coefficient, or 0 for the zero
    /// polynomial.
    pub fn degree(&self) -> u32 {
        self.coefficients
            .keys()
            .map(|t| t.power)
            .max()
            .unwrap_or(0)
    }

    /// The coefficient of the degree term, or zero for the zero polynomial.
    pub fn leading_coefficient(&self) -> Rational {
        if self.is_zero() {
            return Rational::zero();
        }
        self.coefficient(&XTerm::new(self.degree()))
    }

    /// Evaluate at `x`, exactly.
    pub fn evaluate(&self, x: &Rational) -> Rational {
        self.iter().fold(Rational::zero(), |acc, (t, c)| {
            acc + c * &x.pow(t.power)
        })
    }

    pub fn derivative(&self) -> Self {
        Self::from_terms(self.iter().filter(|(t, _)| t.power > 0).map(|(t, c)| {
            (XTerm::new(t.power - 1), c * &Rational::from(t.power))
        }))
    }

    /// Scale so the leading coefficient is 1. The zero polynomial is
    /// returned unchanged.
    pub fn to_monic_form(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        self.mul_coeff(&self.leading_coefficient().inv())
    }

    /// Reinterpret as a polynomial in the first of two variables.
    pub fn over_x(&self) -> Polynomial<XYTerm> {
        Polynomial::from_terms(self.iter().map(|(t, c)| (XYTerm::new(t.power, 0), c.clone())))
    }

    /// Reinterpret as a polynomial in the second of two variables.
    pub fn over_y(&self) -> Polynomial<XYTerm> {
        Polynomial::from_terms(self.iter().map(|(t, c)| (XYTerm::new(0, t.power), c.clone())))
    }

    /// Whether `self` divides `numerator` exactly.
    ///
    /// Long division with the remainder kept scaled: at every step the
    /// remainder is multiplied by the divisor's leading coefficient over
    /// their gcd, so integer inputs stay integral throughout.
    pub fn divides(&self, numerator: &Polynomial<XTerm>) -> Result<bool, Error> {
        if self.is_zero() {
            return Ok(false);
        }
        let d2 = self.degree();
        if d2 == 0 {
            return Ok(true);
        }

        let dt = self.leading_coefficient();
        let mut remainder = numerator.clone();
        loop {
            if remainder.is_zero() {
                break;
            }
            let d1 = remainder.degree();
            if d1 < d2 {
                break;
            }

            let nt = remainder.coefficient(&XTerm::new(d1));
            let g = gcd(&nt, &dt);
            let shift = Self::from_terms([(XTerm::new(d1 - d2), &nt / &g)]);
            remainder = &remainder.mul_coeff(&(&dt / &g)) - &(self * &shift);

            if !remainder.is_zero() && remainder.degree() == d1 {
                return Err(Error::Internal(
                    "remainder degree did not decrease during division",
                ));
            }
        }

        Ok(remainder.is_zero())
    }
}

/// gcd of numerators over lcm of denominators; for integers this is the
/// ordinary positive gcd.
fn gcd(a: &Rational, b: &Rational) -> Rational {
    if a.is_zero() {
        return b.abs();
    }
    if b.is_zero() {
        return a.abs();
    }
    let num = a.numerator().clone().gcd(b.numerator());
    let den = a.denominator().clone().lcm(b.denominator());
    Rational::from(rug::Rational::from((num, den)))
}

impl Polynomial<XYTerm> {
    /// Evaluate at `(x, y)`, exactly.
    pub fn evaluate_at(&self, x: &Rational, y: &Rational) -> Rational {
        self.iter().fold(Rational::zero(), |acc, (t, c)| {
            acc + c * &(x.pow(t.x_power) * y.pow(t.y_power))
        })
    }
}

impl<T: Term> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        Polynomial::from_terms(
            self.iter()
                .chain(rhs.iter())
                .map(|(t, c)| (*t, c.clone())),
        )
    }
}

impl<T: Term> Add for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self + &rhs
    }
}

impl<T: Term> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        self + &(-rhs)
    }
}

impl<T: Term> Sub for Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self - &rhs
    }
}

impl<T: Term> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial::from_terms(self.iter().map(|(t, c)| (*t, -c)))
    }
}

impl<T: Term> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

impl<T: Term> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        Polynomial::from_terms(self.iter().flat_map(|(t1, c1)| {
            rhs.iter().map(move |(t2, c2)| (t1.times(t2), c1 * c2))
        }))
    }
}

impl<T: Term> Mul for Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self * &rhs
    }
}

impl<T: Term> Display for Polynomial<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms: Vec<_> = self.coefficients.iter().collect();
        terms.sort_by(|a, b| b.0.cmp(a.0));

        let mut first = true;
        for (t, c) in terms {
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            let factor = t.to_string();
            if factor.is_empty() {
                write!(f, "{}", c)?;
            } else if c.is_one() {
                write!(f, "{}", factor)?;
            } else if (-c).is_one() {
                write!(f, "-{}", factor)?;
            } else {
                write!(f, "{}{}", c, factor)?;
            }
        }
        Ok(())
    }
}
