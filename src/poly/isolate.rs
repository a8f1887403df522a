//! Isolation of the real roots of a single-variable polynomial into
//! disjoint intervals.
//!
//! The roots of the derivative split the real line into monotonic pieces;
//! each piece is then searched by exact bisection. Interval endpoints stay
//! rational throughout, so no precision is lost before the caller chooses
//! to approximate.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::domains::rational::Rational;
use crate::Error;

use super::polynomial::Polynomial;
use super::XTerm;

/// A contiguous set of values bounded below and above, with each bound
/// either included or excluded. Equal bounds denote a single point and
/// must be included.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Interval {
    min: Rational,
    max: Rational,
    exclude_min: bool,
    exclude_max: bool,
}

impl Interval {
    /// # Panics
    ///
    /// Panics when `min > max`, or when the bounds are equal but marked
    /// exclusive.
    pub fn new(min: Rational, max: Rational, exclude_min: bool, exclude_max: bool) -> Interval {
        assert!(min <= max, "min > max");
        assert!(
            min != max || (!exclude_min && !exclude_max),
            "strict bound but min == max"
        );
        Interval {
            min,
            max,
            exclude_min,
            exclude_max,
        }
    }

    /// The degenerate interval holding exactly one value.
    pub fn point(value: Rational) -> Interval {
        Interval {
            min: value.clone(),
            max: value,
            exclude_min: false,
            exclude_max: false,
        }
    }

    pub fn min(&self) -> &Rational {
        &self.min
    }

    pub fn max(&self) -> &Rational {
        &self.max
    }

    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    pub fn midpoint(&self) -> Rational {
        (&self.min + &self.max) / Rational::from(2i64)
    }

    pub fn contains(&self, value: &Rational) -> bool {
        match value.cmp(&self.min) {
            Ordering::Less => return false,
            Ordering::Equal if self.exclude_min => return false,
            _ => {}
        }
        match value.cmp(&self.max) {
            Ordering::Greater => false,
            Ordering::Equal if self.exclude_max => false,
            _ => true,
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_point() {
            return write!(f, "{}", self.min);
        }
        write!(
            f,
            "{}{}, {}{}",
            if self.exclude_min { "(" } else { "[" },
            self.min,
            self.max,
            if self.exclude_max { ")" } else { "]" },
        )
    }
}

/// Partition the real roots of `poly` into disjoint intervals, each
/// containing exactly one root (up to `epsilon`), ordered by increasing
/// lower bound.
///
/// Fails when `epsilon` is not positive or when `poly` is identically
/// zero.
pub fn approximate_roots(
    poly: &Polynomial<XTerm>,
    epsilon: &Rational,
) -> Result<Vec<Interval>, Error> {
    if epsilon.sign() <= 0 {
        return Err(Error::InvalidArgument("epsilon must be positive"));
    }
    if poly.is_zero() {
        return Err(Error::EveryValueIsARoot);
    }
    Ok(isolate(poly, epsilon))
}

/// Recursion over derivatives; `poly` is nonzero. Returns sorted,
/// deduplicated intervals.
fn isolate(poly: &Polynomial<XTerm>, epsilon: &Rational) -> Vec<Interval> {
    let degree = poly.degree();
    if degree == 0 {
        return Vec::new();
    }
    if degree == 1 {
        let root = -(poly.coefficient(&XTerm::new(0)) / poly.coefficient(&XTerm::new(1)));
        return vec![Interval::point(root)];
    }

    let critical = isolate(&poly.derivative(), epsilon);

    // No critical points means the polynomial is strictly monotonic;
    // search outward from zero in both directions.
    let (leftmost, rightmost) = match (critical.first(), critical.last()) {
        (Some(first), Some(last)) => (first.min().clone(), last.max().clone()),
        _ => (Rational::zero(), Rational::zero()),
    };

    let mut found = Vec::new();
    if let Some(r) = bisect_lower(poly, &leftmost, epsilon) {
        found.push(r);
    }
    if let Some(r) = bisect_upper(poly, &rightmost, epsilon) {
        found.push(r);
    }

    // A critical point sitting (approximately) on the axis is a repeated
    // or near-repeated root.
    for region in &critical {
        let y = poly.evaluate(&region.midpoint());
        if y.abs().cmp(epsilon) == Ordering::Less {
            found.push(region.clone());
        }
    }

    for pair in critical.windows(2) {
        if let Some(r) = bisect(poly, pair[0].max(), pair[1].min(), epsilon) {
            found.push(r);
        }
    }

    found.sort_by(|a, b| a.min().cmp(b.min()));
    found.dedup();
    found
}

/// Search left of `max_x` for a sign change against the polynomial's sign
/// at negative infinity, doubling the step width until one is found.
fn bisect_lower(
    poly: &Polynomial<XTerm>,
    max_x: &Rational,
    epsilon: &Rational,
) -> Option<Interval> {
    let parity = if poly.degree() % 2 == 0 { 1 } else { -1 };
    let decreasing_limit_sign = poly.leading_coefficient().sign() * parity;

    let max_sign = poly.evaluate(max_x).sign();
    if max_sign == decreasing_limit_sign {
        return None;
    }
    if max_sign == 0 {
        return Some(Interval::point(max_x.clone()));
    }

    let mut step = Rational::one();
    loop {
        step = step * Rational::from(2i64);
        let min_x = max_x - &step;
        if poly.evaluate(&min_x).sign() == decreasing_limit_sign {
            return bisect(poly, &min_x, max_x, epsilon);
        }
    }
}

/// Mirror of [bisect_lower], searching right of `min_x` against the sign
/// at positive infinity.
fn bisect_upper(
    poly: &Polynomial<XTerm>,
    min_x: &Rational,
    epsilon: &Rational,
) -> Option<Interval> {
    let increasing_limit_sign = poly.leading_coefficient().sign();

    let min_sign = poly.evaluate(min_x).sign();
    if min_sign == increasing_limit_sign {
        return None;
    }
    if min_sign == 0 {
        return Some(Interval::point(min_x.clone()));
    }

    let mut step = Rational::one();
    loop {
        step = step * Rational::from(2i64);
        let max_x = min_x + &step;
        if poly.evaluate(&max_x).sign() == increasing_limit_sign {
            return bisect(poly, min_x, &max_x, epsilon);
        }
    }
}

/// Halve the interval until a root is pinned down to within `epsilon` or
/// hit exactly. Yields nothing when both endpoints have the same nonzero
/// sign.
fn bisect(
    poly: &Polynomial<XTerm>,
    min_x: &Rational,
    max_x: &Rational,
    epsilon: &Rational,
) -> Option<Interval> {
    let min_sign = poly.evaluate(min_x).sign();
    let max_sign = poly.evaluate(max_x).sign();
    if min_sign == 0 {
        return Some(Interval::point(min_x.clone()));
    }
    if max_sign == 0 {
        return Some(Interval::point(max_x.clone()));
    }
    if min_sign == max_sign {
        return None;
    }

    let mut lo = min_x.clone();
    let mut hi = max_x.clone();
    while (&hi - &lo).cmp(epsilon) == Ordering::Greater {
        let mid = (&lo + &hi) / Rational::from(2i64);
        let y = poly.evaluate(&mid);
        if y.is_zero() {
            return Some(Interval::point(mid));
        }
        if y.sign() == min_sign {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Some(Interval::new(lo, hi, false, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eps(num: i64, den: i64) -> Rational {
        Rational::new(num, den)
    }

    #[test]
    fn interval_containment() {
        let i = Interval::new(Rational::from(1i64), Rational::from(3i64), false, true);
        assert!(i.contains(&Rational::from(1i64)));
        assert!(i.contains(&Rational::from(2i64)));
        assert!(!i.contains(&Rational::from(3i64)));
        assert!(!i.contains(&Rational::from(0i64)));
        assert_eq!(i.midpoint(), Rational::from(2i64));
        assert_eq!(i.to_string(), "[1, 3)");

        let p = Interval::point(Rational::new(1, 2));
        assert!(p.is_point());
        assert_eq!(p.to_string(), "1/2");
    }

    #[test]
    #[should_panic(expected = "min > max")]
    fn interval_rejects_inverted_bounds() {
        Interval::new(Rational::from(2i64), Rational::from(1i64), false, false);
    }

    #[test]
    fn rejects_non_positive_epsilon() {
        let p = Polynomial::from_roots([1i64]);
        assert!(matches!(
            approximate_roots(&p, &Rational::zero()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_the_zero_polynomial() {
        assert!(matches!(
            approximate_roots(&Polynomial::zero(), &eps(1, 100)),
            Err(Error::EveryValueIsARoot)
        ));
    }

    #[test]
    fn constant_polynomial_has_no_roots() {
        let p = Polynomial::from_coefficients([3i64]);
        assert!(approximate_roots(&p, &eps(1, 100)).unwrap().is_empty());
    }

    #[test]
    fn linear_polynomial_has_an_exact_root() {
        let p = Polynomial::from_coefficients([2i64, -6]);
        let roots = approximate_roots(&p, &eps(1, 100)).unwrap();
        assert_eq!(roots, vec![Interval::point(Rational::from(3i64))]);
    }

    #[test]
    fn separates_three_simple_roots() {
        let p = Polynomial::from_roots([1i64, 2, 3]);
        let roots = approximate_roots(&p, &eps(1, 100)).unwrap();

        assert_eq!(roots.len(), 3);
        for (range, root) in roots.iter().zip([1i64, 2, 3]) {
            assert!(
                range.contains(&Rational::from(root)),
                "expected {} in {}",
                root,
                range
            );
        }
        // disjoint and ordered
        for pair in roots.windows(2) {
            assert!(pair[0].max() < pair[1].min());
        }
    }

    #[test]
    fn detects_a_double_root() {
        let p = Polynomial::from_roots([3i64, 3]);
        let roots = approximate_roots(&p, &eps(1, 100)).unwrap();
        assert_eq!(roots.len(), 1);
        assert!(roots[0].contains(&Rational::from(3i64)));
    }

    #[test]
    fn monotonic_cubic_without_critical_points() {
        // x^3 + x + 1 has no real critical points; its single real root is
        // near -0.6823
        let p = Polynomial::from_coefficients([1i64, 0, 1, 1]);
        let roots = approximate_roots(&p, &eps(1, 1000)).unwrap();
        assert_eq!(roots.len(), 1);
        assert!((roots[0].midpoint().to_f64() + 0.682_327_8).abs() < 0.01);
    }

    #[test]
    fn even_degree_polynomial_without_real_roots() {
        let p = Polynomial::from_coefficients([1i64, 0, 1]);
        assert!(approximate_roots(&p, &eps(1, 100)).unwrap().is_empty());
    }
}
