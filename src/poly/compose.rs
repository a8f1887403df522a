//! Root composition: deriving a defining polynomial for the sum or product
//! of two algebraic numbers from the defining polynomials of the operands.
//!
//! Powers of the combined quantity are rewritten into the tensor basis
//! `x^i y^j` (`i < deg p1`, `j < deg p2`) using each polynomial's defining
//! relation, and a linear dependency among those powers is found by row
//! reduction. The dependency of lowest order is the new defining
//! polynomial. It may have spurious extra roots; minimality is not
//! guaranteed.

use crate::domains::linear_system::Matrix;
use crate::domains::rational::{Rational, Q};

use super::polynomial::Polynomial;
use super::{XTerm, XYTerm};

/// The infinite sequence `x^0, x^1, x^2, ...`, each reduced modulo a
/// defining polynomial: whenever `x^d` (`d` the degree) appears it is
/// substituted by the lower-order terms of the relation, so every yielded
/// polynomial has degree below `d`.
pub struct PowerBasis {
    top: XTerm,
    reduction: Polynomial<XTerm>,
    current: Polynomial<XTerm>,
}

impl PowerBasis {
    /// The power basis modulo `poly`, which must have degree at least 1.
    pub fn new(poly: &Polynomial<XTerm>) -> PowerBasis {
        let top = XTerm::new(poly.degree());
        let lead = poly.leading_coefficient();

        // x^d == (lead x^d - poly) / lead, of degree < d
        let top_term = Polynomial::from_terms([(top, lead.clone())]);
        let rewritten = (&top_term - poly).mul_coeff(&lead.inv());
        let reduction = &rewritten - &Polynomial::from_terms([(top, Rational::one())]);

        PowerBasis {
            top,
            reduction,
            current: Polynomial::one(),
        }
    }
}

impl Iterator for PowerBasis {
    type Item = Polynomial<XTerm>;

    fn next(&mut self) -> Option<Polynomial<XTerm>> {
        let out = self.current.clone();

        let x = Polynomial::from_terms([(XTerm::new(1), Rational::one())]);
        let mut next = &self.current * &x;
        let factor = next.coefficient(&self.top);
        if !factor.is_zero() {
            next = &next + &self.reduction.mul_coeff(&factor);
        }
        self.current = next;

        Some(out)
    }
}

/// A polynomial whose roots include every sum of a root of `poly1` and a
/// root of `poly2`.
pub fn add_roots(poly1: &Polynomial<XTerm>, poly2: &Polynomial<XTerm>) -> Polynomial<XTerm> {
    let deg1 = poly1.degree();
    let deg2 = poly2.degree();
    let max_degree = deg1 * deg2;
    if max_degree == 0 {
        return Polynomial::one();
    }

    let take = max_degree as usize + 1;
    let powers1: Vec<_> = PowerBasis::new(poly1)
        .take(take)
        .map(|p| p.over_x())
        .collect();
    let powers2: Vec<_> = PowerBasis::new(poly2)
        .take(take)
        .map(|p| p.over_y())
        .collect();

    // (x + y)^k expanded binomially, each x^i y^j replaced by its
    // rewritten form
    let x_plus_y = Polynomial::from_terms([
        (XYTerm::new(1, 0), Rational::one()),
        (XYTerm::new(0, 1), Rational::one()),
    ]);
    let combined: Vec<_> = (0..=max_degree as u64)
        .map(|k| {
            x_plus_y
                .raised_to(k)
                .iter()
                .fold(Polynomial::zero(), |acc, (t, c)| {
                    let product = &powers1[t.x_power as usize] * &powers2[t.y_power as usize];
                    &acc + &product.mul_coeff(c)
                })
        })
        .collect();

    solve_for_constraint(&combined, deg2, max_degree)
}

/// A polynomial whose roots include every product of a root of `poly1` and
/// a root of `poly2`.
pub fn mul_roots(poly1: &Polynomial<XTerm>, poly2: &Polynomial<XTerm>) -> Polynomial<XTerm> {
    let deg1 = poly1.degree();
    let deg2 = poly2.degree();
    let max_degree = deg1 * deg2;
    if max_degree == 0 {
        return Polynomial::one();
    }

    let take = max_degree as usize + 1;
    // (xy)^k == x^k y^k, so the k-th combined power is the product of the
    // k-th rewritten powers
    let combined: Vec<_> = PowerBasis::new(poly1)
        .zip(PowerBasis::new(poly2))
        .take(take)
        .map(|(p1, p2)| &p1.over_x() * &p2.over_y())
        .collect();

    solve_for_constraint(&combined, deg2, max_degree)
}

/// Find the lowest-order linear dependency among the combined powers and
/// turn it into a monic single-variable polynomial.
///
/// Column `k` of the system holds the `k`-th combined power, flattened over
/// the tensor basis (row `r` holds the coefficient of `x^(r / deg2) *
/// y^(r % deg2)`). After reduction, the rank is the degree of the solution
/// and the column just past the pivots expresses that power in terms of
/// the lower ones.
fn solve_for_constraint(
    combined: &[Polynomial<XYTerm>],
    deg2: u32,
    max_degree: u32,
) -> Polynomial<XTerm> {
    let columns = combined
        .iter()
        .map(|col| {
            (0..max_degree)
                .map(|row| col.coefficient(&XYTerm::new(row / deg2, row % deg2)))
                .collect()
        })
        .collect();

    let reduced = Matrix::from_columns(columns, Q).reduced();
    let degree_of_solution = reduced.rank_lower_bound() as u32;

    let low_coefficients = reduced.column(degree_of_solution);
    Polynomial::from_terms(
        std::iter::once((XTerm::new(degree_of_solution), Rational::one())).chain(
            low_coefficients
                .into_iter()
                .take(degree_of_solution as usize)
                .enumerate()
                .map(|(i, c)| (XTerm::new(i as u32), -c)),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_basis_reduces_high_powers() {
        // modulo x^2 - 2: 1, x, 2, 2x, 4, ...
        let p = Polynomial::from_coefficients([1i64, 0, -2]);
        let powers: Vec<_> = PowerBasis::new(&p).take(5).collect();
        assert_eq!(powers[0], Polynomial::one());
        assert_eq!(powers[1], Polynomial::from_coefficients([1i64, 0]));
        assert_eq!(powers[2], Polynomial::from_coefficients([2i64]));
        assert_eq!(powers[3], Polynomial::from_coefficients([2i64, 0]));
        assert_eq!(powers[4], Polynomial::from_coefficients([4i64]));
    }

    #[test]
    fn power_basis_scales_non_monic_input() {
        // modulo 2x - 6, x is rewritten to 3
        let p = Polynomial::from_coefficients([2i64, -6]);
        let powers: Vec<_> = PowerBasis::new(&p).take(3).collect();
        assert_eq!(powers[1], Polynomial::constant(Rational::from(3i64)));
        assert_eq!(powers[2], Polynomial::constant(Rational::from(9i64)));
    }

    #[test]
    fn add_roots_of_linear_constraints() {
        let p1 = Polynomial::from_roots([4i64]);
        let p2 = Polynomial::from_roots([7i64]);
        let sum = add_roots(&p1, &p2);
        assert_eq!(sum, Polynomial::from_roots([11i64]));
    }

    #[test]
    fn add_sqrt_two_and_one() {
        // roots(x^2 - 2) + roots(x - 1) are 1 +- sqrt(2), i.e. x^2 - 2x - 1
        let p1 = Polynomial::from_coefficients([1i64, 0, -2]);
        let p2 = Polynomial::from_roots([1i64]);
        let sum = add_roots(&p1, &p2);
        assert_eq!(sum, Polynomial::from_coefficients([1i64, -2, -1]));
    }

    #[test]
    fn add_roots_covers_all_pairwise_sums() {
        let p1 = Polynomial::from_roots([1i64, 4, 7]);
        let p2 = Polynomial::from_roots([1i64, 2, 3]);
        let sum = add_roots(&p1, &p2);

        assert_eq!(sum.degree(), 9);
        for s in [2i64, 3, 4, 5, 6, 7, 8, 9, 10] {
            assert!(
                sum.evaluate(&Rational::from(s)).is_zero(),
                "expected {} to be a root",
                s
            );
        }
    }

    #[test]
    fn mul_roots_covers_all_pairwise_products() {
        let p1 = Polynomial::from_roots([7i64, 11, 13]);
        let p2 = Polynomial::from_roots([2i64, 3, 5]);
        let product = mul_roots(&p1, &p2);

        assert_eq!(product.degree(), 9);
        for p in [14i64, 22, 26, 21, 33, 39, 35, 55, 65] {
            assert!(
                product.evaluate(&Rational::from(p)).is_zero(),
                "expected {} to be a root",
                p
            );
        }
        assert!(!product.evaluate(&Rational::from(10i64)).is_zero());
    }

    #[test]
    fn degenerate_operands_yield_the_unit_polynomial() {
        let constant = Polynomial::from_coefficients([5i64]);
        let p = Polynomial::from_roots([2i64]);
        assert_eq!(add_roots(&constant, &p), Polynomial::one());
        assert_eq!(mul_roots(&p, &constant), Polynomial::one());
    }
}
