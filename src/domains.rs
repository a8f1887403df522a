//! Defines the core algebraic traits and the concrete rings built on them.
//!
//! The central trait is [Ring], which has two binary operations, addition and
//! multiplication. A ring type does not contain data itself; it carries the
//! operations for its associated element type. For example, the field of
//! rational numbers [Q](rational::Q) has elements of type
//! [Rational](rational::Rational).
//!
//! [`EuclideanDomain`] extends [Ring] with remainders, quotients and gcds,
//! and [`Field`] adds division and inversion. The dense
//! [Matrix](linear_system::Matrix) is generic over any [`Field`].

pub mod linear_system;
pub mod rational;

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A set with two binary operations, addition and multiplication.
///
/// Operations are provided by the ring type and act on borrowed elements,
/// returning new values; elements are never mutated in place except through
/// the explicit `_assign` variants.
pub trait Ring: Clone + PartialEq + Debug + Display {
    type Element: Clone + PartialEq + Eq + Hash + Debug + Display;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    /// Compute `b^e` by repeated squaring.
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(&self, a: &Self::Element) -> bool;

    /// Sample a random element with components drawn from `range`.
    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element;
}

/// A ring that supports division with remainder, quotients, and gcds.
pub trait EuclideanDomain: Ring {
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element);
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
}

/// A ring in which every nonzero element has a multiplicative inverse.
pub trait Field: EuclideanDomain {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn inv(&self, a: &Self::Element) -> Self::Element;
}
