//! Polynomial representations and the algorithms built on them.
//!
//! A polynomial is a sparse map from a basis [Term] to a rational
//! coefficient. Two term kinds exist: [XTerm] for single-variable
//! polynomials and [XYTerm] for the two-variable polynomials that appear
//! in the tensor construction of [compose].

pub mod compose;
pub mod isolate;
pub mod polynomial;

use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

/// A basis element of a polynomial ring, e.g. the `x^2` in `3x^2 + x + 2`,
/// without its coefficient.
///
/// Implementors form a commutative monoid under [times](Term::times), with
/// [identity](Term::identity) playing the role of `x^0`.
pub trait Term: Copy + Eq + Ord + Hash + Debug + Display {
    /// The empty product, i.e. all exponents zero.
    fn identity() -> Self;
    /// The product of two basis elements; exponents add.
    fn times(&self, other: &Self) -> Self;
}

/// A power of the single variable `x`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct XTerm {
    pub power: u32,
}

impl XTerm {
    pub fn new(power: u32) -> XTerm {
        XTerm { power }
    }
}

impl Term for XTerm {
    fn identity() -> Self {
        XTerm { power: 0 }
    }

    fn times(&self, other: &Self) -> Self {
        XTerm {
            power: self.power + other.power,
        }
    }
}

/// A product of powers of the two variables `x` and `y`. Ordering is
/// lexicographic with `x` as the primary variable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct XYTerm {
    pub x_power: u32,
    pub y_power: u32,
}

impl XYTerm {
    pub fn new(x_power: u32, y_power: u32) -> XYTerm {
        XYTerm { x_power, y_power }
    }
}

impl Term for XYTerm {
    fn identity() -> Self {
        XYTerm {
            x_power: 0,
            y_power: 0,
        }
    }

    fn times(&self, other: &Self) -> Self {
        XYTerm {
            x_power: self.x_power + other.x_power,
            y_power: self.y_power + other.y_power,
        }
    }
}

fn write_power_factor(f: &mut Formatter<'_>, var: &str, power: u32) -> std::fmt::Result {
    match power {
        0 => Ok(()),
        1 => write!(f, "{}", var),
        _ => write!(f, "{}^{}", var, power),
    }
}

impl Display for XTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_power_factor(f, "x", self.power)
    }
}

impl Display for XYTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_power_factor(f, "x", self.x_power)?;
        write_power_factor(f, "y", self.y_power)
    }
}
