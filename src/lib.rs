//! Exact arithmetic on real algebraic numbers.
//!
//! A [PolyNumber] stands for a real number implicitly, as a root of an
//! integer polynomial. Sums, differences, products, quotients, integer
//! powers and roots of such numbers are again such numbers, and their
//! constraints are derived exactly, with no floating-point rounding
//! anywhere in the arithmetic. Approximation to floating point is an
//! explicit final step.
//!
//! ```
//! use polynum::PolyNumber;
//!
//! let sqrt2 = PolyNumber::from(2).root(2)?;
//! assert!((&sqrt2 * &sqrt2).has_value(2));
//!
//! let sqrt5 = PolyNumber::from(5).root(2)?;
//! let golden = (&sqrt5 + &PolyNumber::from(1)) / PolyNumber::from(2);
//! assert!(golden
//!     .approximates()?
//!     .iter()
//!     .any(|x| (x - 1.618_033_988).abs() < 0.001));
//! # Ok::<(), polynum::Error>(())
//! ```
//!
//! The building blocks are public as well: [domains] holds the ring and
//! field abstractions with the arbitrary-precision rationals and linear
//! solving, [poly] the sparse polynomials, root composition and real root
//! isolation.

pub mod domains;
pub mod number;
pub mod poly;

pub use number::PolyNumber;

use thiserror::Error as ThisError;

/// The errors reported by fallible operations in this crate.
#[derive(ThisError, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// A caller-supplied argument was out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Division by a quantity that is, or could be, zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A constant constraint polynomial, which no value satisfies.
    #[error("the constraint polynomial is constant and has no solutions")]
    NoSolutions,
    /// The zero polynomial, which every value satisfies, where a root set
    /// was requested.
    #[error("every value is a root of the zero polynomial")]
    EveryValueIsARoot,
    /// An internal invariant was violated; indicates a bug.
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
}
