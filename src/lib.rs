//! Exact rational numbers for arithmetic without floating-point rounding
//!
//! This library provides a single value type:
//!
//! - **`Fraction`**: signed `i64` numerator over a strictly positive `i64` denominator
//!   - Always stored in lowest terms (`2/4` is stored as `1/2`, zero is `0/1`)
//!   - Immutable: every operation returns a new value
//!   - Use cases: exact ratios, probabilities, unit conversions, scaling factors
//!
//! ## Features
//!
//! - **Exact arithmetic**: add, subtract, multiply, divide, negate, reciprocal, integer powers
//! - **Checked overflow**: intermediates are widened to `i128` and reduced before narrowing
//! - **Total ordering**: cross-multiplication comparison with cheap fast paths
//! - **Float conversion**: `to_f64`/`to_f32`, and a bounded, lossy `try_from_f64`
//! - **no_std compatible**: Works in embedded and WebAssembly environments
//! - **Serde support**: `"n/d"` strings for JSON, `(n, d)` tuples for binary formats
//!
//! ## Example
//!
//! ```rust
//! use fraction::Fraction;
//!
//! let one_third = Fraction::try_new(1, 3).unwrap();
//! let two_fourths = Fraction::try_new(2, 4).unwrap(); // reduced to 1/2
//! assert_eq!(two_fourths.to_string(), "1/2");
//!
//! let sum = one_third + two_fourths; // 5/6
//! assert_eq!(sum, Fraction::try_new(5, 6).unwrap());
//!
//! // Division by a zero fraction is an error, not a panic
//! assert!(sum.try_div(Fraction::ZERO).is_err());
//! ```

#![no_std]
#![cfg_attr(test, allow(unused_imports))]

#[cfg(test)]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod fraction;
mod gcd;

pub use fraction::Fraction;
pub use gcd::gcd;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
    #[error("invalid denominator: a fraction cannot have a zero denominator")]
    InvalidDenominator,

    #[error("overflow: value too large to represent")]
    Overflow,

    #[error("non-finite float: NaN and infinities have no fraction form")]
    NonFinite,

    #[error("invalid string format")]
    InvalidFormat,
}

pub type Result<T> = core::result::Result<T, FractionError>;
