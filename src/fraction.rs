use core::cmp::Ordering;
use core::fmt;
use core::iter::{Product, Sum};
use core::num::IntErrorKind;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::FractionError;
use crate::gcd::gcd_wide;

/// Exact rational number: `i64` numerator over a positive `i64` denominator.
///
/// Every observable value is normalized: the denominator is strictly positive,
/// numerator and denominator share no common factor, and zero is `0/1`. Because
/// of this, the derived `PartialEq` and `Hash` agree with rational equality.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

// ============================================================================
// Constants
// ============================================================================

impl Fraction {
    /// Zero (0/1)
    pub const ZERO: Self = Self { numer: 0, denom: 1 };

    /// One (1/1)
    pub const ONE: Self = Self { numer: 1, denom: 1 };

    /// Denominator bound used by [`Fraction::try_from_f64`].
    ///
    /// Limits float conversion to five decimal digits.
    pub const DEFAULT_MAX_DENOMINATOR: i64 = 100_000;
}

// ============================================================================
// Normalization
// ============================================================================

/// Moves the sign onto the numerator and reduces by the GCD.
///
/// Inputs are widened so that products of two `i64` values can be reduced
/// before the range check; only the reduced pair has to fit in `i64`.
const fn normalize(numer: i128, denom: i128) -> crate::Result<(i64, i64)> {
    if denom == 0 {
        return Err(FractionError::InvalidDenominator);
    }

    let (numer, denom) = if denom < 0 {
        (-numer, -denom)
    } else {
        (numer, denom)
    };

    // gcd(0, d) == d, so zero collapses to 0/1 here
    let g = gcd_wide(numer.unsigned_abs(), denom.unsigned_abs()) as i128;
    let numer = numer / g;
    let denom = denom / g;

    if numer < i64::MIN as i128 || numer > i64::MAX as i128 || denom > i64::MAX as i128 {
        Err(FractionError::Overflow)
    } else {
        Ok((numer as i64, denom as i64))
    }
}

// ============================================================================
// Constructors and Raw Access
// ============================================================================

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Fraction {
    /// Creates a normalized fraction, for use in constants.
    ///
    /// # Panics
    /// Panics if `denom` is zero, or if the normalized value does not fit
    /// (only `new(i64::MIN, -1)`-style inputs). Use [`Fraction::try_new`]
    /// for fallible construction.
    pub const fn new(numer: i64, denom: i64) -> Self {
        match Self::try_new(numer, denom) {
            Ok(f) => f,
            Err(FractionError::InvalidDenominator) => {
                panic!("invalid denominator in Fraction::new: denominator is zero")
            }
            Err(_) => panic!("overflow in Fraction::new: normalized value too large"),
        }
    }

    /// Creates a normalized fraction.
    ///
    /// `try_new(2, -4)` is `-1/2`. Returns `InvalidDenominator` if `denom` is zero.
    #[inline]
    pub const fn try_new(numer: i64, denom: i64) -> crate::Result<Self> {
        Self::from_wide(numer as i128, denom as i128)
    }

    /// Creates a normalized fraction, returning `None` on a zero denominator
    /// or when the normalized value does not fit (`checked_new(i64::MIN, -1)`).
    #[inline]
    pub const fn checked_new(numer: i64, denom: i64) -> Option<Self> {
        match Self::try_new(numer, denom) {
            Ok(f) => Some(f),
            Err(_) => None,
        }
    }

    /// The integer `n` as `n/1`.
    #[inline(always)]
    pub const fn from_integer(n: i64) -> Self {
        Self { numer: n, denom: 1 }
    }

    #[inline]
    const fn from_wide(numer: i128, denom: i128) -> crate::Result<Self> {
        match normalize(numer, denom) {
            Ok((numer, denom)) => Ok(Self { numer, denom }),
            Err(e) => Err(e),
        }
    }

    /// Returns the numerator. Carries the sign of the fraction.
    #[inline(always)]
    pub const fn numer(self) -> i64 {
        self.numer
    }

    /// Returns the denominator. Always positive.
    #[inline(always)]
    pub const fn denom(self) -> i64 {
        self.denom
    }

    /// Returns `(numerator, denominator)`.
    #[inline(always)]
    pub const fn to_raw(self) -> (i64, i64) {
        (self.numer, self.denom)
    }

    /// Returns `true` if the denominator is one.
    #[inline(always)]
    pub const fn is_integer(self) -> bool {
        self.denom == 1
    }
}

// ============================================================================
// Arithmetic Operations - Addition and Subtraction
// ============================================================================

impl Fraction {
    /// Checked addition. Returns `None` if the reduced result overflows.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.try_add(rhs) {
            Ok(f) => Some(f),
            Err(_) => None,
        }
    }

    /// Addition. Returns an error if the reduced result overflows.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_add(self, rhs: Self) -> crate::Result<Self> {
        let numer =
            self.numer as i128 * rhs.denom as i128 + rhs.numer as i128 * self.denom as i128;
        let denom = self.denom as i128 * rhs.denom as i128;
        Self::from_wide(numer, denom)
    }

    /// Checked subtraction. Returns `None` if the reduced result overflows.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.try_sub(rhs) {
            Ok(f) => Some(f),
            Err(_) => None,
        }
    }

    /// Subtraction, `self + (-rhs)`. Returns an error if the reduced result overflows.
    ///
    /// Computed without negating `rhs` first, so `x - i64::MIN/1` works when
    /// the difference fits.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_sub(self, rhs: Self) -> crate::Result<Self> {
        let numer =
            self.numer as i128 * rhs.denom as i128 - rhs.numer as i128 * self.denom as i128;
        let denom = self.denom as i128 * rhs.denom as i128;
        Self::from_wide(numer, denom)
    }

    /// Adds one (`numer + denom` over `denom`).
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_increment(self) -> crate::Result<Self> {
        Self::from_wide(self.numer as i128 + self.denom as i128, self.denom as i128)
    }

    /// Subtracts one (`numer - denom` over `denom`).
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_decrement(self) -> crate::Result<Self> {
        Self::from_wide(self.numer as i128 - self.denom as i128, self.denom as i128)
    }
}

// ============================================================================
// Arithmetic Operations - Multiplication
// ============================================================================

impl Fraction {
    /// Checked multiplication. Returns `None` if the reduced result overflows.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.try_mul(rhs) {
            Ok(f) => Some(f),
            Err(_) => None,
        }
    }

    /// Multiplication. Returns an error if the reduced result overflows.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_mul(self, rhs: Self) -> crate::Result<Self> {
        Self::from_wide(
            self.numer as i128 * rhs.numer as i128,
            self.denom as i128 * rhs.denom as i128,
        )
    }

    /// Checked multiplication by an integer.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_mul_int(self, rhs: i64) -> Option<Self> {
        match self.try_mul_int(rhs) {
            Ok(f) => Some(f),
            Err(_) => None,
        }
    }

    /// Multiplication by an integer. Returns an error if the reduced result overflows.
    ///
    /// `(3/4).try_mul_int(2)` is `3/2`.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_mul_int(self, rhs: i64) -> crate::Result<Self> {
        Self::from_wide(self.numer as i128 * rhs as i128, self.denom as i128)
    }
}

// ============================================================================
// Arithmetic Operations - Division
// ============================================================================

impl Fraction {
    /// Checked division. Returns `None` if `rhs` is zero or the result overflows.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        match self.try_div(rhs) {
            Ok(f) => Some(f),
            Err(_) => None,
        }
    }

    /// Division, `self * rhs.recip()`.
    ///
    /// Returns `InvalidDenominator` if `rhs` is zero, `Overflow` if the
    /// reduced result does not fit.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_div(self, rhs: Self) -> crate::Result<Self> {
        Self::from_wide(
            self.numer as i128 * rhs.denom as i128,
            self.denom as i128 * rhs.numer as i128,
        )
    }

    /// Returns the reciprocal, or `None` if `self` is zero.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn recip(self) -> Option<Self> {
        match self.try_recip() {
            Ok(f) => Some(f),
            Err(_) => None,
        }
    }

    /// Swaps numerator and denominator.
    ///
    /// Returns `InvalidDenominator` if `self` is zero, `Overflow` for `i64::MIN/d`
    /// (whose reciprocal needs a denominator of 2^63).
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_recip(self) -> crate::Result<Self> {
        Self::from_wide(self.denom as i128, self.numer as i128)
    }
}

// ============================================================================
// Arithmetic Operations - Negation and Absolute Value
// ============================================================================

impl Fraction {
    /// Checked negation. Returns `None` if the numerator is `i64::MIN`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_neg(self) -> Option<Self> {
        match self.numer.checked_neg() {
            Some(numer) => Some(Self {
                numer,
                denom: self.denom,
            }),
            None => None,
        }
    }

    /// Negation. Returns an error if the numerator is `i64::MIN`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_neg(self) -> crate::Result<Self> {
        match self.checked_neg() {
            Some(f) => Ok(f),
            None => Err(FractionError::Overflow),
        }
    }

    /// Checked absolute value. Returns `None` if the numerator is `i64::MIN`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_abs(self) -> Option<Self> {
        if self.numer < 0 {
            self.checked_neg()
        } else {
            Some(self)
        }
    }

    /// Absolute value. Returns an error if the numerator is `i64::MIN`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_abs(self) -> crate::Result<Self> {
        match self.checked_abs() {
            Some(f) => Ok(f),
            None => Err(FractionError::Overflow),
        }
    }
}

// ============================================================================
// Sign Operations
// ============================================================================

impl Fraction {
    /// Returns `true` if `self` is positive.
    #[inline(always)]
    pub const fn is_positive(self) -> bool {
        self.numer > 0
    }

    /// Returns `true` if `self` is negative.
    #[inline(always)]
    pub const fn is_negative(self) -> bool {
        self.numer < 0
    }

    /// Returns `true` if `self` is zero.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.numer == 0
    }

    /// Returns the sign of `self` as -1, 0, or 1.
    #[inline(always)]
    pub const fn signum(self) -> i32 {
        self.numer.signum() as i32
    }
}

// ============================================================================
// Mathematical Operations
// ============================================================================

impl Fraction {
    /// Raises `self` to an integer power.
    ///
    /// Returns `None` on overflow or when raising zero to a negative power.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_pow(self, exp: i32) -> Option<Self> {
        match self.try_pow(exp) {
            Ok(f) => Some(f),
            Err(_) => None,
        }
    }

    /// Raises `self` to an integer power.
    ///
    /// The signed numerator is exponentiated, so `(-2/3)^3` is `-8/27` and
    /// `(-2/3)^2` is `4/9`. A negative exponent yields the reciprocal of the
    /// positive power; `exp == 0` yields `1/1`.
    ///
    /// Returns `InvalidDenominator` for zero raised to a negative power and
    /// `Overflow` if either power does not fit in `i64`.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_pow(self, exp: i32) -> crate::Result<Self> {
        if exp == 1 {
            return Ok(self);
        }

        let n = exp.unsigned_abs();
        let numer = match self.numer.checked_pow(n) {
            Some(v) => v,
            None => return Err(FractionError::Overflow),
        };
        let denom = match self.denom.checked_pow(n) {
            Some(v) => v,
            None => return Err(FractionError::Overflow),
        };

        if exp > 0 {
            Self::try_new(numer, denom)
        } else {
            Self::try_new(denom, numer)
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Numerators alone decide when denominators match, when either side is
        // zero, or when the signs differ (denominators are always positive).
        if self.denom == other.denom
            || self.numer == 0
            || other.numer == 0
            || self.numer.signum() != other.numer.signum()
        {
            return self.numer.cmp(&other.numer);
        }

        let lhs = self.numer as i128 * other.denom as i128;
        let rhs = other.numer as i128 * self.denom as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Float Conversions
// ============================================================================

/// -2^63, the smallest f64 that truncates into `i64`
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;

/// 2^63, the first f64 past `i64::MAX`
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl Fraction {
    /// Converts to f64 (`numer / denom`).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Converts to f32 (`numer / denom`).
    ///
    /// Note: May lose precision.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.numer as f32 / self.denom as f32
    }

    /// Creates a fraction from an f64 by decimal expansion, using
    /// [`Fraction::DEFAULT_MAX_DENOMINATOR`] as the bound.
    ///
    /// Lossy: `0.5` gives `1/2`, but `1.0 / 3.0` gives `33333/100000`.
    #[inline]
    pub fn try_from_f64(value: f64) -> crate::Result<Self> {
        Self::try_from_f64_bounded(value, Self::DEFAULT_MAX_DENOMINATOR)
    }

    /// Creates a fraction from an f64 by decimal expansion.
    ///
    /// The value and a denominator starting at 1 are multiplied by ten until
    /// the value has no fractional part or another step would take the
    /// denominator past `max_denominator`; the remaining fractional part is
    /// truncated. The denominator never exceeds `max_denominator`, so a bound
    /// of 50 stops at tenths and a bound of 1 truncates to an integer.
    ///
    /// Returns `NonFinite` for NaN or infinities, `Overflow` if the integer
    /// part does not fit in `i64`, and `InvalidDenominator` if
    /// `max_denominator < 1`.
    pub fn try_from_f64_bounded(value: f64, max_denominator: i64) -> crate::Result<Self> {
        if max_denominator < 1 {
            return Err(FractionError::InvalidDenominator);
        }
        if !value.is_finite() {
            return Err(FractionError::NonFinite);
        }
        if !(I64_LOWER..I64_UPPER).contains(&value) {
            return Err(FractionError::Overflow);
        }

        let mut scaled = value;
        let mut denom: i64 = 1;

        loop {
            let whole = scaled as i64;
            if whole as f64 == scaled {
                return Self::try_new(whole, denom);
            }

            if denom > max_denominator / 10 {
                log::trace!(
                    "truncating {value} to {whole}/{denom} (denominator bound {max_denominator})"
                );
                return Self::try_new(whole, denom);
            }

            // A value with a fractional part is below 2^52 in magnitude, so
            // this stays inside the i64 range
            scaled *= 10.0;
            denom *= 10;
        }
    }

    /// Creates a fraction from an f32 by widening to f64 first.
    #[inline]
    pub fn try_from_f32(value: f32) -> crate::Result<Self> {
        Self::try_from_f64(value as f64)
    }

    /// Creates a fraction from an f64, returning `None` if invalid.
    #[inline]
    pub fn from_f64(value: f64) -> Option<Self> {
        Self::try_from_f64(value).ok()
    }

    /// Creates a fraction from an f32, returning `None` if invalid.
    #[inline]
    pub fn from_f32(value: f32) -> Option<Self> {
        Self::try_from_f32(value).ok()
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl Fraction {
    /// Parses `"n/d"` or `"n"`. Whitespace around the string and around
    /// either side of the slash is ignored.
    pub fn from_str_exact(s: &str) -> crate::Result<Self> {
        let s = s.trim();
        match s.split_once('/') {
            Some((numer, denom)) => Self::try_new(parse_i64(numer)?, parse_i64(denom)?),
            None => Ok(Self::from_integer(parse_i64(s)?)),
        }
    }
}

fn parse_i64(s: &str) -> crate::Result<i64> {
    s.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => FractionError::Overflow,
        _ => FractionError::InvalidFormat,
    })
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_exact(s)
    }
}

// ============================================================================
// Operator Overloading
// ============================================================================

impl Add for Fraction {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("attempt to add with overflow")
    }
}

impl Sub for Fraction {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
            .expect("attempt to subtract with overflow")
    }
}

impl Mul for Fraction {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .expect("attempt to multiply with overflow")
    }
}

impl Mul<i64> for Fraction {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul_int(rhs)
            .expect("attempt to multiply with overflow")
    }
}

impl Div for Fraction {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
            .expect("attempt to divide by zero or overflow")
    }
}

impl Neg for Fraction {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("attempt to negate with overflow")
    }
}

impl AddAssign for Fraction {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fraction {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fraction {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<i64> for Fraction {
    #[inline]
    fn mul_assign(&mut self, rhs: i64) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fraction {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// ============================================================================
// Standard Library Trait Implementations
// ============================================================================

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    #[inline]
    fn try_from(value: f64) -> crate::Result<Self> {
        Self::try_from_f64(value)
    }
}

impl TryFrom<f32> for Fraction {
    type Error = FractionError;

    #[inline]
    fn try_from(value: f32) -> crate::Result<Self> {
        Self::try_from_f32(value)
    }
}

impl From<Fraction> for f64 {
    #[inline]
    fn from(value: Fraction) -> Self {
        value.to_f64()
    }
}

impl From<Fraction> for f32 {
    #[inline]
    fn from(value: Fraction) -> Self {
        value.to_f32()
    }
}

impl From<i64> for Fraction {
    #[inline(always)]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for Fraction {
    #[inline(always)]
    fn from(value: i32) -> Self {
        Self::from_integer(value as i64)
    }
}

impl From<u32> for Fraction {
    #[inline(always)]
    fn from(value: u32) -> Self {
        Self::from_integer(value as i64)
    }
}

impl From<i16> for Fraction {
    #[inline(always)]
    fn from(value: i16) -> Self {
        Self::from_integer(value as i64)
    }
}

impl From<u16> for Fraction {
    #[inline(always)]
    fn from(value: u16) -> Self {
        Self::from_integer(value as i64)
    }
}

impl From<i8> for Fraction {
    #[inline(always)]
    fn from(value: i8) -> Self {
        Self::from_integer(value as i64)
    }
}

impl From<u8> for Fraction {
    #[inline(always)]
    fn from(value: u8) -> Self {
        Self::from_integer(value as i64)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // {:#?} shows raw internals
            f.debug_struct("Fraction")
                .field("numer", &self.numer)
                .field("denom", &self.denom)
                .finish()
        } else {
            write!(f, "Fraction({})", self)
        }
    }
}

// ============================================================================
// Iterator Trait Implementations
// ============================================================================

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + *x)
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * *x)
    }
}

// ============================================================================
// Serde Support
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            // JSON, TOML, etc. - "n/d" string
            serializer.collect_str(self)
        } else {
            // Bincode, MessagePack, etc. - (numer, denom) tuple
            (self.numer, self.denom).serialize(serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = alloc::string::String::deserialize(deserializer)?;
            Self::from_str(&s).map_err(de::Error::custom)
        } else {
            // Untrusted input: renormalize rather than trusting the pair
            let (numer, denom) = <(i64, i64)>::deserialize(deserializer)?;
            Self::try_new(numer, denom).map_err(de::Error::custom)
        }
    }
}
