/// Greatest common divisor of two non-negative integers (Euclidean algorithm).
///
/// `gcd(0, n) == n` and `gcd(n, 0) == n`. `gcd(0, 0)` returns 0, which is
/// never produced by [`Fraction`](crate::Fraction) since its denominator is
/// always positive.
#[inline]
pub const fn gcd(a: u64, b: u64) -> u64 {
    gcd_wide(a as u128, b as u128) as u64
}

/// Same as [`gcd`] over `u128`, for reducing widened intermediates.
#[inline]
pub(crate) const fn gcd_wide(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
