//! Integer square root.

/// Floor of the square root of `n`, via Newton's method.
///
/// The root of any `u128` fits in `u64`.
///
/// ```
/// use hydra_cpamm::math::integer_sqrt;
///
/// assert_eq!(integer_sqrt(0), 0);
/// assert_eq!(integer_sqrt(15), 3);
/// assert_eq!(integer_sqrt(16), 4);
/// ```
#[must_use]
pub fn integer_sqrt(n: u128) -> u64 {
    if n < 2 {
        return n as u64;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    // x <= 2^64 - 1 for every u128 input.
    x as u64
}

/// `floor(sqrt(x * y))`, the geometric mean of two reserves.
///
/// Offered as an advisory LP size for a bootstrap deposit; the engine does
/// not enforce it. The product of two `u64` values always fits in `u128`.
///
/// ```
/// use hydra_cpamm::math::geometric_mean;
///
/// assert_eq!(geometric_mean(4, 9), 6);
/// ```
#[must_use]
pub fn geometric_mean(x: u64, y: u64) -> u64 {
    integer_sqrt(u128::from(x) * u128::from(y))
}
