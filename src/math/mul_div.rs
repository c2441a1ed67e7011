//! Double-width multiply-then-divide.
//!
//! Operands are `u64`; the product is formed in `u128`, so `a * b` itself
//! can never overflow. Only a quotient that does not fit back into `u64`
//! is reported as [`AmmError::ArithmeticOverflow`].
//!
//! # Convention
//!
//! Rounding always favours the pool:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Amount collected from a caller (deposit) | [`Rounding::Up`] |
//! | Amount paid to a caller (withdraw, swap output) | [`Rounding::Down`] |
//!
//! # Examples
//!
//! ```
//! use hydra_cpamm::domain::Rounding;
//! use hydra_cpamm::math::{checked_mul_div, div_round};
//!
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(checked_mul_div(u64::MAX, u64::MAX, u64::MAX, Rounding::Down), Ok(u64::MAX));
//! ```

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // A non-zero remainder implies denominator > 1, so q < u128::MAX.
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}

/// Computes `a * b / c` with a `u128` intermediate.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `c == 0`.
/// - [`AmmError::ArithmeticOverflow`] if the quotient exceeds `u64::MAX`.
pub fn checked_mul_div(a: u64, b: u64, c: u64, rounding: Rounding) -> Result<u64> {
    let product = u128::from(a) * u128::from(b);
    let quotient = div_round(product, u128::from(c), rounding).ok_or(AmmError::DivisionByZero)?;
    u64::try_from(quotient).map_err(|_| AmmError::ArithmeticOverflow("mul_div quotient exceeds u64"))
}
