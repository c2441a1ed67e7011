//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait lifts the `Option`-returning primitives
//! on [`Amount`] and [`Liquidity`] into `Result<Self, AmmError>`, attaching
//! a static context string so a failure names the computation that
//! overflowed.
//!
//! # Examples
//!
//! ```
//! use hydra_cpamm::domain::Amount;
//! use hydra_cpamm::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200), "example");
//! assert_eq!(sum, Ok(Amount::new(300)));
//! ```

use crate::domain::{Amount, Liquidity, Rounding};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: overflow surfaces as
///   [`AmmError::ArithmeticOverflow`], division by zero as
///   [`AmmError::DivisionByZero`].
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] with `context` on overflow.
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] with `context` on underflow.
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] with `context` on overflow.
    fn safe_mul(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other).ok_or(AmmError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_mul(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_mul(other).ok_or(AmmError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError> {
        self.checked_div(other, rounding).ok_or(AmmError::DivisionByZero)
    }
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other).ok_or(AmmError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_mul(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.get()
            .checked_mul(other.get())
            .map(Liquidity::new)
            .ok_or(AmmError::ArithmeticOverflow(context))
    }

    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError> {
        self.as_amount()
            .checked_div(&other.as_amount(), rounding)
            .map(Liquidity::from)
            .ok_or(AmmError::DivisionByZero)
    }
}
