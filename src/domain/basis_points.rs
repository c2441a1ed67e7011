//! Basis-point representation of the swap fee.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Denominator that represents 100%.
pub const BPS_DENOMINATOR: u16 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Construction is infallible; a pool fee must additionally satisfy
/// [`is_valid_fee`](Self::is_valid_fee) (strictly below 100%), which
/// [`PoolParams`](crate::config::PoolParams) enforces.
///
/// # Examples
///
/// ```
/// use hydra_cpamm::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.get(), 30);
/// assert!(bp.is_valid_fee());
/// assert!(!BasisPoints::new(10_000).is_valid_fee());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Creates a new `BasisPoints` from a raw `u16` value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the underlying `u16` value.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Returns `true` if the value is usable as a swap fee (`0..10_000`).
    #[must_use]
    pub const fn is_valid_fee(&self) -> bool {
        self.0 < BPS_DENOMINATOR
    }

    /// Returns `10_000 - self`, the share of the input that reaches the curve.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the value exceeds 100%.
    pub const fn complement(&self) -> crate::error::Result<Self> {
        match BPS_DENOMINATOR.checked_sub(self.0) {
            Some(v) => Ok(Self(v)),
            None => Err(AmmError::InvalidFee),
        }
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// The product is formed in `u128`; the result is bounded by `amount`
    /// whenever `self` is at most 100%.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result does not fit
    /// in an [`Amount`].
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        crate::math::checked_mul_div(
            amount.get(),
            u64::from(self.0),
            u64::from(BPS_DENOMINATOR),
            rounding,
        )
        .map(Amount::new)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
