//! Constant-product (`x · y = k`) swap quote.
//!
//! The fee is taken from the input before the curve is applied:
//!
//! 1. `after_fee = amount_in × (10 000 − fee_bps) / 10 000` (floor)
//! 2. `amount_out = reserve_out × after_fee / (reserve_in + after_fee)` (floor)
//!
//! Both divisions truncate, so the output never exceeds the exact curve
//! value and `k` cannot decrease when the full `amount_in` is added to the
//! input reserve.

use super::checked_mul_div;
use crate::domain::{Amount, BasisPoints, Rounding};
use crate::error::{AmmError, Result};

/// Breakdown of a constant-product quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveQuote {
    /// Input that reaches the curve after the fee is withheld.
    pub amount_in_after_fee: Amount,
    /// Output paid from the opposite reserve.
    pub amount_out: Amount,
}

impl CurveQuote {
    /// Portion of the input withheld as fee.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if `amount_in` is smaller
    /// than the after-fee input, which a quote produced by
    /// [`quote_constant_product`] never is.
    pub fn fee(&self, amount_in: Amount) -> Result<Amount> {
        amount_in
            .checked_sub(&self.amount_in_after_fee)
            .ok_or(AmmError::ArithmeticOverflow("fee underflow"))
    }
}

/// Quotes the output of selling `amount_in` into a constant-product pool.
///
/// # Errors
///
/// - [`AmmError::InvalidFee`] if `fee` is not below 100%.
/// - [`AmmError::DivisionByZero`] if `reserve_in + after_fee` is zero.
/// - [`AmmError::ArithmeticOverflow`] if `reserve_in + after_fee` overflows.
///
/// # Examples
///
/// ```
/// use hydra_cpamm::domain::{Amount, BasisPoints};
/// use hydra_cpamm::math::quote_constant_product;
///
/// let q = quote_constant_product(
///     Amount::new(1_000_000),
///     Amount::new(1_000_000),
///     Amount::new(2_345),
///     BasisPoints::new(30),
/// )
/// .expect("valid quote");
/// assert_eq!(q.amount_in_after_fee, Amount::new(2_337));
/// assert_eq!(q.amount_out, Amount::new(2_331));
/// ```
pub fn quote_constant_product(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
    fee: BasisPoints,
) -> Result<CurveQuote> {
    if !fee.is_valid_fee() {
        return Err(AmmError::InvalidFee);
    }
    let amount_in_after_fee = fee.complement()?.apply(amount_in, Rounding::Down)?;

    let denominator = reserve_in
        .checked_add(&amount_in_after_fee)
        .ok_or(AmmError::ArithmeticOverflow("curve denominator overflow"))?;

    let amount_out = checked_mul_div(
        reserve_out.get(),
        amount_in_after_fee.get(),
        denominator.get(),
        Rounding::Down,
    )?;

    Ok(CurveQuote {
        amount_in_after_fee,
        amount_out: Amount::new(amount_out),
    })
}
