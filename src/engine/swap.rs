//! Constant-product swap.
//!
//! 1. `after_fee = floor(amount_in × (10 000 − fee) / 10 000)`
//! 2. `amount_out = floor(reserve_out × after_fee / (reserve_in + after_fee))`
//! 3. `reserve_in += amount_in` (the withheld fee stays in the vault)
//! 4. `reserve_out −= amount_out`
//!
//! The fee is never transferred on its own; it shows up as
//! `k_after − k_before`, owned pro rata by the LP holders.

use super::{PoolState, Transition};
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, Asset, Effect, Holder, SwapDirection};
use crate::error::{AmmError, Result};
use crate::math::{quote_constant_product, CheckedArithmetic};

/// Parameters of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapRequest {
    /// Which asset is sold.
    pub direction: SwapDirection,
    /// Exact input amount.
    pub amount_in: Amount,
    /// Smallest acceptable output, if any.
    pub min_amount_out: Option<Amount>,
}

impl SwapRequest {
    /// Creates an exact-input swap request.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Option<Amount>,
    ) -> Self {
        Self {
            direction,
            amount_in,
            min_amount_out,
        }
    }
}

/// What a swap exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapReceipt {
    /// Direction executed.
    pub direction: SwapDirection,
    /// Input moved into the vault.
    pub amount_in: Amount,
    /// Output paid to the caller.
    pub amount_out: Amount,
    /// Part of `amount_in` withheld from the curve.
    pub fee: Amount,
}

/// Computes a swap against `pool`.
///
/// # Errors
///
/// - [`AmmError::PoolLocked`] if the pool is locked.
/// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is empty or the
///   output would drain the output vault.
/// - [`AmmError::SlippageExceeded`] if the output is zero or below
///   `min_amount_out`.
/// - [`AmmError::ArithmeticOverflow`] if the input reserve would overflow.
pub fn swap(
    pool: &PoolConfig,
    state: &PoolState,
    caller: AccountId,
    request: SwapRequest,
) -> Result<Transition<SwapReceipt>> {
    pool.ensure_unlocked()?;
    if request.amount_in.is_zero() {
        return Err(AmmError::ZeroAmount);
    }

    let (reserve_in, reserve_out) = state.reserves_for(request.direction);
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    let quote = quote_constant_product(reserve_in, reserve_out, request.amount_in, pool.fee())?;
    let amount_out = quote.amount_out;

    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    if amount_out.is_zero() {
        return Err(AmmError::SlippageExceeded);
    }
    if let Some(min) = request.min_amount_out {
        if amount_out < min {
            return Err(AmmError::SlippageExceeded);
        }
    }

    let new_reserve_in = reserve_in.safe_add(&request.amount_in, "reserve_in overflow after swap")?;
    let new_reserve_out = reserve_out.safe_sub(&amount_out, "reserve_out underflow after swap")?;
    let state_after = state.with_reserves_for(request.direction, new_reserve_in, new_reserve_out);
    debug_assert!(state_after.invariant() >= state.invariant());

    let (asset_in, asset_out) = pool.pair().route(request.direction);
    let trader = Holder::Account(caller);
    let effects = vec![
        Effect::Transfer {
            asset: Asset::Token(asset_in),
            from: trader,
            to: pool.vault(),
            amount: request.amount_in,
        },
        Effect::Transfer {
            asset: Asset::Token(asset_out),
            from: pool.vault(),
            to: trader,
            amount: amount_out,
        },
    ];

    Ok(Transition {
        receipt: SwapReceipt {
            direction: request.direction,
            amount_in: request.amount_in,
            amount_out,
            fee: quote.fee(request.amount_in)?,
        },
        state_after,
        effects,
    })
}
