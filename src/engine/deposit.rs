//! Liquidity deposit.
//!
//! # Bootstrap
//!
//! While no shares are outstanding the depositor sets the price: exactly
//! `max_x` and `max_y` are taken and exactly `lp_amount` shares minted.
//! The engine does not derive the share count from the reserves.
//!
//! # Proportional
//!
//! Otherwise the depositor names the share count and the engine collects
//! `ceil(reserve × lp_amount / lp_supply)` of each asset, so the pool never
//! under-collects.

use super::{PoolState, Transition};
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, Asset, Effect, Holder, Liquidity, Rounding};
use crate::error::{AmmError, Result};
use crate::math::{checked_mul_div, CheckedArithmetic};

/// Parameters of a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositRequest {
    /// Shares the caller wants minted.
    pub lp_amount: Liquidity,
    /// Most asset X the caller will pay (exact amount when bootstrapping).
    pub max_x: Amount,
    /// Most asset Y the caller will pay (exact amount when bootstrapping).
    pub max_y: Amount,
}

impl DepositRequest {
    /// Creates a deposit request.
    pub const fn new(lp_amount: Liquidity, max_x: Amount, max_y: Amount) -> Self {
        Self {
            lp_amount,
            max_x,
            max_y,
        }
    }
}

/// What a deposit collected and minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositReceipt {
    /// Asset X moved into the vault.
    pub amount_x: Amount,
    /// Asset Y moved into the vault.
    pub amount_y: Amount,
    /// Shares minted to the caller.
    pub lp_minted: Liquidity,
    /// `true` if this deposit set the initial price.
    pub bootstrap: bool,
}

/// Computes a deposit into `pool`.
///
/// # Errors
///
/// - [`AmmError::PoolLocked`] if the pool is locked.
/// - [`AmmError::ZeroAmount`] if `lp_amount` is zero, or if a bootstrap
///   deposit leaves either side empty.
/// - [`AmmError::SlippageExceeded`] if a proportional amount exceeds its
///   maximum.
/// - [`AmmError::ArithmeticOverflow`] if a reserve or the supply would
///   overflow.
pub fn deposit(
    pool: &PoolConfig,
    state: &PoolState,
    caller: AccountId,
    request: DepositRequest,
) -> Result<Transition<DepositReceipt>> {
    pool.ensure_unlocked()?;
    if request.lp_amount.is_zero() {
        return Err(AmmError::ZeroAmount);
    }

    let bootstrap = state.lp_supply().is_zero();
    let (amount_x, amount_y) = if bootstrap {
        if request.max_x.is_zero() || request.max_y.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        (request.max_x, request.max_y)
    } else {
        let x = proportional_in(state.reserve_x(), request.lp_amount, state.lp_supply())?;
        let y = proportional_in(state.reserve_y(), request.lp_amount, state.lp_supply())?;
        if x > request.max_x || y > request.max_y {
            return Err(AmmError::SlippageExceeded);
        }
        (x, y)
    };

    let state_after = PoolState::new(
        state
            .reserve_x()
            .safe_add(&amount_x, "reserve_x overflow on deposit")?,
        state
            .reserve_y()
            .safe_add(&amount_y, "reserve_y overflow on deposit")?,
        state
            .lp_supply()
            .safe_add(&request.lp_amount, "lp supply overflow on deposit")?,
    );
    state_after.ensure_backed()?;

    let from = Holder::Account(caller);
    let effects = vec![
        Effect::Transfer {
            asset: Asset::Token(pool.asset_x()),
            from,
            to: pool.vault(),
            amount: amount_x,
        },
        Effect::Transfer {
            asset: Asset::Token(pool.asset_y()),
            from,
            to: pool.vault(),
            amount: amount_y,
        },
        Effect::Mint {
            asset: pool.lp_asset(),
            to: from,
            amount: request.lp_amount.as_amount(),
        },
    ];

    Ok(Transition {
        receipt: DepositReceipt {
            amount_x,
            amount_y,
            lp_minted: request.lp_amount,
            bootstrap,
        },
        state_after,
        effects,
    })
}

/// `ceil(reserve × lp_amount / lp_supply)`.
fn proportional_in(reserve: Amount, lp_amount: Liquidity, lp_supply: Liquidity) -> Result<Amount> {
    checked_mul_div(reserve.get(), lp_amount.get(), lp_supply.get(), Rounding::Up).map(Amount::new)
}
