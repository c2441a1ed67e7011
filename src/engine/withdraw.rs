//! Liquidity withdrawal.
//!
//! Burning `lp_amount` of `lp_supply` pays `floor(reserve × lp_amount /
//! lp_supply)` of each asset, so the remaining holders are never diluted
//! by rounding. Burning the whole supply empties both vaults.

use super::{PoolState, Transition};
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, Asset, Effect, Holder, Liquidity, Rounding};
use crate::error::{AmmError, Result};
use crate::math::{checked_mul_div, CheckedArithmetic};

/// Parameters of a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawRequest {
    /// Shares to burn.
    pub lp_amount: Liquidity,
    /// Least asset X the caller accepts, if any.
    pub min_x: Option<Amount>,
    /// Least asset Y the caller accepts, if any.
    pub min_y: Option<Amount>,
}

impl WithdrawRequest {
    /// Creates a withdrawal with no minimum payouts.
    pub const fn new(lp_amount: Liquidity) -> Self {
        Self {
            lp_amount,
            min_x: None,
            min_y: None,
        }
    }

    /// Sets minimum payouts for both assets.
    #[must_use]
    pub const fn with_minimums(mut self, min_x: Amount, min_y: Amount) -> Self {
        self.min_x = Some(min_x);
        self.min_y = Some(min_y);
        self
    }
}

/// What a withdrawal burned and paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawReceipt {
    /// Asset X paid to the caller.
    pub amount_x: Amount,
    /// Asset Y paid to the caller.
    pub amount_y: Amount,
    /// Shares burned from the caller.
    pub lp_burned: Liquidity,
}

/// Computes a withdrawal from `pool` by a caller holding `caller_shares`.
///
/// # Errors
///
/// - [`AmmError::PoolLocked`] if the pool is locked.
/// - [`AmmError::ZeroAmount`] if `lp_amount` is zero.
/// - [`AmmError::InsufficientShare`] if `lp_amount` exceeds the caller's
///   balance or the outstanding supply.
/// - [`AmmError::SlippageExceeded`] if a payout is below its minimum.
/// - [`AmmError::InsufficientLiquidity`] if a partial withdrawal would
///   leave shares outstanding against an empty reserve.
pub fn withdraw(
    pool: &PoolConfig,
    state: &PoolState,
    caller: AccountId,
    caller_shares: Liquidity,
    request: WithdrawRequest,
) -> Result<Transition<WithdrawReceipt>> {
    pool.ensure_unlocked()?;
    let lp_amount = request.lp_amount;
    if lp_amount.is_zero() {
        return Err(AmmError::ZeroAmount);
    }
    if lp_amount > caller_shares || lp_amount > state.lp_supply() {
        return Err(AmmError::InsufficientShare);
    }

    let amount_x = proportional_out(state.reserve_x(), lp_amount, state.lp_supply())?;
    let amount_y = proportional_out(state.reserve_y(), lp_amount, state.lp_supply())?;
    if request.min_x.is_some_and(|min| amount_x < min)
        || request.min_y.is_some_and(|min| amount_y < min)
    {
        return Err(AmmError::SlippageExceeded);
    }

    let state_after = PoolState::new(
        state
            .reserve_x()
            .safe_sub(&amount_x, "reserve_x underflow on withdraw")?,
        state
            .reserve_y()
            .safe_sub(&amount_y, "reserve_y underflow on withdraw")?,
        state
            .lp_supply()
            .safe_sub(&lp_amount, "lp supply underflow on withdraw")?,
    );
    state_after.ensure_backed()?;

    let to = Holder::Account(caller);
    let mut effects = vec![Effect::Burn {
        asset: pool.lp_asset(),
        from: to,
        amount: lp_amount.as_amount(),
    }];
    for (asset, amount) in [(pool.asset_x(), amount_x), (pool.asset_y(), amount_y)] {
        if !amount.is_zero() {
            effects.push(Effect::Transfer {
                asset: Asset::Token(asset),
                from: pool.vault(),
                to,
                amount,
            });
        }
    }

    Ok(Transition {
        receipt: WithdrawReceipt {
            amount_x,
            amount_y,
            lp_burned: lp_amount,
        },
        state_after,
        effects,
    })
}

/// `floor(reserve × lp_amount / lp_supply)`.
fn proportional_out(reserve: Amount, lp_amount: Liquidity, lp_supply: Liquidity) -> Result<Amount> {
    checked_mul_div(reserve.get(), lp_amount.get(), lp_supply.get(), Rounding::Down).map(Amount::new)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolParams;
    use crate::domain::{BasisPoints, PoolId, TokenAddress};

    const LP: AccountId = AccountId::from_bytes([0x11; 32]);
    const X: TokenAddress = TokenAddress::from_bytes([1; 32]);
    const Y: TokenAddress = TokenAddress::from_bytes([2; 32]);

    fn pool() -> PoolConfig {
        let Ok(params) = PoolParams::new(1, Some(LP), X, Y, BasisPoints::new(30)) else {
            panic!("valid params");
        };
        let Ok(cfg) = PoolConfig::new(PoolId::new(0), &params) else {
            panic!("valid config");
        };
        cfg
    }

    fn state(x: u64, y: u64, l: u64) -> PoolState {
        PoolState::new(Amount::new(x), Amount::new(y), Liquidity::new(l))
    }

    fn shares(l: u64) -> Liquidity {
        Liquidity::new(l)
    }

    fn request(l: u64) -> WithdrawRequest {
        WithdrawRequest::new(Liquidity::new(l))
    }

    #[test]
    fn full_withdrawal_empties_pool() {
        let s = state(1_002_345, 997_669, 2_000_000);
        let Ok(t) = withdraw(&pool(), &s, LP, shares(2_000_000), request(2_000_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(t.receipt.amount_x, Amount::new(1_002_345));
        assert_eq!(t.receipt.amount_y, Amount::new(997_669));
        assert_eq!(t.receipt.lp_burned, Liquidity::new(2_000_000));
        assert_eq!(t.state_after, PoolState::EMPTY);
    }

    #[test]
    fn partial_withdrawal_rounds_down() {
        // 1_000 * 1 / 3 = 333.3 → 333 ; 2_000 * 1 / 3 = 666.6 → 666
        let Ok(t) = withdraw(&pool(), &state(1_000, 2_000, 3), LP, shares(3), request(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(t.receipt.amount_x, Amount::new(333));
        assert_eq!(t.receipt.amount_y, Amount::new(666));
        assert_eq!(t.state_after, state(667, 1_334, 2));
    }

    #[test]
    fn burn_precedes_payouts() {
        let cfg = pool();
        let Ok(t) = withdraw(&cfg, &state(100, 200, 10), LP, shares(10), request(5)) else {
            panic!("expected Ok");
        };
        assert_eq!(
            t.effects,
            vec![
                Effect::Burn {
                    asset: Asset::Lp(PoolId::new(0)),
                    from: Holder::Account(LP),
                    amount: Amount::new(5),
                },
                Effect::Transfer {
                    asset: Asset::Token(X),
                    from: cfg.vault(),
                    to: Holder::Account(LP),
                    amount: Amount::new(50),
                },
                Effect::Transfer {
                    asset: Asset::Token(Y),
                    from: cfg.vault(),
                    to: Holder::Account(LP),
                    amount: Amount::new(100),
                },
            ]
        );
    }

    #[test]
    fn dust_withdrawal_skips_zero_transfers() {
        // 1 * 1 / 1_000 → 0 ; 5_000 * 1 / 1_000 → 5
        let Ok(t) = withdraw(&pool(), &state(1, 5_000, 1_000), LP, shares(1_000), request(1)) else {
            panic!("expected Ok");
        };
        assert!(t.receipt.amount_x.is_zero());
        assert_eq!(t.receipt.amount_y, Amount::new(5));
        assert_eq!(t.effects.len(), 2);
    }

    #[test]
    fn more_than_caller_holds() {
        let r = withdraw(&pool(), &state(100, 100, 100), LP, shares(10), request(11));
        assert_eq!(r, Err(AmmError::InsufficientShare));
    }

    #[test]
    fn more_than_supply() {
        let r = withdraw(&pool(), &state(100, 100, 100), LP, shares(500), request(101));
        assert_eq!(r, Err(AmmError::InsufficientShare));
    }

    #[test]
    fn zero_amount_rejected() {
        let r = withdraw(&pool(), &state(100, 100, 100), LP, shares(100), request(0));
        assert_eq!(r, Err(AmmError::ZeroAmount));
    }

    #[test]
    fn minimums_enforced() {
        let s = state(1_000, 2_000, 1_000);
        let tight = request(100).with_minimums(Amount::new(101), Amount::ZERO);
        assert_eq!(
            withdraw(&pool(), &s, LP, shares(1_000), tight),
            Err(AmmError::SlippageExceeded)
        );
        let tight = request(100).with_minimums(Amount::ZERO, Amount::new(201));
        assert_eq!(
            withdraw(&pool(), &s, LP, shares(1_000), tight),
            Err(AmmError::SlippageExceeded)
        );
        let exact = request(100).with_minimums(Amount::new(100), Amount::new(200));
        assert!(withdraw(&pool(), &s, LP, shares(1_000), exact).is_ok());
    }

    #[test]
    fn unbacked_snapshot_rejected() {
        // Only reachable from an inconsistent snapshot.
        let r = withdraw(&pool(), &state(0, 10, 2), LP, shares(2), request(1));
        assert_eq!(r, Err(AmmError::InsufficientLiquidity));
    }

    #[test]
    fn locked_pool_rejected() {
        let r = withdraw(
            &pool().into_locked(),
            &state(100, 100, 100),
            LP,
            shares(100),
            request(10),
        );
        assert_eq!(r, Err(AmmError::PoolLocked));
    }
}
