//! Property-based checks of the pool engine.
//!
//! 1. **Product monotonicity**: `reserve_x × reserve_y` never decreases
//!    across a sequence of swaps.
//! 2. **Round trip loses value**: X→Y→X returns at most the original input.
//! 3. **No free shares**: deposit then withdraw returns at most what was
//!    contributed.
//! 4. **Effect conservation**: vault balances after applying a transition's
//!    transfers equal its `state_after` reserves.
//! 5. **Output bound**: a swap never pays out the whole output reserve.

use proptest::prelude::*;

use super::{deposit, swap, withdraw, DepositRequest, PoolState, SwapRequest, WithdrawRequest};
use crate::config::{PoolConfig, PoolParams};
use crate::domain::{
    AccountId, Amount, Asset, BasisPoints, Effect, Holder, Liquidity, PoolId, SwapDirection,
    TokenAddress,
};

const CALLER: AccountId = AccountId::from_bytes([0x33; 32]);

fn pool(fee: u16) -> PoolConfig {
    let Ok(params) = PoolParams::new(
        7,
        None,
        TokenAddress::from_bytes([1; 32]),
        TokenAddress::from_bytes([2; 32]),
        BasisPoints::new(fee),
    ) else {
        panic!("valid params");
    };
    let Ok(cfg) = PoolConfig::new(PoolId::new(0), &params) else {
        panic!("valid config");
    };
    cfg
}

/// Reserves in `[1_000, 10^12]`.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    1_000u64..=1_000_000_000_000u64
}

fn fee_strategy() -> impl Strategy<Value = u16> {
    0u16..=1_000u16
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    prop_oneof![Just(SwapDirection::XToY), Just(SwapDirection::YToX)]
}

/// Net vault movement of one asset side across `effects`.
fn vault_delta(effects: &[Effect], vault: Holder, x_side: bool, cfg: &PoolConfig) -> i128 {
    let side = if x_side { cfg.asset_x() } else { cfg.asset_y() };
    effects
        .iter()
        .map(|e| match *e {
            Effect::Transfer { asset, from, to, amount } if asset == Asset::Token(side) => {
                let v = i128::from(amount.get());
                match (from == vault, to == vault) {
                    (false, true) => v,
                    (true, false) => -v,
                    _ => 0,
                }
            }
            _ => 0,
        })
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_product_never_decreases(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
        swaps in prop::collection::vec((direction_strategy(), 1u64..=1_000_000_000u64), 1..8),
    ) {
        let cfg = pool(fee);
        let mut state = PoolState::new(Amount::new(rx), Amount::new(ry), Liquidity::new(1));
        for (direction, amount_in) in swaps {
            let request = SwapRequest::new(direction, Amount::new(amount_in), None);
            let Ok(t) = swap(&cfg, &state, CALLER, request) else {
                continue;
            };
            prop_assert!(
                t.state_after.invariant() >= state.invariant(),
                "k decreased: {} -> {}",
                state.invariant(),
                t.state_after.invariant()
            );
            state = t.state_after;
        }
    }

    #[test]
    fn prop_round_trip_loses_value(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let cfg = pool(fee);
        let start = PoolState::new(Amount::new(rx), Amount::new(ry), Liquidity::new(1));
        let amount_in = (rx / 100).max(1);

        let Ok(there) = swap(&cfg, &start, CALLER, SwapRequest::new(
            SwapDirection::XToY, Amount::new(amount_in), None,
        )) else {
            return Ok(());
        };
        let Ok(back) = swap(&cfg, &there.state_after, CALLER, SwapRequest::new(
            SwapDirection::YToX, there.receipt.amount_out, None,
        )) else {
            return Ok(());
        };
        prop_assert!(back.receipt.amount_out.get() <= amount_in);
    }

    #[test]
    fn prop_deposit_then_withdraw_returns_at_most_contributed(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        supply in 1_000u64..=1_000_000_000u64,
        lp in 1u64..=1_000_000u64,
    ) {
        let cfg = pool(30);
        let start = PoolState::new(Amount::new(rx), Amount::new(ry), Liquidity::new(supply));
        let Ok(dep) = deposit(&cfg, &start, CALLER, DepositRequest::new(
            Liquidity::new(lp), Amount::MAX, Amount::MAX,
        )) else {
            return Ok(());
        };
        let Ok(wd) = withdraw(
            &cfg,
            &dep.state_after,
            CALLER,
            Liquidity::new(lp),
            WithdrawRequest::new(Liquidity::new(lp)),
        ) else {
            return Ok(());
        };
        prop_assert!(wd.receipt.amount_x <= dep.receipt.amount_x);
        prop_assert!(wd.receipt.amount_y <= dep.receipt.amount_y);
        prop_assert!(wd.state_after.reserve_x() >= start.reserve_x());
        prop_assert!(wd.state_after.reserve_y() >= start.reserve_y());
        prop_assert_eq!(wd.state_after.lp_supply(), start.lp_supply());
    }

    #[test]
    fn prop_effects_match_state_after(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        direction in direction_strategy(),
        amount_in in 1u64..=1_000_000_000u64,
    ) {
        let cfg = pool(30);
        let start = PoolState::new(Amount::new(rx), Amount::new(ry), Liquidity::new(1));
        let Ok(t) = swap(&cfg, &start, CALLER, SwapRequest::new(
            direction, Amount::new(amount_in), None,
        )) else {
            return Ok(());
        };
        let dx = vault_delta(&t.effects, cfg.vault(), true, &cfg);
        let dy = vault_delta(&t.effects, cfg.vault(), false, &cfg);
        prop_assert_eq!(i128::from(rx) + dx, i128::from(t.state_after.reserve_x().get()));
        prop_assert_eq!(i128::from(ry) + dy, i128::from(t.state_after.reserve_y().get()));
    }

    #[test]
    fn prop_output_below_reserve(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        amount_in in 1u64..=u64::MAX / 2,
    ) {
        let cfg = pool(0);
        let start = PoolState::new(Amount::new(rx), Amount::new(ry), Liquidity::new(1));
        if let Ok(t) = swap(&cfg, &start, CALLER, SwapRequest::new(
            SwapDirection::XToY, Amount::new(amount_in), None,
        )) {
            prop_assert!(t.receipt.amount_out < Amount::new(ry));
            prop_assert!(!t.state_after.reserve_y().is_zero());
        }
    }
}
