//! Integration tests exercising full pool lifecycles through the public
//! API: `Exchange` over an `InMemoryLedger`.

#![allow(clippy::panic)]

use hydra_cpamm::prelude::*;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const ADMIN: AccountId = AccountId::from_bytes([0xAD; 32]);
const ALICE: AccountId = AccountId::from_bytes([0xA1; 32]);
const BOB: AccountId = AccountId::from_bytes([0xB0; 32]);
const TRADER: AccountId = AccountId::from_bytes([0x7A; 32]);
const X: TokenAddress = TokenAddress::from_bytes([1; 32]);
const Y: TokenAddress = TokenAddress::from_bytes([2; 32]);

const FUNDING: u64 = 100_000_000;

fn exchange() -> Exchange<InMemoryLedger> {
    let mut ledger = InMemoryLedger::new();
    for account in [ALICE, BOB, TRADER] {
        for token in [X, Y] {
            let Ok(()) = ledger.credit(account, token, Amount::new(FUNDING)) else {
                panic!("funded");
            };
        }
    }
    Exchange::new(ledger)
}

fn params(seed: u64, fee: u16) -> PoolParams {
    let Ok(p) = PoolParams::new(seed, Some(ADMIN), X, Y, BasisPoints::new(fee)) else {
        panic!("valid params");
    };
    p
}

fn create(ex: &mut Exchange<InMemoryLedger>, seed: u64) -> PoolId {
    let Ok(id) = ex.initialize(&params(seed, 30)) else {
        panic!("pool created");
    };
    id
}

fn bootstrap(ex: &mut Exchange<InMemoryLedger>, id: PoolId) {
    let Ok(r) = ex.deposit(
        id,
        ALICE,
        DepositRequest::new(
            Liquidity::new(2_000_000),
            Amount::new(1_000_000),
            Amount::new(1_000_000),
        ),
    ) else {
        panic!("bootstrap deposit");
    };
    assert!(r.bootstrap);
}

fn balance(ex: &Exchange<InMemoryLedger>, account: AccountId, token: TokenAddress) -> u64 {
    ex.ledger()
        .balance(&Holder::Account(account), &Asset::Token(token))
        .get()
}

fn state(ex: &Exchange<InMemoryLedger>, id: PoolId) -> PoolState {
    let Ok(s) = ex.state(id) else {
        panic!("pool exists");
    };
    s
}

/// Asserts the vaults hold exactly what the callers are missing.
fn assert_conserved(ex: &Exchange<InMemoryLedger>, pools: &[PoolId]) {
    for token in [X, Y] {
        let held: u64 = [ALICE, BOB, TRADER]
            .iter()
            .map(|a| balance(ex, *a, token))
            .sum();
        let vaults: u64 = pools
            .iter()
            .map(|p| {
                ex.ledger()
                    .balance(&Holder::Vault(*p), &Asset::Token(token))
                    .get()
            })
            .sum();
        assert_eq!(held + vaults, 3 * FUNDING, "conservation of {token}");
        assert_eq!(ex.ledger().supply(&Asset::Token(token)), Amount::new(3 * FUNDING));
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn full_lifecycle() {
    let mut ex = exchange();
    let id = create(&mut ex, 42);
    bootstrap(&mut ex, id);
    assert_eq!(
        state(&ex, id),
        PoolState::new(
            Amount::new(1_000_000),
            Amount::new(1_000_000),
            Liquidity::new(2_000_000)
        )
    );

    let Ok(swap) = ex.swap(
        id,
        TRADER,
        SwapRequest::new(SwapDirection::XToY, Amount::new(2_345), Some(Amount::new(2_300))),
    ) else {
        panic!("swap");
    };
    assert_eq!(swap.amount_out, Amount::new(2_331));
    assert_eq!(swap.fee, Amount::new(8));
    let after_swap = state(&ex, id);
    assert_eq!(after_swap.reserve_x(), Amount::new(1_002_345));
    assert_eq!(after_swap.reserve_y(), Amount::new(997_669));
    assert!(after_swap.invariant() >= 1_000_000u128 * 1_000_000u128);
    assert_conserved(&ex, &[id]);

    let Ok(out) = ex.withdraw(id, ALICE, WithdrawRequest::new(Liquidity::new(2_000_000))) else {
        panic!("withdraw");
    };
    assert_eq!(out.amount_x, Amount::new(1_002_345));
    assert_eq!(out.amount_y, Amount::new(997_669));
    assert_eq!(state(&ex, id), PoolState::EMPTY);
    assert_eq!(balance(&ex, ALICE, X), FUNDING + 2_345);
    assert_eq!(balance(&ex, ALICE, Y), FUNDING - 2_331);
    assert_conserved(&ex, &[id]);
}

#[test]
fn second_provider_shares_pro_rata() {
    let mut ex = exchange();
    let id = create(&mut ex, 1);
    bootstrap(&mut ex, id);

    let Ok(bob_in) = ex.deposit(
        id,
        BOB,
        DepositRequest::new(Liquidity::new(500_000), Amount::new(250_000), Amount::new(250_000)),
    ) else {
        panic!("proportional deposit");
    };
    assert!(!bob_in.bootstrap);
    assert_eq!(bob_in.amount_x, Amount::new(250_000));
    assert_eq!(bob_in.amount_y, Amount::new(250_000));

    for _ in 0..10 {
        let Ok(_) = ex.swap(
            id,
            TRADER,
            SwapRequest::new(SwapDirection::XToY, Amount::new(10_000), None),
        ) else {
            panic!("swap x");
        };
        let Ok(_) = ex.swap(
            id,
            TRADER,
            SwapRequest::new(SwapDirection::YToX, Amount::new(10_000), None),
        ) else {
            panic!("swap y");
        };
    }

    let Ok(bob_out) = ex.withdraw(id, BOB, WithdrawRequest::new(Liquidity::new(500_000))) else {
        panic!("withdraw");
    };
    // Fees accrue to providers; the round trips leave the pool richer.
    let contributed = u128::from(bob_in.amount_x.get()) * u128::from(bob_in.amount_y.get());
    let received = u128::from(bob_out.amount_x.get()) * u128::from(bob_out.amount_y.get());
    assert!(received > contributed);
    assert_eq!(ex.shares_of(id, BOB), Ok(Liquidity::ZERO));
    assert_eq!(ex.shares_of(id, ALICE), Ok(Liquidity::new(2_000_000)));
    assert_conserved(&ex, &[id]);
}

#[test]
fn pools_with_same_pair_are_isolated() {
    let mut ex = exchange();
    let a = create(&mut ex, 1);
    let b = create(&mut ex, 2);
    bootstrap(&mut ex, a);
    assert_eq!(state(&ex, b), PoolState::EMPTY);
    assert_eq!(
        ex.swap(
            b,
            TRADER,
            SwapRequest::new(SwapDirection::XToY, Amount::new(1_000), None)
        ),
        Err(AmmError::InsufficientLiquidity)
    );
    assert_eq!(ex.find(&params(2, 30).key()), Some(b));
    assert_eq!(ex.initialize(&params(1, 5)), Err(AmmError::AlreadyExists));
    assert_conserved(&ex, &[a, b]);
}

#[test]
fn reversed_pair_is_a_distinct_pool() {
    let mut ex = exchange();
    let Ok(p) = PoolParams::new(1, None, Y, X, BasisPoints::new(30)) else {
        panic!("valid params");
    };
    let forward = create(&mut ex, 1);
    let Ok(reverse) = ex.initialize(&p) else {
        panic!("reverse pool");
    };
    assert_ne!(forward, reverse);
}

#[test]
fn invalid_params_never_reach_the_arena() {
    assert_eq!(
        PoolParams::new(1, None, X, Y, BasisPoints::new(10_000)).err(),
        Some(AmmError::InvalidFee)
    );
    assert_eq!(
        PoolParams::new(1, None, X, X, BasisPoints::new(30)).err(),
        Some(AmmError::InvalidPair)
    );
}

#[test]
fn lock_freezes_everything() {
    let mut ex = exchange();
    let id = create(&mut ex, 9);
    bootstrap(&mut ex, id);
    assert_eq!(ex.lock(id, ALICE), Err(AmmError::Unauthorized));
    assert_eq!(ex.lock(id, ADMIN), Ok(()));

    let frozen = state(&ex, id);
    assert_eq!(
        ex.deposit(
            id,
            BOB,
            DepositRequest::new(Liquidity::new(10), Amount::MAX, Amount::MAX)
        ),
        Err(AmmError::PoolLocked)
    );
    assert_eq!(
        ex.swap(
            id,
            TRADER,
            SwapRequest::new(SwapDirection::YToX, Amount::new(100), None)
        ),
        Err(AmmError::PoolLocked)
    );
    assert_eq!(
        ex.withdraw(id, ALICE, WithdrawRequest::new(Liquidity::new(1))),
        Err(AmmError::PoolLocked)
    );
    assert_eq!(state(&ex, id), frozen);
    assert!(ex.pool(id).is_ok_and(PoolConfig::is_locked));
}

#[test]
fn failed_operations_change_nothing() {
    let mut ex = exchange();
    let id = create(&mut ex, 3);
    bootstrap(&mut ex, id);
    let before = ex.ledger().clone();

    // Slippage
    let r = ex.swap(
        id,
        TRADER,
        SwapRequest::new(SwapDirection::XToY, Amount::new(2_345), Some(Amount::new(2_332))),
    );
    assert_eq!(r, Err(AmmError::SlippageExceeded));
    assert_eq!(ex.ledger(), &before);

    // Overdraft on the second transfer of a deposit
    let poor = AccountId::from_bytes([0x55; 32]);
    let Ok(()) = ex.credit(poor, X, Amount::new(1_000_000)) else {
        panic!("funded");
    };
    let funded = ex.ledger().clone();
    let r = ex.deposit(
        id,
        poor,
        DepositRequest::new(Liquidity::new(2_000), Amount::MAX, Amount::MAX),
    );
    assert_eq!(r, Err(AmmError::InsufficientBalance));
    assert_eq!(ex.ledger(), &funded);

    // Burning shares one does not own
    let r = ex.withdraw(id, BOB, WithdrawRequest::new(Liquidity::new(1)));
    assert_eq!(r, Err(AmmError::InsufficientShare));

    assert_eq!(
        state(&ex, id),
        PoolState::new(
            Amount::new(1_000_000),
            Amount::new(1_000_000),
            Liquidity::new(2_000_000)
        )
    );
}

#[test]
fn withdraw_minimums_protect_provider() {
    let mut ex = exchange();
    let id = create(&mut ex, 4);
    bootstrap(&mut ex, id);
    let request = WithdrawRequest::new(Liquidity::new(1_000_000))
        .with_minimums(Amount::new(500_001), Amount::new(500_000));
    assert_eq!(ex.withdraw(id, ALICE, request), Err(AmmError::SlippageExceeded));

    let Ok(quote) = ex.quote_withdraw(id, ALICE, WithdrawRequest::new(Liquidity::new(1_000_000)))
    else {
        panic!("quote");
    };
    let request = WithdrawRequest::new(Liquidity::new(1_000_000))
        .with_minimums(quote.amount_x, quote.amount_y);
    assert_eq!(ex.withdraw(id, ALICE, request), Ok(quote));
}

#[test]
fn draining_swap_is_rejected() {
    let mut ex = exchange();
    let id = create(&mut ex, 5);
    let Ok(_) = ex.deposit(
        id,
        ALICE,
        DepositRequest::new(Liquidity::new(1), Amount::new(10), Amount::new(10)),
    ) else {
        panic!("bootstrap");
    };
    let Ok(r) = ex.swap(
        id,
        TRADER,
        SwapRequest::new(SwapDirection::XToY, Amount::new(FUNDING), None),
    ) else {
        panic!("swap");
    };
    assert!(r.amount_out < Amount::new(10));
    assert!(!state(&ex, id).reserve_y().is_zero());
}

#[cfg(feature = "serde")]
#[test]
fn receipts_serialize() {
    let receipt = SwapReceipt {
        direction: SwapDirection::XToY,
        amount_in: Amount::new(2_345),
        amount_out: Amount::new(2_331),
        fee: Amount::new(8),
    };
    let Ok(json) = serde_json::to_string(&receipt) else {
        panic!("serialize");
    };
    let Ok(back) = serde_json::from_str::<SwapReceipt>(&json) else {
        panic!("deserialize");
    };
    assert_eq!(back, receipt);
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_params_keep_pair_distinct() {
    let Ok(json) = serde_json::to_string(&params(1, 30)) else {
        panic!("serialize");
    };
    let (Ok(x), Ok(y)) = (serde_json::to_string(&X), serde_json::to_string(&Y)) else {
        panic!("serialize");
    };
    let same = json.replace(&y, &x);
    assert_ne!(same, json);
    assert!(serde_json::from_str::<PoolParams>(&same).is_err());

    let Ok(back) = serde_json::from_str::<PoolParams>(&json) else {
        panic!("deserialize");
    };
    let mut ex = exchange();
    assert_eq!(ex.initialize(&back), Ok(PoolId::new(0)));
}
