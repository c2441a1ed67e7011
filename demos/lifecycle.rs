//! Constant-product pool lifecycle.
//!
//! Creates a 0.30% pool, bootstraps it, adds a second provider, runs a few
//! swaps, withdraws everything and finally locks the pool.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_cpamm=debug cargo run --example lifecycle
//! ```

use hydra_cpamm::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hydra_cpamm=info")),
        )
        .init();

    println!("=== Constant Product AMM (x · y = k) ===\n");

    // ── 1. Fund accounts ────────────────────────────────────────────────
    let admin = AccountId::from_bytes([0xAD; 32]);
    let alice = AccountId::from_bytes([0xA1; 32]);
    let bob = AccountId::from_bytes([0xB0; 32]);
    let trader = AccountId::from_bytes([0x7A; 32]);
    let usdc = TokenAddress::from_bytes([0x01; 32]);
    let weth = TokenAddress::from_bytes([0x02; 32]);

    let mut ledger = InMemoryLedger::new();
    for account in [alice, bob, trader] {
        ledger.credit(account, usdc, Amount::new(10_000_000))?;
        ledger.credit(account, weth, Amount::new(10_000_000))?;
    }

    // ── 2. Create the pool ──────────────────────────────────────────────
    let mut exchange = Exchange::new(ledger);
    let params = PoolParams::new(1, Some(admin), usdc, weth, BasisPoints::new(30))?;
    let pool = exchange.initialize(&params)?;
    println!("Pool {pool}: {usdc} / {weth}, fee {}", params.fee());

    // ── 3. Bootstrap: the first provider sets the price ─────────────────
    let boot = exchange.deposit(
        pool,
        alice,
        DepositRequest::new(
            Liquidity::new(2_000_000),
            Amount::new(1_000_000),
            Amount::new(1_000_000),
        ),
    )?;
    println!(
        "\nAlice bootstraps with {} / {} for {} LP",
        boot.amount_x, boot.amount_y, boot.lp_minted
    );

    // ── 4. Proportional deposit, bounded by a quote ─────────────────────
    let wanted = Liquidity::new(500_000);
    let quote = exchange.quote_deposit(pool, bob, DepositRequest::new(wanted, Amount::MAX, Amount::MAX))?;
    let joined = exchange.deposit(
        pool,
        bob,
        DepositRequest::new(wanted, quote.amount_x, quote.amount_y),
    )?;
    println!(
        "Bob deposits {} / {} for {} LP",
        joined.amount_x, joined.amount_y, joined.lp_minted
    );

    // ── 5. Swaps ────────────────────────────────────────────────────────
    for (direction, amount) in [
        (SwapDirection::XToY, 2_345),
        (SwapDirection::YToX, 50_000),
        (SwapDirection::XToY, 10_000),
    ] {
        let quote = exchange.quote_swap(pool, trader, SwapRequest::new(direction, Amount::new(amount), None))?;
        let receipt = exchange.swap(
            pool,
            trader,
            SwapRequest::new(direction, Amount::new(amount), Some(quote.amount_out)),
        )?;
        let state = exchange.state(pool)?;
        println!(
            "Swap {direction}: in {} out {} fee {} | reserves {} / {} | k = {}",
            receipt.amount_in,
            receipt.amount_out,
            receipt.fee,
            state.reserve_x(),
            state.reserve_y(),
            state.invariant()
        );
    }

    // ── 6. Slippage protection ──────────────────────────────────────────
    let rejected = exchange.swap(
        pool,
        trader,
        SwapRequest::new(SwapDirection::XToY, Amount::new(1_000), Some(Amount::new(1_000))),
    );
    if let Err(err) = rejected {
        println!("\nTight bound rejected: {err} (retryable: {})", err.is_retryable());
    }

    // ── 7. Everyone leaves ──────────────────────────────────────────────
    for (name, who) in [("Bob", bob), ("Alice", alice)] {
        let shares = exchange.shares_of(pool, who)?;
        let out = exchange.withdraw(pool, who, WithdrawRequest::new(shares))?;
        println!(
            "{name} burns {} LP for {} / {}",
            out.lp_burned, out.amount_x, out.amount_y
        );
    }
    let state = exchange.state(pool)?;
    println!("Pool after withdrawals: {state:?}");

    // ── 8. Lock ─────────────────────────────────────────────────────────
    exchange.lock(pool, admin)?;
    let after_lock = exchange.deposit(
        pool,
        alice,
        DepositRequest::new(Liquidity::new(1), Amount::new(1), Amount::new(1)),
    );
    println!("\nDeposit after lock: {after_lock:?}");

    Ok(())
}
