//! # Hydra CPAMM
//!
//! Constant-product (`x · y = k`) automated market maker engine: two-asset
//! pools with escrowed reserves, a per-pool liquidity-share (LP) asset, and
//! exact-input swaps priced on the constant-product curve with a fee fixed
//! at creation.
//!
//! Every amount is a `u64`, every product is formed in `u128`, and every
//! rounding decision favours the pool: deposits round the collected amounts
//! up, swaps and withdrawals round the paid amounts down.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` on domain, config and receipt types |
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_cpamm::prelude::*;
//!
//! let lp = AccountId::from_bytes([1; 32]);
//! let trader = AccountId::from_bytes([2; 32]);
//! let usdc = TokenAddress::from_bytes([0xA0; 32]);
//! let weth = TokenAddress::from_bytes([0xB0; 32]);
//!
//! // 1. Fund accounts on an in-memory ledger
//! let mut ledger = InMemoryLedger::new();
//! ledger.credit(lp, usdc, Amount::new(1_000_000)).expect("funded");
//! ledger.credit(lp, weth, Amount::new(1_000_000)).expect("funded");
//! ledger.credit(trader, usdc, Amount::new(10_000)).expect("funded");
//!
//! // 2. Create a 0.30% pool
//! let mut exchange = Exchange::new(ledger);
//! let params = PoolParams::new(1, None, usdc, weth, BasisPoints::new(30)).expect("valid");
//! let pool = exchange.initialize(&params).expect("created");
//!
//! // 3. Bootstrap liquidity; the first depositor sets the price
//! exchange
//!     .deposit(
//!         pool,
//!         lp,
//!         DepositRequest::new(Liquidity::new(2_000_000), Amount::new(1_000_000), Amount::new(1_000_000)),
//!     )
//!     .expect("bootstrap");
//!
//! // 4. Sell 2 345 units of X for Y
//! let receipt = exchange
//!     .swap(pool, trader, SwapRequest::new(SwapDirection::XToY, Amount::new(2_345), None))
//!     .expect("swap");
//! assert_eq!(receipt.amount_out, Amount::new(2_331));
//! assert_eq!(receipt.fee, Amount::new(8));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  Exchange::{initialize, deposit, swap, withdraw, lock}
//! └──────┬──────┘
//!        │ PoolId handle
//!        ▼
//! ┌─────────────┐
//! │  Exchange    │  snapshots PoolState from the ledger, commits configs
//! └──────┬──────┘
//!        │ &PoolConfig, &PoolState
//!        ▼
//! ┌─────────────┐
//! │   Engine     │  pure: returns Transition { receipt, state_after, effects }
//! └──────┬──────┘
//!        │ &[Effect]
//!        ▼
//! ┌─────────────┐
//! │ AssetLedger  │  applies all effects or none
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`Asset`](domain::Asset), [`Effect`](domain::Effect), etc. |
//! | [`math`]   | Checked arithmetic, `mul_div`, integer square root, curve quote |
//! | [`config`] | [`PoolParams`](config::PoolParams) blueprint and persisted [`PoolConfig`](config::PoolConfig) |
//! | [`engine`] | Pure pool transitions and their request/receipt types |
//! | [`traits`] | The [`AssetLedger`](traits::AssetLedger) seam |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) |
//! | [`exchange`] | [`Exchange`](exchange::Exchange) pool arena |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod exchange;
pub mod ledger;
pub mod math;
pub mod prelude;
pub mod traits;
