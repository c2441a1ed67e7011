//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_cpamm::prelude::*;
//! ```

pub use crate::config::{PoolConfig, PoolKey, PoolParams};
pub use crate::domain::{
    AccountId, Amount, Asset, BasisPoints, Effect, Holder, Liquidity, PoolId, Rounding,
    SwapDirection, TokenAddress,
};
pub use crate::engine::{
    DepositReceipt, DepositRequest, PoolState, SwapReceipt, SwapRequest, WithdrawReceipt,
    WithdrawRequest,
};
pub use crate::error::{AmmError, Result};
pub use crate::exchange::Exchange;
pub use crate::ledger::InMemoryLedger;
pub use crate::math::CheckedArithmetic;
pub use crate::traits::AssetLedger;
