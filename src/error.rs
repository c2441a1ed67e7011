//! Unified error type for the pool engine.
//!
//! Every fallible operation in the crate returns [`AmmError`]. Each variant
//! is terminal for the attempted operation: the engine never retries and
//! never applies a partial state change before returning one.

use thiserror::Error;

/// Errors produced by the math library, the pool engine, and ledgers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AmmError {
    /// Fee outside `0..10_000` basis points.
    #[error("fee must be below 10000 basis points")]
    InvalidFee,

    /// A pool with the same `(seed, asset_x, asset_y)` already exists, or
    /// its LP asset is already registered.
    #[error("pool already exists")]
    AlreadyExists,

    /// The pool has been locked; deposits, swaps and withdrawals are
    /// permanently rejected.
    #[error("pool is locked")]
    PoolLocked,

    /// A required amount was zero.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// The computed amount fell outside the caller's bound.
    #[error("slippage bound exceeded")]
    SlippageExceeded,

    /// The reserves cannot satisfy the request.
    #[error("insufficient pool liquidity")]
    InsufficientLiquidity,

    /// The caller does not hold enough LP shares.
    #[error("insufficient LP share balance")]
    InsufficientShare,

    /// A checked operation overflowed or underflowed.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// Division by zero in a checked operation.
    #[error("division by zero")]
    DivisionByZero,

    /// No pool is registered under the given handle.
    #[error("pool not found")]
    NotFound,

    /// Both sides of the pool name the same asset.
    #[error("pool assets must be distinct")]
    InvalidPair,

    /// The caller is not the pool's lock authority, or the pool has none.
    #[error("caller is not authorized")]
    Unauthorized,

    /// A ledger debit exceeds the holder's balance.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The ledger refused an effect as malformed.
    #[error("invalid effect: {0}")]
    InvalidEffect(&'static str),
}

impl AmmError {
    /// Returns `true` if the same operation may succeed after the caller
    /// adjusts its parameters or balances.
    ///
    /// ```
    /// use hydra_cpamm::error::AmmError;
    ///
    /// assert!(AmmError::SlippageExceeded.is_retryable());
    /// assert!(!AmmError::PoolLocked.is_retryable());
    /// ```
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::SlippageExceeded
                | Self::InsufficientLiquidity
                | Self::InsufficientShare
                | Self::InsufficientBalance
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
