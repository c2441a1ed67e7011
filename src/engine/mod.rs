//! Pure state transitions of a constant-product pool.
//!
//! Every operation takes the pool's [`PoolConfig`](crate::config::PoolConfig)
//! and a [`PoolState`] snapshot by reference, validates the request, and
//! returns a [`Transition`]: the effects to apply, the snapshot they lead
//! to, and an operation-specific receipt. Nothing here mutates state or
//! touches a ledger, so a failed computation leaves no trace and any
//! transition can double as a quote.
//!
//! # Rounding
//!
//! | Operation | Computed amount | Direction |
//! |-----------|-----------------|-----------|
//! | `deposit` (proportional) | assets collected | up |
//! | `swap` | fee-adjusted input, output | down |
//! | `withdraw` | assets paid | down |
//!
//! # Invariants
//!
//! After every successful transition:
//!
//! 1. shares outstanding ⇒ both reserves non-zero;
//! 2. a swap never decreases `reserve_x × reserve_y`;
//! 3. a locked pool produces no transition at all.

mod deposit;
mod initialize;
mod lock;
mod state;
mod swap;
mod withdraw;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

use crate::domain::Effect;

pub use deposit::{deposit, DepositReceipt, DepositRequest};
pub use initialize::initialize;
pub use lock::lock;
pub use state::PoolState;
pub use swap::{swap, SwapReceipt, SwapRequest};
pub use withdraw::{withdraw, WithdrawReceipt, WithdrawRequest};

/// Result of a successful engine operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<R> {
    /// Operation-specific outcome.
    pub receipt: R,
    /// Snapshot after the effects are applied.
    pub state_after: PoolState,
    /// Asset movements to apply atomically, in order.
    pub effects: Vec<Effect>,
}
