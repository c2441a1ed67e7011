//! Core trait abstractions.
//!
//! [`AssetLedger`] is the only seam the pool engine depends on: anything
//! that can report balances and apply a list of [`Effect`](crate::domain::Effect)s
//! atomically can host pools.

mod asset_ledger;

pub use asset_ledger::AssetLedger;
