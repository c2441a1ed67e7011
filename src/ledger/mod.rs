//! [`AssetLedger`](crate::traits::AssetLedger) implementations.

mod memory;

pub use memory::InMemoryLedger;
