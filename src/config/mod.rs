//! Pool creation parameters and the persisted pool record.
//!
//! [`PoolParams`] is the validated blueprint handed to `initialize`;
//! [`PoolConfig`] is what a pool persists afterwards; [`PoolKey`] is the
//! identity under which a pool is unique.

mod params;
mod pool_config;

pub use params::{PoolKey, PoolParams};
pub use pool_config::PoolConfig;
