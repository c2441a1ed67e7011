//! Permanent pool lock.

use crate::config::PoolConfig;
use crate::domain::AccountId;
use crate::error::{AmmError, Result};

/// Returns the locked version of `pool` if `caller` is its authority.
///
/// Locking has no asset effects. A locked pool rejects every later
/// deposit, swap and withdrawal, so its reserves and LP supply are frozen.
///
/// # Errors
///
/// - [`AmmError::Unauthorized`] if the pool has no authority or `caller`
///   is not it.
/// - [`AmmError::PoolLocked`] if the pool is already locked.
pub fn lock(pool: &PoolConfig, caller: AccountId) -> Result<PoolConfig> {
    match pool.authority() {
        Some(authority) if authority == caller => {}
        _ => return Err(AmmError::Unauthorized),
    }
    pool.ensure_unlocked()?;
    Ok(pool.into_locked())
}
