//! Pool creation.

use super::{PoolState, Transition};
use crate::config::{PoolConfig, PoolParams};
use crate::domain::{Effect, PoolId};
use crate::error::Result;

/// Builds the record of a new pool stored under `id`.
///
/// The only effect registers the pool's LP asset with zero supply. Both
/// vaults start empty; identity collisions are the arena's concern.
///
/// # Errors
///
/// Propagates [`PoolParams::validate`]
/// ([`AmmError::InvalidFee`](crate::error::AmmError::InvalidFee)).
pub fn initialize(id: PoolId, params: &PoolParams) -> Result<Transition<PoolConfig>> {
    let config = PoolConfig::new(id, params)?;
    Ok(Transition {
        receipt: config,
        state_after: PoolState::EMPTY,
        effects: vec![Effect::CreateLpAsset {
            asset: config.lp_asset(),
            pool: id,
        }],
    })
}
