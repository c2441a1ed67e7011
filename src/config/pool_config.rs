//! Persisted per-pool record.

use super::{PoolKey, PoolParams};
use crate::domain::{AccountId, Asset, AssetPair, BasisPoints, Holder, PoolId, TokenAddress};
use crate::error::AmmError;

/// The persistent state record of one pool.
///
/// Reserves and LP supply are deliberately absent: they are the ledger
/// balances of [`vault`](Self::vault) and the supply of
/// [`lp_asset`](Self::lp_asset), read fresh for every operation.
///
/// Every field except `locked` is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    id: PoolId,
    seed: u64,
    authority: Option<AccountId>,
    pair: AssetPair,
    fee: BasisPoints,
    locked: bool,
}

impl PoolConfig {
    /// Builds the record for a new, unlocked pool.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolParams::validate`].
    pub fn new(id: PoolId, params: &PoolParams) -> Result<Self, AmmError> {
        params.validate()?;
        Ok(Self {
            id,
            seed: params.seed(),
            authority: params.authority(),
            pair: params.pair(),
            fee: params.fee(),
            locked: false,
        })
    }

    /// Arena handle.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Creator-chosen seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Pool identity.
    #[must_use]
    pub const fn key(&self) -> PoolKey {
        PoolKey {
            seed: self.seed,
            pair: self.pair,
        }
    }

    /// Account allowed to lock the pool, if any.
    #[must_use]
    pub const fn authority(&self) -> Option<AccountId> {
        self.authority
    }

    /// Ordered asset pair.
    #[must_use]
    pub const fn pair(&self) -> AssetPair {
        self.pair
    }

    /// Base asset.
    #[must_use]
    pub const fn asset_x(&self) -> TokenAddress {
        self.pair.x()
    }

    /// Quote asset.
    #[must_use]
    pub const fn asset_y(&self) -> TokenAddress {
        self.pair.y()
    }

    /// Swap fee, frozen at creation.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }

    /// `true` once the pool has been locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// The pool's liquidity-share asset.
    #[must_use]
    pub const fn lp_asset(&self) -> Asset {
        Asset::Lp(self.id)
    }

    /// Ledger holder of the pool's two vaults.
    #[must_use]
    pub const fn vault(&self) -> Holder {
        Holder::Vault(self.id)
    }

    /// Fails with [`AmmError::PoolLocked`] if the pool is locked.
    ///
    /// # Errors
    ///
    /// See above.
    pub const fn ensure_unlocked(&self) -> Result<(), AmmError> {
        if self.locked {
            return Err(AmmError::PoolLocked);
        }
        Ok(())
    }

    /// Returns a copy with `locked` set. Callers commit it only after the
    /// lock transition has been validated.
    pub(crate) const fn into_locked(self) -> Self {
        Self {
            locked: true,
            ..self
        }
    }
}
