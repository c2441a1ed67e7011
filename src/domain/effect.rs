//! Asset movements requested by the engine.

use super::{Amount, Asset, Holder, PoolId};

/// One asset movement that must execute atomically with the rest of its
/// [`Transition`](crate::engine::Transition).
///
/// The engine never touches balances itself; it returns a list of effects
/// which the exchange wraps in an [`EffectBatch`] for an
/// [`AssetLedger`](crate::traits::AssetLedger) to apply whole or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Registers a pool's LP asset with zero supply and the pool as its
    /// only mint authority.
    CreateLpAsset {
        /// The new asset.
        asset: Asset,
        /// Mint authority.
        pool: PoolId,
    },
    /// Moves `amount` of `asset` between two holders.
    Transfer {
        /// Asset moved.
        asset: Asset,
        /// Debited holder.
        from: Holder,
        /// Credited holder.
        to: Holder,
        /// Quantity moved.
        amount: Amount,
    },
    /// Creates `amount` of an LP asset in `to`'s balance.
    Mint {
        /// LP asset minted.
        asset: Asset,
        /// Credited holder.
        to: Holder,
        /// Quantity minted.
        amount: Amount,
    },
    /// Destroys `amount` of an LP asset from `from`'s balance.
    Burn {
        /// LP asset burned.
        asset: Asset,
        /// Debited holder.
        from: Holder,
        /// Quantity burned.
        amount: Amount,
    },
}

impl Effect {
    /// Returns the asset this effect touches.
    #[must_use]
    pub const fn asset(&self) -> Asset {
        match self {
            Self::CreateLpAsset { asset, .. }
            | Self::Transfer { asset, .. }
            | Self::Mint { asset, .. }
            | Self::Burn { asset, .. } => *asset,
        }
    }

    /// Returns the moved quantity, or zero for asset registration.
    pub const fn amount(&self) -> Amount {
        match self {
            Self::CreateLpAsset { .. } => Amount::ZERO,
            Self::Transfer { amount, .. } | Self::Mint { amount, .. } | Self::Burn { amount, .. } => {
                *amount
            }
        }
    }
}

/// Effects of one transition, bound to the pool that issued them.
///
/// Only the crate's [`Exchange`](crate::exchange::Exchange) can build a
/// batch, and only from a transition computed against the ledger's own
/// snapshot. A ledger accepts a vault debit, an LP mint or an LP burn only
/// when it belongs to the [`issuer`](Self::issuer).
///
/// ```compile_fail
/// use hydra_cpamm::domain::{EffectBatch, PoolId};
///
/// let batch = EffectBatch::new(PoolId::new(0), Vec::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectBatch {
    issuer: PoolId,
    effects: Vec<Effect>,
}

impl EffectBatch {
    pub(crate) fn new(issuer: PoolId, effects: Vec<Effect>) -> Self {
        Self { issuer, effects }
    }

    /// Pool on whose behalf the effects run.
    #[must_use]
    pub const fn issuer(&self) -> PoolId {
        self.issuer
    }

    /// The effects, in application order.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }
}
