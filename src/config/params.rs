//! Creation blueprint for a constant-product pool.

use crate::domain::{AccountId, AssetPair, BasisPoints, TokenAddress};
use crate::error::AmmError;

/// Identity of a pool: the creator-chosen seed plus the ordered asset pair.
///
/// Several independent pools may exist for the same pair as long as their
/// seeds differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolKey {
    /// Creator-chosen discriminator.
    pub seed: u64,
    /// The ordered asset pair.
    pub pair: AssetPair,
}

/// Parameters supplied to `initialize`.
///
/// # Validation
///
/// - The fee must be strictly below 10 000 bp.
/// - The two assets must differ (enforced by [`AssetPair`]).
///
/// # Examples
///
/// ```
/// use hydra_cpamm::config::PoolParams;
/// use hydra_cpamm::domain::{BasisPoints, TokenAddress};
///
/// let params = PoolParams::new(
///     1,
///     None,
///     TokenAddress::from_bytes([1u8; 32]),
///     TokenAddress::from_bytes([2u8; 32]),
///     BasisPoints::new(30),
/// )
/// .expect("valid params");
/// assert_eq!(params.key().seed, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolParams {
    seed: u64,
    authority: Option<AccountId>,
    pair: AssetPair,
    fee: BasisPoints,
}

impl PoolParams {
    /// Creates validated pool parameters.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPair`] if `asset_x == asset_y`.
    /// - [`AmmError::InvalidFee`] if `fee >= 10_000` bp.
    pub fn new(
        seed: u64,
        authority: Option<AccountId>,
        asset_x: TokenAddress,
        asset_y: TokenAddress,
        fee: BasisPoints,
    ) -> Result<Self, AmmError> {
        let params = Self {
            seed,
            authority,
            pair: AssetPair::new(asset_x, asset_y)?,
            fee,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates all parameter invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPair`] if both sides are the same asset.
    /// - [`AmmError::InvalidFee`] if the fee is not below 100%.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.pair.x() == self.pair.y() {
            return Err(AmmError::InvalidPair);
        }
        if !self.fee.is_valid_fee() {
            return Err(AmmError::InvalidFee);
        }
        Ok(())
    }

    /// Returns the pool identity these parameters would create.
    #[must_use]
    pub const fn key(&self) -> PoolKey {
        PoolKey {
            seed: self.seed,
            pair: self.pair,
        }
    }

    /// Returns the seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the optional lock authority.
    #[must_use]
    pub const fn authority(&self) -> Option<AccountId> {
        self.authority
    }

    /// Returns the ordered asset pair.
    #[must_use]
    pub const fn pair(&self) -> AssetPair {
        self.pair
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }
}
