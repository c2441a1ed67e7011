//! Ordered pair of distinct escrowed assets.

use super::{SwapDirection, TokenAddress};
use crate::error::AmmError;

/// The two token assets of a pool, in creation order.
///
/// Unlike a canonical pair, the order is significant: `x` is the base side
/// referenced by [`SwapDirection`], and `(A, B)` and `(B, A)` with the same
/// seed are two different pools.
///
/// # Examples
///
/// ```
/// use hydra_cpamm::domain::{AssetPair, TokenAddress};
///
/// let usdc = TokenAddress::from_bytes([1u8; 32]);
/// let weth = TokenAddress::from_bytes([2u8; 32]);
///
/// let pair = AssetPair::new(weth, usdc).expect("distinct assets");
/// assert_eq!(pair.x(), weth);
/// assert_eq!(pair.y(), usdc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "AssetPairFields"))]
pub struct AssetPair {
    x: TokenAddress,
    y: TokenAddress,
}

/// Unchecked wire form of [`AssetPair`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct AssetPairFields {
    x: TokenAddress,
    y: TokenAddress,
}

#[cfg(feature = "serde")]
impl TryFrom<AssetPairFields> for AssetPair {
    type Error = AmmError;

    fn try_from(fields: AssetPairFields) -> Result<Self, Self::Error> {
        Self::new(fields.x, fields.y)
    }
}

impl AssetPair {
    /// Creates a new ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPair`] if both sides are the same asset.
    pub fn new(x: TokenAddress, y: TokenAddress) -> Result<Self, AmmError> {
        if x == y {
            return Err(AmmError::InvalidPair);
        }
        Ok(Self { x, y })
    }

    /// Returns the base asset.
    #[must_use]
    pub const fn x(&self) -> TokenAddress {
        self.x
    }

    /// Returns the quote asset.
    #[must_use]
    pub const fn y(&self) -> TokenAddress {
        self.y
    }

    /// Returns `(asset_in, asset_out)` for a swap direction.
    #[must_use]
    pub const fn route(&self, direction: SwapDirection) -> (TokenAddress, TokenAddress) {
        match direction {
            SwapDirection::XToY => (self.x, self.y),
            SwapDirection::YToX => (self.y, self.x),
        }
    }

    /// Returns `true` if `asset` is one of the two sides.
    #[must_use]
    pub fn contains(&self, asset: &TokenAddress) -> bool {
        self.x == *asset || self.y == *asset
    }
}
