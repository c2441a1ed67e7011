//! Read-only snapshot of a pool's balances.

use crate::domain::{Amount, Liquidity, SwapDirection};
use crate::error::AmmError;

/// Reserves and LP supply of one pool at one instant.
///
/// The [`Exchange`](crate::exchange::Exchange) assembles this from the
/// ledger before each operation; the engine returns the post-operation
/// snapshot in [`Transition::state_after`](super::Transition::state_after).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolState {
    reserve_x: Amount,
    reserve_y: Amount,
    lp_supply: Liquidity,
}

impl PoolState {
    /// A pool with no reserves and no shares outstanding.
    pub const EMPTY: Self = Self {
        reserve_x: Amount::ZERO,
        reserve_y: Amount::ZERO,
        lp_supply: Liquidity::ZERO,
    };

    /// Creates a snapshot from raw balances.
    pub const fn new(reserve_x: Amount, reserve_y: Amount, lp_supply: Liquidity) -> Self {
        Self {
            reserve_x,
            reserve_y,
            lp_supply,
        }
    }

    /// X-vault balance.
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Y-vault balance.
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Outstanding LP shares.
    pub const fn lp_supply(&self) -> Liquidity {
        self.lp_supply
    }

    /// `(reserve_in, reserve_out)` for a swap direction.
    #[must_use]
    pub const fn reserves_for(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::XToY => (self.reserve_x, self.reserve_y),
            SwapDirection::YToX => (self.reserve_y, self.reserve_x),
        }
    }

    /// Rebuilds a snapshot from `(reserve_in, reserve_out)` ordered by
    /// `direction`.
    pub(crate) const fn with_reserves_for(
        &self,
        direction: SwapDirection,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Self {
        match direction {
            SwapDirection::XToY => Self::new(reserve_in, reserve_out, self.lp_supply),
            SwapDirection::YToX => Self::new(reserve_out, reserve_in, self.lp_supply),
        }
    }

    /// The curve invariant `k = reserve_x × reserve_y`, exact in `u128`.
    #[must_use]
    pub const fn invariant(&self) -> u128 {
        self.reserve_x.widening_mul(&self.reserve_y)
    }

    /// Checks that outstanding shares are backed by both reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientLiquidity`] if shares are
    /// outstanding while either reserve is empty.
    pub const fn ensure_backed(&self) -> Result<(), AmmError> {
        if !self.lp_supply.is_zero() && (self.reserve_x.is_zero() || self.reserve_y.is_zero()) {
            return Err(AmmError::InsufficientLiquidity);
        }
        Ok(())
    }
}
