//! Fundamental domain value types used throughout the pool engine.
//!
//! All quantities are newtypes over fixed-width unsigned integers with
//! checked arithmetic; identifiers are opaque and their derivation is left
//! to the host.

mod address;
mod amount;
mod asset;
mod asset_pair;
mod basis_points;
mod direction;
mod effect;
mod liquidity;
mod rounding;

pub use address::{AccountId, PoolId, TokenAddress};
pub use amount::Amount;
pub use asset::{Asset, Holder};
pub use asset_pair::AssetPair;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use direction::SwapDirection;
pub use effect::{Effect, EffectBatch};
pub use liquidity::Liquidity;
pub use rounding::Rounding;
