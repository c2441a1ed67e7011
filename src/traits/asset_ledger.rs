//! Balance book seam between the pool engine and the host.
//!
//! The engine never reads or writes balances directly. The
//! [`Exchange`](crate::exchange::Exchange) reads reserves and LP supply
//! through [`AssetLedger::balance`] and [`AssetLedger::supply`], and hands
//! each [`Transition`](crate::engine::Transition)'s effects to
//! [`AssetLedger::apply`] as an [`EffectBatch`] issued by the pool.
//!
//! # Atomicity
//!
//! `apply` must execute the whole batch or none of it. If any effect
//! fails, every balance and supply must read exactly as it did before the
//! call.
//!
//! # Authority
//!
//! A batch may debit only its issuer's vault and mint or burn only its
//! issuer's LP asset. [`EffectBatch`] cannot be built outside this crate,
//! so the only way to move vault balances is a pool operation.

use crate::domain::{AccountId, Amount, Asset, EffectBatch, Holder, TokenAddress};
use crate::error::AmmError;

/// A ledger of fungible balances that can apply pool effects atomically.
///
/// # Implementors
///
/// - [`InMemoryLedger`](crate::ledger::InMemoryLedger): `HashMap`-backed
///   book used by tests and demos.
///
/// # Errors
///
/// [`apply`](Self::apply) typically fails with
/// [`AmmError::InsufficientBalance`] on an overdraft, or
/// [`AmmError::InvalidEffect`] for an effect the ledger refuses: minting a
/// token asset, debiting another pool's vault, minting or burning another
/// pool's LP asset.
pub trait AssetLedger {
    /// Balance of `asset` held by `holder`. Unknown pairs read as zero.
    fn balance(&self, holder: &Holder, asset: &Asset) -> Amount;

    /// Total outstanding quantity of `asset`.
    ///
    /// Meaningful for LP assets, whose supply only changes through
    /// [`Effect::Mint`](crate::domain::Effect::Mint) and
    /// [`Effect::Burn`](crate::domain::Effect::Burn).
    fn supply(&self, asset: &Asset) -> Amount;

    /// Funds `account` with `amount` of an external token.
    ///
    /// Never touches vaults or LP assets.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the balance or the
    /// token's supply would overflow.
    fn credit(&mut self, account: AccountId, token: TokenAddress, amount: Amount)
        -> Result<(), AmmError>;

    /// Applies `batch` in order, all or nothing.
    ///
    /// # Errors
    ///
    /// Returns the first failing effect's error; on error the ledger is
    /// left unchanged.
    fn apply(&mut self, batch: &EffectBatch) -> Result<(), AmmError>;
}
