//! `HashMap`-backed ledger.

use std::collections::HashMap;

use crate::domain::{AccountId, Amount, Asset, Effect, EffectBatch, Holder, PoolId, TokenAddress};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::AssetLedger;

/// An in-process balance book.
///
/// Token balances enter through [`credit`](AssetLedger::credit); LP
/// balances only through [`Effect::Mint`] of an asset registered with
/// [`Effect::CreateLpAsset`]. [`apply`](AssetLedger::apply) stages the
/// entries a batch touches and merges them once every effect succeeds.
///
/// # Examples
///
/// ```
/// use hydra_cpamm::domain::{AccountId, Amount, Asset, Holder, TokenAddress};
/// use hydra_cpamm::ledger::InMemoryLedger;
/// use hydra_cpamm::traits::AssetLedger;
///
/// let alice = AccountId::from_bytes([1; 32]);
/// let usdc = TokenAddress::from_bytes([9; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.credit(alice, usdc, Amount::new(500)).expect("no overflow");
/// assert_eq!(
///     ledger.balance(&Holder::Account(alice), &Asset::Token(usdc)),
///     Amount::new(500),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    balances: HashMap<(Holder, Asset), Amount>,
    supplies: HashMap<Asset, Amount>,
    lp_authorities: HashMap<Asset, PoolId>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `asset` has been registered as an LP asset.
    #[must_use]
    pub fn is_registered(&self, asset: &Asset) -> bool {
        self.lp_authorities.contains_key(asset)
    }

    fn commit(&mut self, changes: Changes) {
        for (key, amount) in changes.balances {
            if amount.is_zero() {
                self.balances.remove(&key);
            } else {
                self.balances.insert(key, amount);
            }
        }
        self.supplies.extend(changes.supplies);
        self.lp_authorities.extend(changes.lp_authorities);
    }
}

impl AssetLedger for InMemoryLedger {
    fn balance(&self, holder: &Holder, asset: &Asset) -> Amount {
        self.balances
            .get(&(*holder, *asset))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn supply(&self, asset: &Asset) -> Amount {
        self.supplies.get(asset).copied().unwrap_or(Amount::ZERO)
    }

    fn credit(&mut self, account: AccountId, token: TokenAddress, amount: Amount) -> Result<()> {
        let asset = Asset::Token(token);
        let holder = Holder::Account(account);
        let new_supply = self
            .supply(&asset)
            .safe_add(&amount, "token supply overflow on credit")?;
        let new_balance = self
            .balance(&holder, &asset)
            .safe_add(&amount, "balance overflow on credit")?;
        self.supplies.insert(asset, new_supply);
        self.balances.insert((holder, asset), new_balance);
        Ok(())
    }

    fn apply(&mut self, batch: &EffectBatch) -> Result<()> {
        let mut staged = Staged {
            base: self,
            issuer: batch.issuer(),
            changes: Changes::default(),
        };
        for effect in batch.effects() {
            staged.apply_one(effect)?;
        }
        let changes = staged.changes;
        self.commit(changes);
        Ok(())
    }
}

/// Entries touched by one batch.
#[derive(Default)]
struct Changes {
    balances: HashMap<(Holder, Asset), Amount>,
    supplies: HashMap<Asset, Amount>,
    lp_authorities: HashMap<Asset, PoolId>,
}

/// [`Changes`] layered over the committed book.
struct Staged<'a> {
    base: &'a InMemoryLedger,
    issuer: PoolId,
    changes: Changes,
}

impl Staged<'_> {
    fn balance(&self, holder: Holder, asset: Asset) -> Amount {
        self.changes
            .balances
            .get(&(holder, asset))
            .copied()
            .unwrap_or_else(|| self.base.balance(&holder, &asset))
    }

    fn supply(&self, asset: Asset) -> Amount {
        self.changes
            .supplies
            .get(&asset)
            .copied()
            .unwrap_or_else(|| self.base.supply(&asset))
    }

    fn authority(&self, asset: Asset) -> Option<PoolId> {
        self.changes
            .lp_authorities
            .get(&asset)
            .or_else(|| self.base.lp_authorities.get(&asset))
            .copied()
    }

    fn ensure_own_vault(&self, holder: Holder) -> Result<()> {
        match holder {
            Holder::Vault(pool) if pool != self.issuer => {
                Err(AmmError::InvalidEffect("vault belongs to another pool"))
            }
            _ => Ok(()),
        }
    }

    fn ensure_mint_authority(&self, asset: Asset) -> Result<()> {
        if asset.lp_pool().is_none() {
            return Err(AmmError::InvalidEffect("token assets cannot be minted or burned"));
        }
        match self.authority(asset) {
            Some(authority) if authority == self.issuer => Ok(()),
            Some(_) => Err(AmmError::InvalidEffect("mint authority mismatch")),
            None => Err(AmmError::InvalidEffect("lp asset not registered")),
        }
    }

    fn add_to(&mut self, holder: Holder, asset: Asset, amount: Amount) -> Result<()> {
        let updated = self
            .balance(holder, asset)
            .safe_add(&amount, "balance overflow")?;
        self.changes.balances.insert((holder, asset), updated);
        Ok(())
    }

    fn take_from(&mut self, holder: Holder, asset: Asset, amount: Amount) -> Result<()> {
        let remaining = self
            .balance(holder, asset)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance)?;
        self.changes.balances.insert((holder, asset), remaining);
        Ok(())
    }

    fn apply_one(&mut self, effect: &Effect) -> Result<()> {
        match *effect {
            Effect::CreateLpAsset { asset, pool } => {
                if pool != self.issuer || asset != Asset::Lp(pool) {
                    return Err(AmmError::InvalidEffect("lp asset must belong to its pool"));
                }
                if self.authority(asset).is_some() {
                    return Err(AmmError::AlreadyExists);
                }
                self.changes.lp_authorities.insert(asset, pool);
                self.changes.supplies.insert(asset, Amount::ZERO);
                Ok(())
            }
            Effect::Transfer {
                asset,
                from,
                to,
                amount,
            } => {
                self.ensure_own_vault(from)?;
                self.ensure_own_vault(to)?;
                self.take_from(from, asset, amount)?;
                self.add_to(to, asset, amount)
            }
            Effect::Mint { asset, to, amount } => {
                self.ensure_mint_authority(asset)?;
                let supply = self.supply(asset).safe_add(&amount, "lp supply overflow")?;
                self.add_to(to, asset, amount)?;
                self.changes.supplies.insert(asset, supply);
                Ok(())
            }
            Effect::Burn {
                asset,
                from,
                amount,
            } => {
                self.ensure_mint_authority(asset)?;
                self.take_from(from, asset, amount)?;
                let supply = self.supply(asset).safe_sub(&amount, "lp supply underflow")?;
                self.changes.supplies.insert(asset, supply);
                Ok(())
            }
        }
    }
}
