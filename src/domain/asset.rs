//! Ledger-facing identities: what is held, and who holds it.

use core::fmt;

use super::{AccountId, PoolId, TokenAddress};

/// A fungible asset tracked by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Asset {
    /// An externally issued token escrowed by pools.
    Token(TokenAddress),
    /// The liquidity-share asset of one pool. Only that pool may mint it.
    Lp(PoolId),
}

impl Asset {
    /// Returns the owning pool if this is an LP asset.
    #[must_use]
    pub const fn lp_pool(&self) -> Option<PoolId> {
        match self {
            Self::Lp(pool) => Some(*pool),
            Self::Token(_) => None,
        }
    }
}

impl From<TokenAddress> for Asset {
    fn from(addr: TokenAddress) -> Self {
        Self::Token(addr)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(addr) => write!(f, "token:{addr}"),
            Self::Lp(pool) => write!(f, "lp:{pool}"),
        }
    }
}

/// An owner of ledger balances.
///
/// A pool's X-vault and Y-vault are the balances of `Vault(pool)` in the
/// pool's two assets. Ledgers debit a vault only for an
/// [`EffectBatch`](super::EffectBatch) issued by that same pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holder {
    /// A caller-controlled account.
    Account(AccountId),
    /// The escrow of a pool.
    Vault(PoolId),
}

impl From<AccountId> for Holder {
    fn from(account: AccountId) -> Self {
        Self::Account(account)
    }
}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(id) => write!(f, "account:{id}"),
            Self::Vault(pool) => write!(f, "vault:{pool}"),
        }
    }
}
