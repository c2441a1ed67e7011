//! Pool arena that binds the pure engine to an [`AssetLedger`].
//!
//! [`Exchange`] owns every [`PoolConfig`] in a `Vec` indexed by [`PoolId`]
//! plus a [`PoolKey`] index that enforces identity uniqueness. Each
//! mutating call follows the same sequence:
//!
//! 1. resolve the pool and snapshot its [`PoolState`] from the ledger;
//! 2. run the engine transition;
//! 3. hand the effects to [`AssetLedger::apply`] as an [`EffectBatch`]
//!    issued by that pool (all or nothing);
//! 4. commit any config change.
//!
//! A failure at any step leaves the ledger and the arena untouched.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::{PoolConfig, PoolKey, PoolParams};
use crate::domain::{AccountId, Amount, Asset, EffectBatch, Holder, Liquidity, PoolId, TokenAddress};
use crate::engine::{
    self, DepositReceipt, DepositRequest, PoolState, SwapReceipt, SwapRequest, Transition,
    WithdrawReceipt, WithdrawRequest,
};
use crate::error::{AmmError, Result};
use crate::traits::AssetLedger;

/// A set of constant-product pools sharing one ledger.
///
/// # Examples
///
/// ```
/// use hydra_cpamm::prelude::*;
///
/// let lp = AccountId::from_bytes([1; 32]);
/// let usdc = TokenAddress::from_bytes([0xA0; 32]);
/// let weth = TokenAddress::from_bytes([0xB0; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.credit(lp, usdc, Amount::new(1_000_000)).expect("funded");
/// ledger.credit(lp, weth, Amount::new(1_000_000)).expect("funded");
///
/// let mut exchange = Exchange::new(ledger);
/// let params = PoolParams::new(1, None, usdc, weth, BasisPoints::new(30)).expect("valid");
/// let pool = exchange.initialize(&params).expect("created");
///
/// let receipt = exchange
///     .deposit(
///         pool,
///         lp,
///         DepositRequest::new(Liquidity::new(2_000_000), Amount::new(1_000_000), Amount::new(1_000_000)),
///     )
///     .expect("bootstrap");
/// assert!(receipt.bootstrap);
/// assert_eq!(exchange.state(pool).expect("exists").lp_supply(), Liquidity::new(2_000_000));
/// ```
#[derive(Debug, Clone)]
pub struct Exchange<L> {
    ledger: L,
    pools: Vec<PoolConfig>,
    index: HashMap<PoolKey, PoolId>,
}

impl<L: AssetLedger> Exchange<L> {
    /// Creates an exchange with no pools over `ledger`.
    pub fn new(ledger: L) -> Self {
        Self {
            ledger,
            pools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The underlying ledger.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mints `amount` of `token` to `account` on the underlying ledger.
    ///
    /// # Errors
    ///
    /// Whatever [`AssetLedger::credit`] returns, typically
    /// [`AmmError::ArithmeticOverflow`].
    pub fn credit(&mut self, account: AccountId, token: TokenAddress, amount: Amount) -> Result<()> {
        self.ledger.credit(account, token, amount).map_err(|err| {
            debug!(account = %account, token = %token, %err, "credit rejected");
            err
        })?;
        debug!(account = %account, token = %token, amount = amount.get(), "credit");
        Ok(())
    }

    /// Consumes the exchange and returns its ledger.
    pub fn into_ledger(self) -> L {
        self.ledger
    }

    /// Number of pools created so far.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Iterates over every pool in creation order.
    pub fn pools(&self) -> impl Iterator<Item = &PoolConfig> {
        self.pools.iter()
    }

    /// Looks up a pool record.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NotFound`] for an unknown handle.
    pub fn pool(&self, id: PoolId) -> Result<&PoolConfig> {
        usize::try_from(id.index())
            .ok()
            .and_then(|i| self.pools.get(i))
            .ok_or(AmmError::NotFound)
    }

    /// Resolves a pool identity to its handle.
    #[must_use]
    pub fn find(&self, key: &PoolKey) -> Option<PoolId> {
        self.index.get(key).copied()
    }

    /// Current reserves and LP supply of a pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NotFound`] for an unknown handle.
    pub fn state(&self, id: PoolId) -> Result<PoolState> {
        let pool = self.pool(id)?;
        Ok(self.snapshot(pool))
    }

    /// LP shares of `id` held by `account`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NotFound`] for an unknown handle.
    pub fn shares_of(&self, id: PoolId, account: AccountId) -> Result<Liquidity> {
        let pool = self.pool(id)?;
        Ok(self.shares(pool, account))
    }

    /// Creates a pool from `params` and registers its LP asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::AlreadyExists`] if a pool with the same identity
    ///   exists or the ledger already knows the LP asset.
    /// - [`AmmError::InvalidFee`] if the fee is not below 100%.
    /// - [`AmmError::ArithmeticOverflow`] if the handle space is exhausted.
    pub fn initialize(&mut self, params: &PoolParams) -> Result<PoolId> {
        let key = params.key();
        if self.index.contains_key(&key) {
            debug!(seed = params.seed(), "initialize rejected: pool exists");
            return Err(AmmError::AlreadyExists);
        }
        let index = u32::try_from(self.pools.len())
            .map_err(|_| AmmError::ArithmeticOverflow("pool id space exhausted"))?;
        let id = PoolId::new(index);

        let config = engine::initialize(id, params)
            .and_then(|t| self.settle(id, t))
            .map_err(|err| {
                debug!(pool = %id, %err, "initialize rejected");
                err
            })?;

        self.pools.push(config);
        self.index.insert(key, id);
        info!(
            pool = %id,
            seed = config.seed(),
            asset_x = %config.asset_x(),
            asset_y = %config.asset_y(),
            fee = %config.fee(),
            "pool created"
        );
        Ok(id)
    }

    /// Deposits liquidity into pool `id` on behalf of `caller`.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotFound`], any error of [`engine::deposit`], or the
    /// ledger's rejection (typically [`AmmError::InsufficientBalance`]).
    pub fn deposit(
        &mut self,
        id: PoolId,
        caller: AccountId,
        request: DepositRequest,
    ) -> Result<DepositReceipt> {
        let pool = *self.pool(id)?;
        let state = self.snapshot(&pool);
        let receipt = engine::deposit(&pool, &state, caller, request)
            .and_then(|t| self.settle(id, t))
            .map_err(|err| {
                debug!(pool = %id, caller = %caller, %err, "deposit rejected");
                err
            })?;

        debug!(
            pool = %id,
            caller = %caller,
            amount_x = receipt.amount_x.get(),
            amount_y = receipt.amount_y.get(),
            lp_minted = receipt.lp_minted.get(),
            bootstrap = receipt.bootstrap,
            "deposit"
        );
        Ok(receipt)
    }

    /// Swaps through pool `id` on behalf of `caller`.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotFound`], any error of [`engine::swap`], or the
    /// ledger's rejection.
    pub fn swap(&mut self, id: PoolId, caller: AccountId, request: SwapRequest) -> Result<SwapReceipt> {
        let pool = *self.pool(id)?;
        let state = self.snapshot(&pool);
        let receipt = engine::swap(&pool, &state, caller, request)
            .and_then(|t| self.settle(id, t))
            .map_err(|err| {
                debug!(pool = %id, caller = %caller, %err, "swap rejected");
                err
            })?;

        debug!(
            pool = %id,
            caller = %caller,
            direction = %receipt.direction,
            amount_in = receipt.amount_in.get(),
            amount_out = receipt.amount_out.get(),
            fee = receipt.fee.get(),
            "swap"
        );
        Ok(receipt)
    }

    /// Burns `caller`'s shares of pool `id` for a proportional payout.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotFound`], any error of [`engine::withdraw`], or the
    /// ledger's rejection.
    pub fn withdraw(
        &mut self,
        id: PoolId,
        caller: AccountId,
        request: WithdrawRequest,
    ) -> Result<WithdrawReceipt> {
        let pool = *self.pool(id)?;
        let state = self.snapshot(&pool);
        let shares = self.shares(&pool, caller);
        let receipt = engine::withdraw(&pool, &state, caller, shares, request)
            .and_then(|t| self.settle(id, t))
            .map_err(|err| {
                debug!(pool = %id, caller = %caller, %err, "withdraw rejected");
                err
            })?;

        debug!(
            pool = %id,
            caller = %caller,
            amount_x = receipt.amount_x.get(),
            amount_y = receipt.amount_y.get(),
            lp_burned = receipt.lp_burned.get(),
            "withdraw"
        );
        Ok(receipt)
    }

    /// Permanently locks pool `id`.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotFound`], [`AmmError::Unauthorized`] or
    /// [`AmmError::PoolLocked`].
    pub fn lock(&mut self, id: PoolId, caller: AccountId) -> Result<()> {
        let pool = self.pool(id)?;
        let locked = engine::lock(pool, caller).map_err(|err| {
            debug!(pool = %id, caller = %caller, %err, "lock rejected");
            err
        })?;
        if let Some(slot) = usize::try_from(id.index())
            .ok()
            .and_then(|i| self.pools.get_mut(i))
        {
            *slot = locked;
        }
        info!(pool = %id, caller = %caller, "pool locked");
        Ok(())
    }

    /// Computes what [`deposit`](Self::deposit) would do, without applying
    /// it. Does not check the caller's balances.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotFound`] or any error of [`engine::deposit`].
    pub fn quote_deposit(
        &self,
        id: PoolId,
        caller: AccountId,
        request: DepositRequest,
    ) -> Result<DepositReceipt> {
        let pool = self.pool(id)?;
        engine::deposit(pool, &self.snapshot(pool), caller, request).map(|t| t.receipt)
    }

    /// Computes what [`swap`](Self::swap) would do, without applying it.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotFound`] or any error of [`engine::swap`].
    pub fn quote_swap(&self, id: PoolId, caller: AccountId, request: SwapRequest) -> Result<SwapReceipt> {
        let pool = self.pool(id)?;
        engine::swap(pool, &self.snapshot(pool), caller, request).map(|t| t.receipt)
    }

    /// Computes what [`withdraw`](Self::withdraw) would do, without
    /// applying it.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotFound`] or any error of [`engine::withdraw`].
    pub fn quote_withdraw(
        &self,
        id: PoolId,
        caller: AccountId,
        request: WithdrawRequest,
    ) -> Result<WithdrawReceipt> {
        let pool = self.pool(id)?;
        let shares = self.shares(pool, caller);
        engine::withdraw(pool, &self.snapshot(pool), caller, shares, request).map(|t| t.receipt)
    }

    /// Applies a transition's effects as pool `id` and returns its receipt.
    fn settle<R>(&mut self, id: PoolId, transition: Transition<R>) -> Result<R> {
        let Transition {
            receipt, effects, ..
        } = transition;
        self.ledger.apply(&EffectBatch::new(id, effects))?;
        Ok(receipt)
    }

    fn snapshot(&self, pool: &PoolConfig) -> PoolState {
        let vault = pool.vault();
        PoolState::new(
            self.ledger.balance(&vault, &Asset::Token(pool.asset_x())),
            self.ledger.balance(&vault, &Asset::Token(pool.asset_y())),
            Liquidity::from(self.ledger.supply(&pool.lp_asset())),
        )
    }

    fn shares(&self, pool: &PoolConfig, account: AccountId) -> Liquidity {
        Liquidity::from(self.ledger.balance(&Holder::Account(account), &pool.lp_asset()))
    }
}
