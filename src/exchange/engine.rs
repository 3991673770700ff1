//! The exchange orchestrator: five trade operations over two pools.

use tracing::{debug, info};

use super::guard;
use super::state::{LaunchState, PoolState, VolumeState};
use super::supply;
use super::TradeEvent;
use crate::config::GenesisConfig;
use crate::domain::{AccountId, Amount, Deadline, Timestamp};
use crate::error::{ExchangeError, Result};
use crate::ledger::{Ledger, NativeLedger, StableLedger};
use crate::math::{apply_fee, mul_div, swap_out, transfer_to_other};

/// Slippage labels for the caller's minimum-output checks.
const ASSET_ECL: &str = "ECL";
const ASSET_VOLATILE: &str = "the volatile asset";
const ASSET_STABLE: &str = "the stable asset";

/// Share of a secondary-pool buy routed to the primary pool: 15 bp.
const CROSS_SUBSIDY_NUMERATOR: u128 = 15;
const CROSS_SUBSIDY_DENOMINATOR: u128 = 10_000;

/// The dual-pool exchange engine.
///
/// Owns the full engine state — pool balances, volume counters, the
/// launch flag, and the two token ledgers — and exposes the five trade
/// operations plus the launch-gated views. Every trade is an atomic
/// transition: all balance, supply, and volume updates and all ledger
/// transfers commit, or the operation errors with no state change.
///
/// The engine performs no locking of its own; the embedder must
/// serialize operations against one instance. Volatile-asset payments
/// arrive as the `sent` argument of the buy operations; volatile
/// payouts are reported in the returned [`TradeEvent`] for the
/// execution substrate to deliver.
///
/// # Example
///
/// ```
/// use ecl_exchange::config::GenesisConfig;
/// use ecl_exchange::domain::{AccountId, Amount, Deadline, Timestamp};
/// use ecl_exchange::exchange::{Exchange, TradeEvent};
/// use ecl_exchange::ledger::{Ledger, StableLedger};
///
/// let engine_acct = AccountId::from_bytes([0xec; 32]);
/// let treasury = AccountId::from_bytes([1u8; 32]);
/// let trader = AccountId::from_bytes([2u8; 32]);
///
/// // The stable asset is issued externally; fund the engine before launch.
/// let mut stable = StableLedger::new("DAI", treasury, Amount::new(1_000_000));
/// stable
///     .transfer(treasury, engine_acct, Amount::new(500_000))
///     .expect("funding transfer");
///
/// let genesis = GenesisConfig::new(
///     engine_acct,
///     Amount::new(300_000),
///     Amount::new(1_000_000_000),
/// )
/// .expect("valid genesis");
/// let mut engine = Exchange::new(&genesis, stable).expect("engine");
/// engine.launch().expect("launched");
///
/// let event = engine
///     .buy_primary(
///         trader,
///         Amount::new(1_000),
///         Amount::ZERO,
///         Deadline::new(60),
///         Timestamp::new(0),
///     )
///     .expect("trade");
/// let TradeEvent::BuyPrimary { ecl_received, .. } = event else {
///     panic!("unexpected event");
/// };
/// assert!(ecl_received.get() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct Exchange {
    account: AccountId,
    native: NativeLedger,
    stable: StableLedger,
    pools: PoolState,
    volumes: VolumeState,
    launch: LaunchState,
}

impl Exchange {
    /// Creates an engine from its genesis parameters and the injected
    /// stable-asset ledger.
    ///
    /// The volatile endowment is split one third to the primary pool,
    /// the remainder to the secondary pool, and the initial ECL supply
    /// is minted entirely to the engine's own account — circulating
    /// supply starts at zero. The engine is *not* launched yet.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidConfig`] if the genesis parameters are
    ///   out of range.
    pub fn new(genesis: &GenesisConfig, stable: StableLedger) -> Result<Self> {
        genesis.validate()?;

        let account = genesis.exchange_account();
        let primary = genesis.primary_endowment();
        let secondary = genesis
            .initial_volatile()
            .checked_sub(&primary)
            .ok_or(ExchangeError::Overflow("endowment split"))?;

        let mut native = NativeLedger::new();
        native.mint(account, genesis.initial_supply())?;

        Ok(Self {
            account,
            native,
            stable,
            pools: PoolState::from_endowment(primary, secondary),
            volumes: VolumeState::default(),
            launch: LaunchState::NotLaunched,
        })
    }

    // -- Launch -------------------------------------------------------------

    /// Opens trading. One-way, callable once.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::AlreadyLaunched`] after a successful launch.
    /// - [`ExchangeError::NotFunded`] while the stable pool is empty.
    pub fn launch(&mut self) -> Result<()> {
        if self.launch.is_launched() {
            return Err(ExchangeError::AlreadyLaunched);
        }
        let stable_depth = self.stable.balance_of(self.account);
        if stable_depth.is_zero() {
            return Err(ExchangeError::NotFunded);
        }
        self.launch = LaunchState::Launched;
        info!(stable = %stable_depth, "exchange launched");
        Ok(())
    }

    /// Returns `true` once the engine has launched.
    #[must_use]
    pub const fn launched(&self) -> bool {
        self.launch.is_launched()
    }

    // -- Trade operations ---------------------------------------------------

    /// Buys ECL with an attached volatile-asset payment of `sent`.
    ///
    /// The output is priced on pre-trade balances, the payment is split
    /// between the pools by the rebalancer, and the mint couples the
    /// pool's own reserve to the trade: `ecl_received` to the trader
    /// plus `floor(ecl_received/6) + 1` to the engine account.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`], [`ExchangeError::ZeroAmount`],
    /// [`ExchangeError::DeadlineElapsed`], [`ExchangeError::Slippage`],
    /// or an arithmetic error from the curve.
    pub fn buy_primary(
        &mut self,
        trader: AccountId,
        sent: Amount,
        min_ecl_out: Amount,
        deadline: Deadline,
        now: Timestamp,
    ) -> Result<TradeEvent> {
        self.launch.ensure_launched()?;
        guard::ensure_nonzero(sent)?;
        guard::ensure_deadline(deadline, now)?;

        let volatile_primary = self.pools.primary();
        let ecl_depth = self.native.balance_of(self.account);
        let received = apply_fee(swap_out(volatile_primary, ecl_depth, sent)?)?;
        guard::ensure_min_out(received, min_ecl_out, ASSET_ECL)?;

        let to_secondary = transfer_to_other(volatile_primary, self.pools.secondary(), sent)?;
        let to_primary = sent
            .checked_sub(&to_secondary)
            .ok_or(ExchangeError::Overflow("rebalance share exceeds payment"))?;
        let pool_mint = supply::pool_mint_for_buy(received)?;

        // Remaining headroom checks; nothing below this block may fail.
        let minted = received
            .checked_add(&pool_mint)
            .ok_or(ExchangeError::Overflow("minted amount"))?;
        self.native
            .total_supply()
            .checked_add(&minted)
            .ok_or(ExchangeError::Overflow("total supply"))?;
        self.volumes
            .primary()
            .checked_add(&sent)
            .ok_or(ExchangeError::Overflow("primary pool volume"))?;

        self.pools.credit_split(to_primary, to_secondary)?;
        self.native.mint(trader, received)?;
        self.native.mint(self.account, pool_mint)?;
        self.volumes.record_primary(sent)?;

        debug!(%trader, %sent, %received, %to_secondary, "buy_primary");
        Ok(TradeEvent::BuyPrimary {
            trader,
            ecl_received: received,
        })
    }

    /// Sells `ecl_sold` ECL against the primary pool for the volatile
    /// asset.
    ///
    /// Burns the seller's tokens plus `floor(ecl_sold/6)` from the
    /// pool's own reserve. The fee remainder of the gross output stays
    /// in the primary pool's accounted balance.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`], [`ExchangeError::ZeroAmount`],
    /// [`ExchangeError::DeadlineElapsed`],
    /// [`ExchangeError::InsufficientBalance`],
    /// [`ExchangeError::Slippage`], or an arithmetic error from the
    /// curve.
    pub fn sell_primary(
        &mut self,
        trader: AccountId,
        ecl_sold: Amount,
        min_volatile_out: Amount,
        deadline: Deadline,
        now: Timestamp,
    ) -> Result<TradeEvent> {
        self.launch.ensure_launched()?;
        guard::ensure_nonzero(ecl_sold)?;
        guard::ensure_deadline(deadline, now)?;
        guard::ensure_funds(self.native.balance_of(trader), ecl_sold)?;

        let ecl_depth = self.native.balance_of(self.account);
        let paid = apply_fee(swap_out(ecl_depth, self.pools.primary(), ecl_sold)?)?;
        guard::ensure_min_out(paid, min_volatile_out, ASSET_VOLATILE)?;

        let pool_burn = supply::pool_burn_for_sell(ecl_sold);
        guard::ensure_funds(ecl_depth, pool_burn)?;
        self.volumes
            .primary()
            .checked_add(&paid)
            .ok_or(ExchangeError::Overflow("primary pool volume"))?;

        // Nothing below may fail: both burns and the pool debit were
        // validated above (the curve keeps paid strictly below the
        // pool's volatile balance).
        self.native.burn(trader, ecl_sold)?;
        self.native.burn(self.account, pool_burn)?;
        self.pools.debit_primary(paid)?;
        self.volumes.record_primary(paid)?;

        debug!(%trader, %ecl_sold, %paid, "sell_primary");
        Ok(TradeEvent::SellPrimary {
            trader,
            volatile_received: paid,
        })
    }

    /// Redeems `ecl_sold` pro rata against both pools.
    ///
    /// Pays out fee-adjusted pro-rata shares of the primary pool's
    /// volatile balance, the secondary pool's volatile balance, and the
    /// secondary pool's stable balance, all against the circulating
    /// supply at the time of the call. Burns the seller's tokens plus a
    /// pro-rata slice of the pool's own ECL reserve.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`], [`ExchangeError::ZeroAmount`],
    /// [`ExchangeError::DeadlineElapsed`],
    /// [`ExchangeError::InsufficientBalance`], or
    /// [`ExchangeError::Slippage`] — the volatile-asset minimum is
    /// checked before the stable-asset minimum.
    pub fn soft_sell_primary(
        &mut self,
        trader: AccountId,
        ecl_sold: Amount,
        min_volatile_out: Amount,
        min_stable_out: Amount,
        deadline: Deadline,
        now: Timestamp,
    ) -> Result<TradeEvent> {
        self.launch.ensure_launched()?;
        guard::ensure_nonzero(ecl_sold)?;
        guard::ensure_deadline(deadline, now)?;
        guard::ensure_funds(self.native.balance_of(trader), ecl_sold)?;

        // The balance check above bounds ecl_sold by the circulating
        // supply, so the divisions below are well-defined.
        let circulating = self.circulating()?;
        let ecl_depth = self.native.balance_of(self.account);
        let stable_depth = self.stable.balance_of(self.account);

        let from_primary = supply::pro_rata_share(ecl_sold, self.pools.primary(), circulating)?;
        let from_secondary = supply::pro_rata_share(ecl_sold, self.pools.secondary(), circulating)?;
        let stable_out = supply::pro_rata_share(ecl_sold, stable_depth, circulating)?;
        let volatile_out = from_primary
            .checked_add(&from_secondary)
            .ok_or(ExchangeError::Overflow("volatile payout"))?;
        guard::ensure_min_out(volatile_out, min_volatile_out, ASSET_VOLATILE)?;
        guard::ensure_min_out(stable_out, min_stable_out, ASSET_STABLE)?;

        let pool_burn = supply::pro_rata_share(ecl_sold, ecl_depth, circulating)?;
        self.volumes
            .primary()
            .checked_add(&from_primary)
            .ok_or(ExchangeError::Overflow("primary pool volume"))?;
        self.volumes
            .secondary()
            .checked_add(&from_secondary)
            .ok_or(ExchangeError::Overflow("secondary pool volume"))?;

        // Nothing below may fail: each payout and burn slice is a
        // pro-rata fraction of the balance it draws from.
        self.native.burn(trader, ecl_sold)?;
        self.native.burn(self.account, pool_burn)?;
        self.stable.transfer(self.account, trader, stable_out)?;
        self.pools.debit_split(from_primary, from_secondary)?;
        self.volumes.record_primary(from_primary)?;
        self.volumes.record_secondary(from_secondary)?;

        debug!(%trader, %ecl_sold, %volatile_out, %stable_out, "soft_sell_primary");
        Ok(TradeEvent::SoftSellPrimary {
            trader,
            volatile_received: volatile_out,
            stable_received: stable_out,
        })
    }

    /// Buys the stable asset with an attached volatile-asset payment of
    /// `sent`.
    ///
    /// A fixed 15 bp cross-subsidy of the payment is credited to the
    /// primary pool; the remainder enters the secondary pool. Supply is
    /// unaffected — the stable asset is externally issued.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`], [`ExchangeError::ZeroAmount`],
    /// [`ExchangeError::DeadlineElapsed`], [`ExchangeError::Slippage`],
    /// or an arithmetic error from the curve.
    pub fn buy_secondary(
        &mut self,
        trader: AccountId,
        sent: Amount,
        min_stable_out: Amount,
        deadline: Deadline,
        now: Timestamp,
    ) -> Result<TradeEvent> {
        self.launch.ensure_launched()?;
        guard::ensure_nonzero(sent)?;
        guard::ensure_deadline(deadline, now)?;

        let stable_depth = self.stable.balance_of(self.account);
        let received = apply_fee(swap_out(self.pools.secondary(), stable_depth, sent)?)?;
        guard::ensure_min_out(received, min_stable_out, ASSET_STABLE)?;

        let to_primary = mul_div(
            sent,
            Amount::new(CROSS_SUBSIDY_NUMERATOR),
            Amount::new(CROSS_SUBSIDY_DENOMINATOR),
        )?;
        let to_secondary = sent
            .checked_sub(&to_primary)
            .ok_or(ExchangeError::Overflow("cross-subsidy exceeds payment"))?;
        self.volumes
            .secondary()
            .checked_add(&sent)
            .ok_or(ExchangeError::Overflow("secondary pool volume"))?;

        // Nothing below may fail: the curve keeps received strictly
        // below the stable depth.
        self.pools.credit_split(to_primary, to_secondary)?;
        self.stable.transfer(self.account, trader, received)?;
        self.volumes.record_secondary(sent)?;

        debug!(%trader, %sent, %received, %to_primary, "buy_secondary");
        Ok(TradeEvent::BuySecondary {
            trader,
            stable_received: received,
        })
    }

    /// Sells `stable_sold` stable units against the secondary pool for
    /// the volatile asset.
    ///
    /// Requires prior approval of at least `stable_sold` from the
    /// trader to the engine account on the stable ledger. Half of the
    /// untaken fee (`gross − paid`) is credited to the primary pool;
    /// the remainder stays in the secondary pool, never paid out.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`], [`ExchangeError::ZeroAmount`],
    /// [`ExchangeError::DeadlineElapsed`],
    /// [`ExchangeError::InsufficientBalance`],
    /// [`ExchangeError::Slippage`], or [`ExchangeError::Allowance`].
    pub fn sell_secondary(
        &mut self,
        trader: AccountId,
        stable_sold: Amount,
        min_volatile_out: Amount,
        deadline: Deadline,
        now: Timestamp,
    ) -> Result<TradeEvent> {
        self.launch.ensure_launched()?;
        guard::ensure_nonzero(stable_sold)?;
        guard::ensure_deadline(deadline, now)?;
        guard::ensure_funds(self.stable.balance_of(trader), stable_sold)?;

        let stable_depth = self.stable.balance_of(self.account);
        let gross = swap_out(stable_depth, self.pools.secondary(), stable_sold)?;
        let paid = apply_fee(gross)?;
        guard::ensure_min_out(paid, min_volatile_out, ASSET_VOLATILE)?;

        let fee_amt = gross
            .checked_sub(&paid)
            .ok_or(ExchangeError::Overflow("fee remainder"))?;
        let to_primary = Amount::new(fee_amt.get() / 2);
        self.volumes
            .secondary()
            .checked_add(&paid)
            .ok_or(ExchangeError::Overflow("secondary pool volume"))?;

        // The allowance and balance checks live inside transfer_from;
        // it is the first mutation, and everything after it cannot
        // fail (gross stays strictly below the secondary pool).
        self.stable
            .transfer_from(self.account, trader, self.account, stable_sold)?;
        self.pools.debit_secondary(paid)?;
        self.pools.reassign_to_primary(to_primary)?;
        self.volumes.record_secondary(paid)?;

        debug!(%trader, %stable_sold, %paid, %to_primary, "sell_secondary");
        Ok(TradeEvent::SellSecondary {
            trader,
            volatile_received: paid,
        })
    }

    // -- Views --------------------------------------------------------------

    /// Volatile units attributed to the primary pool.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`] before launch.
    pub fn volatile_of_primary_pool(&self) -> Result<Amount> {
        self.launch.ensure_launched()?;
        Ok(self.pools.primary())
    }

    /// Volatile units attributed to the secondary pool.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`] before launch.
    pub fn volatile_of_secondary_pool(&self) -> Result<Amount> {
        self.launch.ensure_launched()?;
        Ok(self.pools.secondary())
    }

    /// ECL attributed to the primary pool as curve depth.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`] before launch.
    pub fn native_of_primary_pool(&self) -> Result<Amount> {
        self.launch.ensure_launched()?;
        Ok(self.native.balance_of(self.account))
    }

    /// Stable units held by the secondary pool.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`] before launch.
    pub fn stable_of_secondary_pool(&self) -> Result<Amount> {
        self.launch.ensure_launched()?;
        Ok(self.stable.balance_of(self.account))
    }

    /// ECL supply not held by the pool itself.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`] before launch.
    pub fn circulating_supply(&self) -> Result<Amount> {
        self.launch.ensure_launched()?;
        self.circulating()
    }

    /// Lifetime volatile flow through the primary pool.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`] before launch.
    pub fn volatile_volume_of_primary_pool(&self) -> Result<Amount> {
        self.launch.ensure_launched()?;
        Ok(self.volumes.primary())
    }

    /// Lifetime volatile flow through the secondary pool.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`] before launch.
    pub fn volatile_volume_of_secondary_pool(&self) -> Result<Amount> {
        self.launch.ensure_launched()?;
        Ok(self.volumes.secondary())
    }

    // -- Accessors ----------------------------------------------------------

    /// The engine's own account identity.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Read access to the ECL ledger.
    #[must_use]
    pub const fn native(&self) -> &NativeLedger {
        &self.native
    }

    /// Read access to the stable ledger.
    #[must_use]
    pub const fn stable(&self) -> &StableLedger {
        &self.stable
    }

    /// Write access to the stable ledger, for approvals and for
    /// funding the engine account between trades.
    pub fn stable_mut(&mut self) -> &mut StableLedger {
        &mut self.stable
    }

    fn circulating(&self) -> Result<Amount> {
        self.native
            .total_supply()
            .checked_sub(&self.native.balance_of(self.account))
            .ok_or(ExchangeError::Overflow("pool reserve exceeds total supply"))
    }
}
