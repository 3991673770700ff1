//! Owned engine state: pool balances, volume counters, launch flag.
//!
//! The whole engine state is explicit and owned — no hidden statics —
//! so tests can run any number of independent instances.

use crate::domain::Amount;
use crate::error::{ExchangeError, Result};

/// Volatile-asset balances attributed to the two pools.
///
/// Both sides are stored and kept in lockstep: every mutation goes
/// through the methods below, which validate the combined total still
/// fits before either side changes, so
/// `primary + secondary == total volatile held` holds unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolState {
    volatile_primary: Amount,
    volatile_secondary: Amount,
}

impl PoolState {
    /// Seeds the pools from the genesis endowment split.
    pub(crate) const fn from_endowment(primary: Amount, secondary: Amount) -> Self {
        Self {
            volatile_primary: primary,
            volatile_secondary: secondary,
        }
    }

    /// Volatile units attributed to the primary (ECL-facing) pool.
    pub const fn primary(&self) -> Amount {
        self.volatile_primary
    }

    /// Volatile units attributed to the secondary (stable-facing) pool.
    pub const fn secondary(&self) -> Amount {
        self.volatile_secondary
    }

    /// Credits an incoming payment split across the two pools.
    ///
    /// Nothing mutates unless both new balances and their sum fit.
    pub(crate) fn credit_split(&mut self, to_primary: Amount, to_secondary: Amount) -> Result<()> {
        let primary = self
            .volatile_primary
            .checked_add(&to_primary)
            .ok_or(ExchangeError::Overflow("primary pool balance"))?;
        let secondary = self
            .volatile_secondary
            .checked_add(&to_secondary)
            .ok_or(ExchangeError::Overflow("secondary pool balance"))?;
        primary
            .checked_add(&secondary)
            .ok_or(ExchangeError::Overflow("total volatile held"))?;
        self.volatile_primary = primary;
        self.volatile_secondary = secondary;
        Ok(())
    }

    /// Removes an outgoing payout from the primary pool.
    pub(crate) fn debit_primary(&mut self, amount: Amount) -> Result<()> {
        self.volatile_primary = self
            .volatile_primary
            .checked_sub(&amount)
            .ok_or(ExchangeError::ArithmeticUnderflow)?;
        Ok(())
    }

    /// Removes an outgoing payout from the secondary pool.
    pub(crate) fn debit_secondary(&mut self, amount: Amount) -> Result<()> {
        self.volatile_secondary = self
            .volatile_secondary
            .checked_sub(&amount)
            .ok_or(ExchangeError::ArithmeticUnderflow)?;
        Ok(())
    }

    /// Removes a payout drawn pro rata from both pools. Nothing mutates
    /// unless both debits succeed.
    pub(crate) fn debit_split(&mut self, from_primary: Amount, from_secondary: Amount) -> Result<()> {
        let primary = self
            .volatile_primary
            .checked_sub(&from_primary)
            .ok_or(ExchangeError::ArithmeticUnderflow)?;
        let secondary = self
            .volatile_secondary
            .checked_sub(&from_secondary)
            .ok_or(ExchangeError::ArithmeticUnderflow)?;
        self.volatile_primary = primary;
        self.volatile_secondary = secondary;
        Ok(())
    }

    /// Moves attribution from the secondary pool to the primary pool
    /// without changing the total held.
    pub(crate) fn reassign_to_primary(&mut self, amount: Amount) -> Result<()> {
        let secondary = self
            .volatile_secondary
            .checked_sub(&amount)
            .ok_or(ExchangeError::ArithmeticUnderflow)?;
        let primary = self
            .volatile_primary
            .checked_add(&amount)
            .ok_or(ExchangeError::Overflow("primary pool balance"))?;
        self.volatile_secondary = secondary;
        self.volatile_primary = primary;
        Ok(())
    }
}

/// Cumulative volatile-asset flow per pool.
///
/// Monotonically non-decreasing, informational only — never read by
/// pricing logic. Buys record the gross amount sent; sells record the
/// net amount paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VolumeState {
    primary: Amount,
    secondary: Amount,
}

impl VolumeState {
    /// Lifetime volatile flow through the primary pool.
    pub const fn primary(&self) -> Amount {
        self.primary
    }

    /// Lifetime volatile flow through the secondary pool.
    pub const fn secondary(&self) -> Amount {
        self.secondary
    }

    pub(crate) fn record_primary(&mut self, amount: Amount) -> Result<()> {
        self.primary = self
            .primary
            .checked_add(&amount)
            .ok_or(ExchangeError::Overflow("primary pool volume"))?;
        Ok(())
    }

    pub(crate) fn record_secondary(&mut self, amount: Amount) -> Result<()> {
        self.secondary = self
            .secondary
            .checked_add(&amount)
            .ok_or(ExchangeError::Overflow("secondary pool volume"))?;
        Ok(())
    }
}

/// One-way launch gate.
///
/// The engine starts `NotLaunched`; [`Exchange::launch`] moves it to
/// `Launched` exactly once and nothing moves it back.
///
/// [`Exchange::launch`]: crate::exchange::Exchange::launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchState {
    /// Pools are being funded; trading and balance views are rejected.
    #[default]
    NotLaunched,
    /// Trading is open. Terminal.
    Launched,
}

impl LaunchState {
    /// Returns `true` once launched.
    #[must_use]
    pub const fn is_launched(&self) -> bool {
        matches!(self, Self::Launched)
    }

    /// Rejects gated operations before launch.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::NotLaunched`] while `NotLaunched`.
    pub const fn ensure_launched(&self) -> Result<()> {
        match self {
            Self::NotLaunched => Err(ExchangeError::NotLaunched),
            Self::Launched => Ok(()),
        }
    }
}
