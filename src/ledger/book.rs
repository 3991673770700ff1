//! Shared balance and allowance bookkeeping for the concrete ledgers.

use std::collections::HashMap;

use crate::domain::{AccountId, Amount};
use crate::error::{ExchangeError, Result};

/// Map-backed balance book with ERC-20-style allowances.
///
/// Both concrete ledgers delegate their account bookkeeping here; the
/// difference between them is solely whether supply can change after
/// construction.
#[derive(Debug, Clone, Default)]
pub(crate) struct BalanceBook {
    balances: HashMap<AccountId, Amount>,
    allowances: HashMap<(AccountId, AccountId), Amount>,
}

impl BalanceBook {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A book holding `amount` for `account` and nothing else.
    pub(crate) fn seeded(account: AccountId, amount: Amount) -> Self {
        let mut book = Self::default();
        book.balances.insert(account, amount);
        book
    }

    pub(crate) fn balance_of(&self, account: AccountId) -> Amount {
        self.balances.get(&account).copied().unwrap_or(Amount::ZERO)
    }

    /// Adds `amount` to `account`.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::Overflow`] if the balance would exceed `u128::MAX`.
    pub(crate) fn credit(&mut self, account: AccountId, amount: Amount) -> Result<()> {
        let updated = self
            .balance_of(account)
            .checked_add(&amount)
            .ok_or(ExchangeError::Overflow("ledger balance"))?;
        self.balances.insert(account, updated);
        Ok(())
    }

    /// Removes `amount` from `account`.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::InsufficientBalance`] if `account` holds less
    /// than `amount`.
    pub(crate) fn debit(&mut self, account: AccountId, amount: Amount) -> Result<()> {
        let updated = self
            .balance_of(account)
            .checked_sub(&amount)
            .ok_or(ExchangeError::InsufficientBalance)?;
        self.balances.insert(account, updated);
        Ok(())
    }

    /// Atomic balance move: the debit is validated before either side
    /// mutates.
    pub(crate) fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        let debited = self
            .balance_of(from)
            .checked_sub(&amount)
            .ok_or(ExchangeError::InsufficientBalance)?;
        let credited = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(ExchangeError::Overflow("ledger balance"))?;
        self.balances.insert(from, debited);
        self.balances.insert(to, credited);
        Ok(())
    }

    pub(crate) fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount) {
        self.allowances.insert((owner, spender), amount);
    }

    pub(crate) fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Consumes allowance then moves the balance; nothing mutates if
    /// either check fails.
    pub(crate) fn transfer_from(
        &mut self,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        let remaining = self
            .allowance(owner, spender)
            .checked_sub(&amount)
            .ok_or(ExchangeError::Allowance)?;
        // Validate the balance move before consuming the allowance.
        if self.balance_of(owner) < amount {
            return Err(ExchangeError::InsufficientBalance);
        }
        self.allowances.insert((owner, spender), remaining);
        self.transfer(owner, to, amount)
    }
}
