//! The ECL ledger: the one ledger the exchange may mint on and burn on.

use super::book::BalanceBook;
use super::Ledger;
use crate::domain::{AccountId, Amount};
use crate::error::{ExchangeError, Result};

/// In-memory ledger for the native token (ECL).
///
/// Supply starts at zero; the genesis sequence mints the initial supply
/// to the exchange's own account, and afterwards every change to supply
/// is driven by a trade (buys mint, sells burn). `mint` and `burn` are
/// inherent methods rather than part of [`Ledger`] — no other ledger
/// exposes them.
#[derive(Debug, Clone, Default)]
pub struct NativeLedger {
    book: BalanceBook,
    total_supply: Amount,
}

impl NativeLedger {
    /// Token name.
    pub const NAME: &'static str = "Eclipseum";

    /// Token symbol.
    pub const SYMBOL: &'static str = "ECL";

    /// Token decimals.
    pub const DECIMALS: u8 = 18;

    /// Creates an empty ledger with zero supply.
    #[must_use]
    pub fn new() -> Self {
        Self {
            book: BalanceBook::new(),
            total_supply: Amount::ZERO,
        }
    }

    /// Creates `amount` new units and credits them to `to`.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::Overflow`] if the total supply or the recipient
    /// balance would exceed `u128::MAX`.
    pub fn mint(&mut self, to: AccountId, amount: Amount) -> Result<()> {
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(ExchangeError::Overflow("total supply"))?;
        self.book.credit(to, amount)?;
        self.total_supply = supply;
        Ok(())
    }

    /// Destroys `amount` units held by `from`.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::InsufficientBalance`] if `from` holds less than
    /// `amount`.
    pub fn burn(&mut self, from: AccountId, amount: Amount) -> Result<()> {
        self.book.debit(from, amount)?;
        // Supply underflow is impossible: the burned balance is part of
        // the supply.
        self.total_supply = self
            .total_supply
            .checked_sub(&amount)
            .ok_or(ExchangeError::Overflow("total supply below burned amount"))?;
        Ok(())
    }
}

impl Ledger for NativeLedger {
    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn balance_of(&self, account: AccountId) -> Amount {
        self.book.balance_of(account)
    }

    fn transfer(&mut self, from: AccountId, to: AccountId, amount: Amount) -> Result<()> {
        self.book.transfer(from, to, amount)
    }

    fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount) {
        self.book.approve(owner, spender, amount);
    }

    fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount {
        self.book.allowance(owner, spender)
    }

    fn transfer_from(
        &mut self,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        self.book.transfer_from(spender, owner, to, amount)
    }
}
