//! The externally issued stable-asset ledger.

use super::book::BalanceBook;
use super::Ledger;
use crate::domain::{AccountId, Amount};
use crate::error::Result;

/// In-memory ledger for the stable asset backing the secondary pool.
///
/// The entire supply is minted to a single holder at construction and
/// is immutable afterwards — the exchange can move stable units around
/// but never create or destroy them. The embedder builds and funds this
/// ledger, then injects it into the
/// [`Exchange`](crate::exchange::Exchange).
#[derive(Debug, Clone)]
pub struct StableLedger {
    symbol: &'static str,
    book: BalanceBook,
    total_supply: Amount,
}

impl StableLedger {
    /// Creates a ledger whose full `supply` is held by `initial_holder`.
    #[must_use]
    pub fn new(symbol: &'static str, initial_holder: AccountId, supply: Amount) -> Self {
        Self {
            symbol,
            book: BalanceBook::seeded(initial_holder, supply),
            total_supply: supply,
        }
    }

    /// Token symbol chosen by the issuer.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }
}

impl Ledger for StableLedger {
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
