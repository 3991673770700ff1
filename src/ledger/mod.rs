//! Fungible-token ledger capability consumed by the exchange.
//!
//! The engine never stores token balances itself; it calls into the
//! [`Ledger`] capability. Two concrete variants exist:
//!
//! - [`NativeLedger`] — the ECL ledger. The only ledger that exposes
//!   `mint` and `burn` to the exchange.
//! - [`StableLedger`] — the externally issued stable asset. Its supply
//!   is fixed at construction and can only move between accounts.
//!
//! Both are injected into (or created by) the
//! [`Exchange`](crate::exchange::Exchange) at construction; the engine
//! performs no locking of its own and relies on the embedder to
//! serialize access.

mod book;
mod native;
mod stable;

pub use native::NativeLedger;
pub use stable::StableLedger;

use crate::domain::{AccountId, Amount};
use crate::error::Result;

/// Capability interface over a fungible-token ledger.
///
/// Mirrors the minimal transfer/approve/allowance surface the engine
/// needs. Minting and burning are deliberately *not* part of the trait:
/// only the primary asset's ledger exposes them, as inherent methods on
/// [`NativeLedger`].
pub trait Ledger {
    /// Total units in existence on this ledger.
    fn total_supply(&self) -> Amount;

    /// Balance held by `account`. Unknown accounts hold zero.
    fn balance_of(&self, account: AccountId) -> Amount;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::InsufficientBalance`](crate::error::ExchangeError::InsufficientBalance)
    /// if `from` holds less than `amount`.
    fn transfer(&mut self, from: AccountId, to: AccountId, amount: Amount) -> Result<()>;

    /// Sets `spender`'s allowance over `owner`'s balance to `amount`,
    /// replacing any previous value.
    fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount);

    /// Remaining allowance `spender` may draw from `owner`.
    fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount;

    /// Moves `amount` from `owner` to `to` on behalf of `spender`,
    /// consuming allowance.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::Allowance`](crate::error::ExchangeError::Allowance)
    ///   if `spender`'s allowance over `owner` is below `amount`.
    /// - [`ExchangeError::InsufficientBalance`](crate::error::ExchangeError::InsufficientBalance)
    ///   if `owner` holds less than `amount`.
    fn transfer_from(
        &mut self,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()>;
}
