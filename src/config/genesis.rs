//! Genesis parameters for a new exchange instance.

use crate::domain::{AccountId, Amount};
use crate::error::{ExchangeError, Result};

/// Share of the volatile endowment kept by the primary pool: one third.
/// The secondary pool receives the remainder.
pub(crate) const PRIMARY_ENDOWMENT_DIVISOR: u128 = 3;

/// Immutable parameters fixed at engine creation.
///
/// The engine starts with a volatile-asset endowment split between the
/// two pools (one third to the primary pool, the rest to the secondary)
/// and an initial ECL supply minted entirely to the exchange's own
/// account, so circulating supply starts at zero. The stable pool is
/// funded separately, by transferring stable units to
/// `exchange_account` on the injected ledger before launch.
///
/// # Validation
///
/// - `initial_supply` must be non-zero.
/// - `initial_volatile` must be at least 3 units so both pools start
///   non-empty after the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisConfig {
    exchange_account: AccountId,
    initial_volatile: Amount,
    initial_supply: Amount,
}

impl GenesisConfig {
    /// Creates a new `GenesisConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidConfig`] if a parameter is out
    /// of range.
    pub fn new(
        exchange_account: AccountId,
        initial_volatile: Amount,
        initial_supply: Amount,
    ) -> Result<Self> {
        let config = Self {
            exchange_account,
            initial_volatile,
            initial_supply,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidConfig`] if a parameter is out
    /// of range.
    pub fn validate(&self) -> Result<()> {
        if self.initial_supply.is_zero() {
            return Err(ExchangeError::InvalidConfig(
                "initial supply must be non-zero",
            ));
        }
        if self.initial_volatile.get() < PRIMARY_ENDOWMENT_DIVISOR {
            return Err(ExchangeError::InvalidConfig(
                "volatile endowment must fund both pools",
            ));
        }
        Ok(())
    }

    /// Returns the exchange's own account identity.
    #[must_use]
    pub const fn exchange_account(&self) -> AccountId {
        self.exchange_account
    }

    /// Returns the total volatile-asset endowment.
    pub const fn initial_volatile(&self) -> Amount {
        self.initial_volatile
    }

    /// Returns the initial ECL supply.
    pub const fn initial_supply(&self) -> Amount {
        self.initial_supply
    }

    /// The primary pool's share of the endowment: `initial_volatile / 3`.
    pub fn primary_endowment(&self) -> Amount {
        Amount::new(self.initial_volatile.get() / PRIMARY_ENDOWMENT_DIVISOR)
    }
}
