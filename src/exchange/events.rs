//! Informational trade records.

use core::fmt;

use crate::domain::{AccountId, Amount};

/// Record emitted on every successful trade.
///
/// Events are informational only: the engine decides *what* to emit and
/// returns the record to the caller; delivery is the execution
/// substrate's concern. For operations that pay out the volatile asset,
/// the substrate reads the payout amount from the record. Events are
/// never consulted by engine control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeEvent {
    /// A trader bought ECL with the volatile asset.
    BuyPrimary {
        /// The buying account.
        trader: AccountId,
        /// ECL minted to the trader.
        ecl_received: Amount,
    },
    /// A trader sold ECL against the primary pool.
    SellPrimary {
        /// The selling account.
        trader: AccountId,
        /// Volatile units owed to the trader.
        volatile_received: Amount,
    },
    /// A trader redeemed ECL pro rata against both pools.
    SoftSellPrimary {
        /// The selling account.
        trader: AccountId,
        /// Combined volatile units owed to the trader from both pools.
        volatile_received: Amount,
        /// Stable units transferred to the trader.
        stable_received: Amount,
    },
    /// A trader bought the stable asset with the volatile asset.
    BuySecondary {
        /// The buying account.
        trader: AccountId,
        /// Stable units transferred to the trader.
        stable_received: Amount,
    },
    /// A trader sold the stable asset against the secondary pool.
    SellSecondary {
        /// The selling account.
        trader: AccountId,
        /// Volatile units owed to the trader.
        volatile_received: Amount,
    },
}

impl TradeEvent {
    /// Returns the account that initiated the trade.
    #[must_use]
    pub const fn trader(&self) -> AccountId {
        match self {
            Self::BuyPrimary { trader, .. }
            | Self::SellPrimary { trader, .. }
            | Self::SoftSellPrimary { trader, .. }
            | Self::BuySecondary { trader, .. }
            | Self::SellSecondary { trader, .. } => *trader,
        }
    }
}

impl fmt::Display for TradeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuyPrimary { trader, ecl_received } => {
                write!(f, "BuyPrimary(trader={trader}, ecl={ecl_received})")
            }
            Self::SellPrimary {
                trader,
                volatile_received,
            } => write!(f, "SellPrimary(trader={trader}, volatile={volatile_received})"),
            Self::SoftSellPrimary {
                trader,
                volatile_received,
                stable_received,
            } => write!(
                f,
                "SoftSellPrimary(trader={trader}, volatile={volatile_received}, stable={stable_received})"
            ),
            Self::BuySecondary {
                trader,
                stable_received,
            } => write!(f, "BuySecondary(trader={trader}, stable={stable_received})"),
            Self::SellSecondary {
                trader,
                volatile_received,
            } => write!(f, "SellSecondary(trader={trader}, volatile={volatile_received})"),
        }
    }
}
