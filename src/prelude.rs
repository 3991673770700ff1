//! Convenience re-exports for common types and traits.
//!
//! A single import brings the items most consumers need into scope:
//!
//! ```rust
//! use ecl_exchange::prelude::*;
//! ```

pub use crate::config::GenesisConfig;
pub use crate::domain::{AccountId, Amount, Deadline, Timestamp};
pub use crate::error::{ExchangeError, Result};
pub use crate::exchange::{Exchange, TradeEvent};
pub use crate::ledger::{Ledger, NativeLedger, StableLedger};
pub use crate::math::{apply_fee, swap_out, transfer_to_other};
