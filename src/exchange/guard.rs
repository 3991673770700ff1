//! Precondition checks shared by every trade entry point.
//!
//! Each trade runs these in a fixed order before any state mutates:
//! principal positivity, deadline, seller balance (sell-side only), and
//! — once outputs are computed — the caller's minimum-output bounds,
//! volatile-asset output before stable-asset output when both are
//! present.

use crate::domain::{Amount, Deadline, Timestamp};
use crate::error::{ExchangeError, Result};

/// Rejects a zero principal amount.
pub(crate) const fn ensure_nonzero(amount: Amount) -> Result<()> {
    if amount.is_zero() {
        return Err(ExchangeError::ZeroAmount);
    }
    Ok(())
}

/// Rejects a trade whose deadline lies strictly in the past.
pub(crate) const fn ensure_deadline(deadline: Deadline, now: Timestamp) -> Result<()> {
    if deadline.elapsed_by(now) {
        return Err(ExchangeError::DeadlineElapsed);
    }
    Ok(())
}

/// Rejects a sale larger than the seller's balance of the asset sold.
pub(crate) fn ensure_funds(balance: Amount, amount_sold: Amount) -> Result<()> {
    if amount_sold > balance {
        return Err(ExchangeError::InsufficientBalance);
    }
    Ok(())
}

/// Rejects an output below the caller's minimum for `asset`.
pub(crate) fn ensure_min_out(actual: Amount, minimum: Amount, asset: &'static str) -> Result<()> {
    if actual < minimum {
        return Err(ExchangeError::Slippage(asset));
    }
    Ok(())
}
