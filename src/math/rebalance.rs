//! Inter-pool rebalancing of incoming volatile-asset payments.

use super::mul_div;
use crate::domain::Amount;
use crate::error::{ExchangeError, Result};

/// Computes how much of a volatile-asset payment entering the primary
/// pool should be credited to the secondary pool instead:
///
/// ```text
/// if primary ≥ sent/2 + secondary   → sent·3/4
/// else if primary + sent ≤ secondary → 0
/// else                               → (primary + sent − secondary) / 2
/// ```
///
/// All divisions floor. The result is always in `[0, 3·sent/4]`, so the
/// primary pool keeps at least a quarter of every payment while the two
/// pools' volatile holdings converge toward parity over repeated
/// trades.
///
/// # Errors
///
/// Returns [`ExchangeError::Overflow`] if `primary + sent` (or the
/// first branch's comparison sum) overflows.
///
/// # Examples
///
/// ```
/// use ecl_exchange::domain::Amount;
/// use ecl_exchange::math::transfer_to_other;
///
/// // Primary is far ahead of secondary: the clamped 3/4 share applies.
/// let share = transfer_to_other(Amount::new(100), Amount::new(93), Amount::new(10));
/// assert_eq!(share, Ok(Amount::new(7)));
/// ```
pub fn transfer_to_other(primary: Amount, secondary: Amount, sent: Amount) -> Result<Amount> {
    let half_sent = Amount::new(sent.get() / 2);
    let clamp_threshold = half_sent
        .checked_add(&secondary)
        .ok_or(ExchangeError::Overflow("rebalance clamp threshold"))?;

    if primary >= clamp_threshold {
        return mul_div(sent, Amount::new(3), Amount::new(4));
    }

    let entering = primary
        .checked_add(&sent)
        .ok_or(ExchangeError::Overflow("rebalance entering balance"))?;
    if entering <= secondary {
        return Ok(Amount::ZERO);
    }

    // entering > secondary holds here, so the subtraction is safe.
    Ok(Amount::new((entering.get() - secondary.get()) / 2))
}
