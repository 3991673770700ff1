//! Constant-product swap output for a single pool leg.

use super::mul_div;
use crate::domain::Amount;
use crate::error::{ExchangeError, Result};

/// Computes the gross output of a constant-product swap:
///
/// ```text
/// out = out_balance − floor(in_balance · out_balance / (in_balance + in_amount)) − 1
/// ```
///
/// The unconditional `−1` is a deliberate pool-favoring bias on top of
/// floor division: any remainder *and* one extra unit stay in the pool,
/// so repeated dust trades can never extract value.
///
/// The transaction fee is **not** applied here; callers pass the result
/// through [`apply_fee`](super::apply_fee) exactly once.
///
/// # Errors
///
/// - [`ExchangeError::ZeroReserve`] if `in_balance` is zero.
/// - [`ExchangeError::Overflow`] if `in_balance + in_amount` overflows.
/// - [`ExchangeError::ArithmeticUnderflow`] if the subtraction would go
///   negative. The error propagates and fails the caller's whole
///   operation before any state mutation — the result never wraps.
///
/// # Examples
///
/// ```
/// use ecl_exchange::domain::Amount;
/// use ecl_exchange::math::swap_out;
///
/// // Selling into a 100/110 pool.
/// let out = swap_out(Amount::new(100), Amount::new(110), Amount::new(12));
/// assert_eq!(out, Ok(Amount::new(11)));
/// ```
pub fn swap_out(in_balance: Amount, out_balance: Amount, in_amount: Amount) -> Result<Amount> {
    if in_balance.is_zero() {
        return Err(ExchangeError::ZeroReserve);
    }

    let denominator = in_balance
        .checked_add(&in_amount)
        .ok_or(ExchangeError::Overflow("curve denominator"))?;
    let fraction = mul_div(in_balance, out_balance, denominator)?;

    out_balance
        .checked_sub(&fraction)
        .and_then(|v| v.checked_sub(&Amount::ONE))
        .ok_or(ExchangeError::ArithmeticUnderflow)
}
