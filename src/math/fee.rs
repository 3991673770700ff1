//! The fixed 0.3 % transaction fee.

use super::mul_div;
use crate::domain::Amount;
use crate::error::Result;

/// Numerator of the fee retention ratio: the trader keeps 997 parts.
pub const FEE_NUMERATOR: u128 = 997;

/// Denominator of the fee retention ratio.
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Applies the fixed 0.3 % transaction fee to a gross amount:
/// `floor(amount · 997 / 1000)`.
///
/// The fee rate is a constant of the system, never configurable, and is
/// applied exactly once per output leg. The remainder
/// `amount − apply_fee(amount)` stays with the pool the output was
/// drawn from (or is routed to the other pool, depending on the
/// operation).
///
/// # Errors
///
/// Infallible in practice (`floor(x·997/1000) ≤ x` always fits); typed
/// as [`Result`] for uniformity with the other pricing helpers.
///
/// # Examples
///
/// ```
/// use ecl_exchange::domain::Amount;
/// use ecl_exchange::math::apply_fee;
///
/// assert_eq!(apply_fee(Amount::new(1_000)), Ok(Amount::new(997)));
/// assert_eq!(apply_fee(Amount::new(1)), Ok(Amount::ZERO));
/// ```
pub fn apply_fee(amount: Amount) -> Result<Amount> {
    mul_div(
        amount,
        Amount::new(FEE_NUMERATOR),
        Amount::new(FEE_DENOMINATOR),
    )
}
