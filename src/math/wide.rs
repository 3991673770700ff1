//! Full-width multiply-then-divide.

use alloy_primitives::U256;

use crate::domain::Amount;
use crate::error::{ExchangeError, Result};

/// Computes `floor(a · b / divisor)` without intermediate overflow.
///
/// The product of two 18-decimal balances routinely exceeds 128 bits,
/// so the multiplication is carried out in 256 bits and only the
/// quotient is narrowed back.
///
/// # Errors
///
/// - [`ExchangeError::DivisionByZero`] if `divisor` is zero.
/// - [`ExchangeError::Overflow`] if the quotient exceeds `u128::MAX`.
///
/// # Examples
///
/// ```
/// use ecl_exchange::domain::Amount;
/// use ecl_exchange::math::mul_div;
///
/// let wei = 10u128.pow(18);
/// let q = mul_div(
///     Amount::new(100 * wei),
///     Amount::new(110 * wei),
///     Amount::new(112 * wei),
/// );
/// assert_eq!(q, Ok(Amount::new(98_214_285_714_285_714_285)));
/// ```
pub fn mul_div(a: Amount, b: Amount, divisor: Amount) -> Result<Amount> {
    if divisor.is_zero() {
        return Err(ExchangeError::DivisionByZero);
    }
    let product = U256::from(a.get()) * U256::from(b.get());
    let quotient = product / U256::from(divisor.get());
    u128::try_from(quotient)
        .map(Amount::new)
        .map_err(|_| ExchangeError::Overflow("mul_div quotient exceeds 128 bits"))
}
